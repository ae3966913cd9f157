pub mod dashboard;
pub mod not_found;
pub mod plan_trip;
pub mod trips;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdGlobe, LdPlus};
use dioxus_free_icons::Icon;
use shared_ui::{Button, ButtonVariant, Navbar};

use crate::PlannerContext;
use not_found::NotFound;
use plan_trip::PlanTripModal;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Dashboard {},
    #[route("/trips")]
    Trips {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Main app layout with top navbar, page content, and footer.
///
/// The plan-a-trip dialog lives here so the navbar action and the
/// screens share one instance through [`PlannerContext`].
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let mut ctx = use_context::<PlannerContext>();

    let dashboard_class = if matches!(route, Route::Dashboard {}) {
        "navbar-link active"
    } else {
        "navbar-link"
    };
    let trips_class = if matches!(route, Route::Trips {}) {
        "navbar-link active"
    } else {
        "navbar-link"
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        Navbar {
            div { class: "navbar-bar",
                Link {
                    to: Route::Dashboard {},
                    class: "navbar-brand",
                    Icon::<LdGlobe> { icon: LdGlobe, width: 26, height: 26 }
                    span { class: "navbar-brand-name", "TourismAgent Planner" }
                }

                nav { class: "navbar-links",
                    Link {
                        to: Route::Dashboard {},
                        class: dashboard_class,
                        "Dashboard"
                    }
                    Link {
                        to: Route::Trips {},
                        class: trips_class,
                        "My Trips"
                    }
                }

                div { class: "navbar-spacer" }

                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| ctx.show_plan_modal.set(true),
                    Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                    "Plan New Trip"
                }
            }
        }

        main { class: "page-content",
            Outlet::<Route> {}
        }

        footer { class: "footer",
            p { "\u{a9} 2024 TourismAgent Planner. Crafting unforgettable journeys with AI." }
        }

        PlanTripModal {
            open: (ctx.show_plan_modal)(),
            on_close: move |_| ctx.show_plan_modal.set(false),
        }
    }
}

#[component]
fn Dashboard() -> Element {
    dashboard::PlannerDashboardPage()
}

#[component]
fn Trips() -> Element {
    trips::TripListPage()
}
