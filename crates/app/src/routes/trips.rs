use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCalendar, LdClock, LdMapPin};
use dioxus_free_icons::Icon;
use shared_types::{Trip, TripStatus};
use shared_ui::components::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader,
    CardTitle, PageHeader, PageSubtitle, PageTitle, Skeleton,
};

use crate::format_helpers::format_date_range;
use crate::providers::{MockApi, TripProvider};
use crate::PlannerContext;

/// Number of skeleton cards shown while trips load.
const SKELETON_COUNT: usize = 3;

/// Trip list screen: upcoming trips as a card grid.
#[component]
pub fn TripListPage() -> Element {
    let trips = use_resource(move || async move { MockApi.fetch_upcoming_trips().await });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./trips.css") }

        div { class: "trips-page",
            PageHeader {
                div {
                    PageTitle { "Your Travel Dashboard" }
                    PageSubtitle {
                        "Manage your upcoming adventures and plan your next getaway"
                    }
                }
            }

            h2 { class: "trips-section-title",
                Icon::<LdCalendar> { icon: LdCalendar, width: 22, height: 22 }
                "Upcoming Trips"
            }

            match &*trips.read() {
                None => rsx! { LoadingSkeletons {} },
                Some(Err(err)) => rsx! {
                    Card {
                        CardContent {
                            p { class: "load-error", "{err.message}" }
                        }
                    }
                },
                Some(Ok(trips)) if !trips.is_empty() => rsx! {
                    div { class: "trips-grid",
                        for trip in trips.iter() {
                            TripCard { trip: trip.clone() }
                        }
                    }
                },
                Some(Ok(_)) => rsx! { EmptyState {} },
            }
        }
    }
}

/// Grid of skeleton cards shown during the initial load.
#[component]
fn LoadingSkeletons() -> Element {
    rsx! {
        div { class: "trips-grid",
            for _ in 0..SKELETON_COUNT {
                Card {
                    CardContent {
                        Skeleton { style: "height: 10rem;" }
                        Skeleton { style: "height: 1.25rem; width: 60%; margin-top: 0.75rem;" }
                        Skeleton { style: "height: 1rem; width: 80%; margin-top: 0.5rem;" }
                    }
                }
            }
        }
    }
}

/// A single trip card with image, dates, duration, and status.
#[component]
fn TripCard(trip: Trip) -> Element {
    let date_range = format_date_range(&trip.start_date, &trip.end_date);
    let badge_variant = status_badge_variant(trip.status);
    let status_label = trip.status.label();

    rsx! {
        Card { class: "trip-card",
            div { class: "trip-image-wrap",
                img {
                    class: "trip-image",
                    src: "{trip.image}",
                    alt: "{trip.destination}",
                }
            }
            CardHeader {
                CardTitle {
                    div { class: "trip-title",
                        Icon::<LdMapPin> { icon: LdMapPin, width: 18, height: 18 }
                        "{trip.destination}"
                    }
                }
                CardDescription {
                    div { class: "trip-meta-row",
                        Icon::<LdCalendar> { icon: LdCalendar, width: 15, height: 15 }
                        span { "{date_range}" }
                    }
                    if let Some(duration) = trip.duration_label() {
                        div { class: "trip-meta-row",
                            Icon::<LdClock> { icon: LdClock, width: 15, height: 15 }
                            span { "{duration}" }
                        }
                    }
                }
            }
            CardContent {
                div { class: "trip-card-footer",
                    Badge { variant: badge_variant, "{status_label}" }
                    Button { variant: ButtonVariant::Ghost, "View Details" }
                }
            }
        }
    }
}

/// Shown when the trip list comes back empty.
#[component]
fn EmptyState() -> Element {
    let mut ctx = use_context::<PlannerContext>();

    rsx! {
        Card { class: "trips-empty",
            CardContent {
                Icon::<LdCalendar> { icon: LdCalendar, width: 48, height: 48 }
                h3 { "No upcoming trips" }
                p { "Start planning your next adventure!" }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| ctx.show_plan_modal.set(true),
                    "Plan a Trip"
                }
            }
        }
    }
}

fn status_badge_variant(status: TripStatus) -> BadgeVariant {
    match status {
        TripStatus::Upcoming => BadgeVariant::Primary,
        TripStatus::Ongoing => BadgeVariant::Success,
        TripStatus::Completed => BadgeVariant::Secondary,
    }
}
