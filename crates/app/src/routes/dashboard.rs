use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCamera, LdMapPin, LdPlane, LdSearch, LdStar, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::{filter_destinations, paginate, Destination, PAGE_SIZE};
use shared_ui::components::{
    Badge, BadgeVariant, Card, CardContent, CardHeader, CardTitle, DataTable, DataTableBody,
    DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, Input, Pagination, Progress,
    ProgressIndicator, SearchBar, Skeleton,
};

use crate::format_helpers::format_price;
use crate::providers::{CatalogProvider, MockApi};

/// Number of skeleton placeholders shown while the catalog loads.
const SKELETON_COUNT: usize = 3;

/// Planner dashboard: statistics tiles plus the trending destinations
/// table with client-side search and pagination.
#[component]
pub fn PlannerDashboardPage() -> Element {
    let mut search = use_signal(String::new);
    let page = use_signal(|| 1i64);

    let destinations = use_resource(move || async move { MockApi.fetch_destinations().await });

    let table_body = match &*destinations.read() {
        None => rsx! { LoadingSkeletons {} },
        Some(Err(err)) => rsx! {
            p { class: "load-error", "{err.message}" }
        },
        Some(Ok(catalog)) => {
            let filtered = filter_destinations(catalog, &search.read());
            let view = paginate(&filtered, *page.read(), PAGE_SIZE);
            rsx! {
                DestinationTable { destinations: view.items.clone() }
                Pagination { page, total_pages: view.meta.total_pages }
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard-page",
            StatsGrid {}

            Card { class: "destinations-card",
                CardHeader {
                    div { class: "destinations-header",
                        CardTitle {
                            div { class: "destinations-title",
                                Icon::<LdCamera> { icon: LdCamera, width: 22, height: 22 }
                                "Trending Destinations"
                            }
                        }
                        SearchBar {
                            span { class: "search-icon",
                                Icon::<LdSearch> { icon: LdSearch, width: 18, height: 18 }
                            }
                            Input {
                                value: search.read().clone(),
                                placeholder: "Search destinations...",
                                // Filters on every keystroke; the current page
                                // is not reset, so a shrinking result set can
                                // leave an out-of-range (empty) page.
                                on_input: move |evt: FormEvent| search.set(evt.value().to_string()),
                            }
                        }
                    }
                }
                CardContent {
                    {table_body}
                }
            }
        }
    }
}

/// Row of skeleton placeholders shown during the initial catalog load.
#[component]
fn LoadingSkeletons() -> Element {
    rsx! {
        div { class: "table-loading",
            for _ in 0..SKELETON_COUNT {
                Skeleton {}
            }
        }
    }
}

/// Responsive grid of four statistics tiles.
#[component]
fn StatsGrid() -> Element {
    rsx! {
        div { class: "stats-grid",
            StatCard {
                title: "Active Trips",
                value: "847",
                caption: "Currently exploring",
                accent: "sunset",
                icon: rsx! { Icon::<LdPlane> { icon: LdPlane, width: 28, height: 28 } },
            }
            StatCard {
                title: "Destinations",
                value: "156",
                caption: "Available worldwide",
                accent: "orchid",
                icon: rsx! { Icon::<LdMapPin> { icon: LdMapPin, width: 28, height: 28 } },
            }
            StatCard {
                title: "Happy Travelers",
                value: "12,847",
                caption: "This season",
                accent: "ocean",
                icon: rsx! { Icon::<LdUsers> { icon: LdUsers, width: 28, height: 28 } },
            }
            StatCard {
                title: "Satisfaction",
                value: "98%",
                caption: "Customer rating",
                accent: "lagoon",
                icon: rsx! { Icon::<LdStar> { icon: LdStar, width: 28, height: 28 } },
            }
        }
    }
}

/// A single statistics tile with a headline number and caption.
#[component]
fn StatCard(title: String, value: String, caption: String, accent: String, icon: Element) -> Element {
    rsx! {
        Card { class: "stat-card {accent}",
            CardHeader {
                div { class: "stat-header-row",
                    CardTitle { "{title}" }
                    span { class: "stat-icon", {icon} }
                }
            }
            CardContent {
                span { class: "stat-value", "{value}" }
                p { class: "stat-caption", "{caption}" }
            }
        }
    }
}

#[component]
fn DestinationTable(destinations: Vec<Destination>) -> Element {
    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn { "Destination" }
                DataTableColumn { "Country" }
                DataTableColumn { "Popularity Score" }
                DataTableColumn { "Starting Price" }
                DataTableColumn { "Status" }
            }
            DataTableBody {
                for destination in destinations.iter() {
                    DestinationRow { destination: destination.clone() }
                }
            }
        }
    }
}

#[component]
fn DestinationRow(destination: Destination) -> Element {
    let price = format_price(destination.price);

    rsx! {
        DataTableRow {
            DataTableCell {
                span { class: "destination-name", "{destination.name}" }
            }
            DataTableCell { "{destination.country}" }
            DataTableCell {
                div { class: "popularity-cell",
                    Progress {
                        value: Some(destination.popularity as f64),
                        ProgressIndicator {}
                    }
                    span { class: "popularity-value", "{destination.popularity}%" }
                }
            }
            DataTableCell {
                span { class: "destination-price", "{price}" }
            }
            DataTableCell {
                Badge { variant: BadgeVariant::Success, "Trending" }
            }
        }
    }
}
