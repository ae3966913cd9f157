use dioxus::prelude::*;

use crate::components::button::{Button, ButtonVariant};

/// Derived enabled state for the Previous/Next controls.
///
/// Controls disable at the boundaries instead of disappearing. An empty
/// list has zero pages, which disables both directions.
pub fn nav_state(page: i64, total_pages: i64) -> (bool, bool) {
    (page > 1, page < total_pages)
}

/// Page-based pagination controls with Previous/Next buttons.
#[component]
pub fn Pagination(page: Signal<i64>, total_pages: i64) -> Element {
    let current = *page.read();
    let (can_prev, can_next) = nav_state(current, total_pages);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "pagination",
            Button {
                variant: ButtonVariant::Outline,
                disabled: !can_prev,
                onclick: move |_| {
                    let current = *page.read();
                    if current > 1 {
                        page.set(current - 1);
                    }
                },
                "Previous"
            }
            if total_pages > 0 {
                span { class: "pagination-info",
                    "Page {current} of {total_pages}"
                }
            }
            Button {
                variant: ButtonVariant::Outline,
                disabled: !can_next,
                onclick: move |_| {
                    let current = *page.read();
                    if current < total_pages {
                        page.set(current + 1);
                    }
                },
                "Next"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn first_page_disables_previous_only() {
        assert_eq!(nav_state(1, 3), (false, true));
    }

    #[test]
    fn middle_page_enables_both() {
        assert_eq!(nav_state(2, 3), (true, true));
    }

    #[test]
    fn last_page_disables_next_only() {
        assert_eq!(nav_state(3, 3), (true, false));
    }

    #[test]
    fn single_page_disables_both() {
        assert_eq!(nav_state(1, 1), (false, false));
    }

    #[test]
    fn empty_list_disables_both() {
        // Zero pages: page 1 is already past the end.
        assert_eq!(nav_state(1, 0), (false, false));
    }

    #[test]
    fn page_beyond_the_end_still_allows_going_back() {
        // A shrinking filtered list can leave the page out of range.
        assert_eq!(nav_state(2, 1), (true, false));
    }

    #[component]
    fn Harness(start: i64, total_pages: i64) -> Element {
        let page = use_signal(|| start);
        rsx! {
            Pagination { page, total_pages }
        }
    }

    #[test]
    fn renders_current_position() {
        let mut dom = VirtualDom::new_with_props(
            Harness,
            HarnessProps {
                start: 2,
                total_pages: 3,
            },
        );
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("Page 2 of 3"), "unexpected html: {html}");
        assert!(html.contains("Previous"));
        assert!(html.contains("Next"));
    }

    #[test]
    fn omits_position_for_empty_lists() {
        let mut dom = VirtualDom::new_with_props(
            Harness,
            HarnessProps {
                start: 1,
                total_pages: 0,
            },
        );
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(!html.contains("Page 1 of 0"), "unexpected html: {html}");
    }
}
