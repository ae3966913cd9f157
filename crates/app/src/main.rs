use dioxus::prelude::*;

mod format_helpers;
mod providers;
mod routes;

use routes::Route;

/// Modal visibility shared between the navbar action and the screens.
///
/// Any part of the layout can open the plan-a-trip dialog; the dialog
/// itself is rendered once, in the layout.
#[derive(Clone, Copy)]
pub struct PlannerContext {
    pub show_plan_modal: Signal<bool>,
}

const THEME: Asset = asset!("/assets/theme.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| PlannerContext {
        show_plan_modal: Signal::new(false),
    });

    rsx! {
        document::Link { rel: "stylesheet", href: THEME }
        Router::<Route> {}
    }
}
