use std::collections::HashMap;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdClock;
use dioxus_free_icons::Icon;
use shared_types::{BudgetRange, PlanTripRequest, TravelerParty, ALL_BUDGETS, ALL_PARTIES};
use shared_ui::components::{
    Form, FormSelect, Input, Modal, ModalClose, ModalFooter, ModalHeader, ModalTitle, Separator,
};

/// Plan-a-trip intake dialog.
///
/// Collects a [`PlanTripRequest`] and validates it client-side. The
/// trip-planning generation service is not built yet, so a valid
/// request is logged and the dialog closes.
#[component]
pub fn PlanTripModal(open: bool, on_close: EventHandler<()>) -> Element {
    let mut destination = use_signal(String::new);
    let mut start_date = use_signal(String::new);
    let mut end_date = use_signal(String::new);
    let mut travelers = use_signal(TravelerParty::default);
    let mut budget = use_signal(BudgetRange::default);
    let mut field_errors = use_signal(HashMap::<String, String>::new);

    // Present a blank form each time the dialog reopens.
    let mut was_open = use_signal(|| false);
    use_effect(move || {
        if open && !*was_open.peek() {
            destination.set(String::new());
            start_date.set(String::new());
            end_date.set(String::new());
            travelers.set(TravelerParty::default());
            budget.set(BudgetRange::default());
            field_errors.set(HashMap::new());
        }
        was_open.set(open);
    });

    let handle_submit = move |_: FormEvent| {
        let request = PlanTripRequest {
            destination: destination.read().trim().to_string(),
            start_date: start_date.read().clone(),
            end_date: end_date.read().clone(),
            travelers: *travelers.read(),
            budget: *budget.read(),
        };

        match request.validate() {
            Ok(()) => {
                // TODO: submit to the trip generation service once the backend API exists.
                tracing::info!(?request, "trip plan request captured");
                field_errors.set(HashMap::new());
                on_close.call(());
            }
            Err(err) => {
                field_errors.set(err.field_errors);
            }
        }
    };

    rsx! {
        Modal {
            open,
            on_close,
            ModalHeader {
                ModalTitle { "Plan Your Dream Vacation" }
                ModalClose { on_close }
            }

            Form {
                onsubmit: handle_submit,

                Input {
                    label: "Destination",
                    value: destination.read().clone(),
                    placeholder: "Where do you want to go?",
                    error: field_errors.read().get("destination").cloned(),
                    on_input: move |e: FormEvent| destination.set(e.value()),
                }

                div { class: "plan-trip-dates",
                    Input {
                        label: "Start Date",
                        input_type: "date",
                        value: start_date.read().clone(),
                        error: field_errors.read().get("start_date").cloned(),
                        on_input: move |e: FormEvent| start_date.set(e.value()),
                    }
                    Input {
                        label: "End Date",
                        input_type: "date",
                        value: end_date.read().clone(),
                        error: field_errors.read().get("end_date").cloned(),
                        on_input: move |e: FormEvent| end_date.set(e.value()),
                    }
                }

                Separator {}

                FormSelect {
                    label: "Number of Travelers",
                    value: travelers.read().as_str().to_string(),
                    onchange: move |e: Event<FormData>| {
                        travelers.set(TravelerParty::from_str_or_default(&e.value()));
                    },
                    for party in ALL_PARTIES {
                        option { value: party.as_str(), {party.label()} }
                    }
                }

                FormSelect {
                    label: "Budget Range",
                    value: budget.read().as_str().to_string(),
                    onchange: move |e: Event<FormData>| {
                        budget.set(BudgetRange::from_str_or_default(&e.value()));
                    },
                    for range in ALL_BUDGETS {
                        option { value: range.as_str(), {range.label()} }
                    }
                }

                ModalFooter {
                    button {
                        class: "button",
                        "data-style": "primary",
                        r#type: "submit",
                        Icon::<LdClock> { icon: LdClock, width: 16, height: 16 }
                        "Generate AI Travel Plan"
                    }
                }
            }
        }
    }
}
