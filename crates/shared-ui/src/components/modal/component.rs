use dioxus::prelude::*;

/// Centered overlay dialog.
///
/// Clicking the overlay closes the dialog; clicks inside the panel do
/// not propagate. Render nothing while closed so the dialog holds no
/// DOM when hidden.
#[component]
pub fn Modal(open: bool, on_close: EventHandler<()>, children: Element) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "modal-overlay",
            "data-open": "true",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-panel",
                onclick: move |evt| evt.stop_propagation(),
                {children}
            }
        }
    }
}

/// Header section of a Modal.
#[component]
pub fn ModalHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "modal-header", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

/// Title element within a ModalHeader.
#[component]
pub fn ModalTitle(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "modal-title", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        h2 {
            ..merged,
            {children}
        }
    }
}

/// Description text within a ModalHeader.
#[component]
pub fn ModalDescription(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "modal-description", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        p {
            ..merged,
            {children}
        }
    }
}

/// Footer section of a Modal, typically for action buttons.
#[component]
pub fn ModalFooter(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "modal-footer", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

/// Close button for a Modal.
#[component]
pub fn ModalClose(on_close: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "modal-close",
            r#type: "button",
            "aria-label": "Close",
            onclick: move |_| on_close.call(()),
            "\u{2715}"
        }
    }
}
