use dioxus::prelude::*;

/// Form wrapper that suppresses native submission and browser validation.
///
/// Field checks happen in Rust before `onsubmit` callers act on the data.
#[component]
pub fn Form(
    #[props(default)] onsubmit: EventHandler<FormEvent>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "form", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        form {
            novalidate: true,
            onsubmit: move |evt| {
                evt.prevent_default();
                onsubmit.call(evt);
            },
            ..merged,
            {children}
        }
    }
}

/// Two-column row that collapses to one column on narrow screens.
#[component]
pub fn FormRow(children: Element) -> Element {
    rsx! {
        div { class: "form-row", {children} }
    }
}

/// Right-aligned button strip at the bottom of a form.
#[component]
pub fn FormActions(children: Element) -> Element {
    rsx! {
        div { class: "form-actions", {children} }
    }
}
