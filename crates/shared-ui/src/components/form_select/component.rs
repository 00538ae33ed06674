use dioxus::prelude::*;

/// A themed native select element for forms.
///
/// Children should be `option { value: "...", "Label" }` elements.
#[component]
pub fn FormSelect(
    /// Current selected value.
    #[props(default)]
    value: String,
    #[props(default)]
    onchange: Option<EventHandler<Event<FormData>>>,
    #[props(default)]
    label: String,
    #[props(default)]
    name: String,
    /// Inline validation message shown under the select.
    #[props(default)]
    error: Option<String>,
    #[props(default = false)]
    disabled: bool,
    children: Element,
) -> Element {
    let invalid = error.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "form-select-wrapper",
            if !label.is_empty() {
                label { class: "form-select-label", r#for: "{name}", "{label}" }
            }
            select {
                class: "form-select",
                id: "{name}",
                name: "{name}",
                value: value,
                disabled: disabled,
                "aria-invalid": invalid,
                onchange: move |evt| {
                    if let Some(handler) = &onchange {
                        handler.call(evt);
                    }
                },
                {children}
            }
            if let Some(message) = error {
                p { class: "form-select-error", role: "alert", "{message}" }
            }
        }
    }
}
