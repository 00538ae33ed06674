use dioxus::prelude::*;

/// Dashboard page heading with a title, a description line and optional actions.
#[component]
pub fn PageHeader(
    title: String,
    #[props(default)] description: String,
    #[props(default)] children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "page-header",
            div { class: "page-header-text",
                h1 { class: "page-title", "{title}" }
                if !description.is_empty() {
                    p { class: "page-description", "{description}" }
                }
            }
            div { class: "page-actions", {children} }
        }
    }
}
