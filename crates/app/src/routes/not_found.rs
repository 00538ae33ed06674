use dioxus::prelude::*;

use crate::routes::Route;

/// 404 page. Shown for any undefined path, whatever the sign-in state.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    use_hook({
        let path = path.clone();
        move || tracing::warn!(path = %path, "404: user attempted to access a non-existent route")
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "Oops! Page not found" }
                p { class: "not-found-message",
                    "The page "
                    code { "{path}" }
                    " does not exist."
                }
                Link { to: Route::Home {},
                    class: "not-found-link",
                    "Return to Home"
                }
            }
        }
    }
}
