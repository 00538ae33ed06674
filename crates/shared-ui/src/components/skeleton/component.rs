use dioxus::prelude::*;

/// Pulsing placeholder block.
#[component]
pub fn Skeleton(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let base = vec![Attribute::new("class", "skeleton", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
        }
    }
}

/// Stack of skeleton bars shown while a page waits for client state.
#[component]
pub fn SkeletonPage(#[props(default = 3)] rows: usize) -> Element {
    rsx! {
        div { class: "skeleton-page", "aria-busy": "true", "aria-label": "Loading",
            Skeleton { class: "skeleton-title" }
            for i in 0..rows {
                Skeleton { key: "{i}", class: "skeleton-block" }
            }
        }
    }
}
