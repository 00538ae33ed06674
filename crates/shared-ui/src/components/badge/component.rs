use dioxus::prelude::*;

/// Colour of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeTone {
    #[default]
    Info,
    Success,
    Warning,
    Danger,
    Neutral,
}

impl BadgeTone {
    fn class(&self) -> &'static str {
        match self {
            BadgeTone::Info => "info",
            BadgeTone::Success => "success",
            BadgeTone::Warning => "warning",
            BadgeTone::Danger => "danger",
            BadgeTone::Neutral => "neutral",
        }
    }
}

/// Pill-shaped inline label for statuses.
#[component]
pub fn Badge(
    #[props(default)] tone: BadgeTone,
    #[props(default = false)] solid: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-tone", tone.class(), None, false),
        Attribute::new("data-solid", solid.to_string(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            {children}
        }
    }
}
