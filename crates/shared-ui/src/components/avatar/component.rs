use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AvatarSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl AvatarSize {
    fn class(&self) -> &'static str {
        match self {
            AvatarSize::Sm => "sm",
            AvatarSize::Md => "md",
            AvatarSize::Lg => "lg",
            AvatarSize::Xl => "xl",
        }
    }
}

/// First letter of the first and last words, uppercased. "U" when empty.
pub fn initials(name: &str) -> String {
    let mut words = name.split_whitespace();
    let Some(first) = words.next() else {
        return "U".to_string();
    };
    let mut out: String = first.chars().take(1).collect();
    if let Some(last) = words.last() {
        out.extend(last.chars().take(1));
    }
    out.to_uppercase()
}

/// Round avatar showing the initials of `name`.
#[component]
pub fn Avatar(
    name: String,
    #[props(default)] size: AvatarSize,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![
        Attribute::new("class", "avatar", None, false),
        Attribute::new("data-size", size.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let text = initials(&name);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            title: "{name}",
            ..merged,
            span { class: "avatar-fallback", "{text}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_and_last_word() {
        assert_eq!(initials("Rahul Sharma"), "RS");
        assert_eq!(initials("Dr. Srinivas Rao"), "DR");
    }

    #[test]
    fn single_word() {
        assert_eq!(initials("student"), "S");
    }

    #[test]
    fn blank_falls_back() {
        assert_eq!(initials(""), "U");
        assert_eq!(initials("   "), "U");
    }
}
