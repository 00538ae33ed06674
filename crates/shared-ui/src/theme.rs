use dioxus::prelude::*;

/// Storage key holding `"true"` or `"false"`.
pub const DARK_MODE_KEY: &str = "darkMode";

/// Read a stored dark-mode flag. Anything but `"true"` means light mode.
pub fn parse_dark_mode(stored: Option<&str>) -> bool {
    matches!(stored.map(str::trim), Some("true"))
}

/// Shared dark-mode state provided as context.
///
/// The header toggle writes it; [`ThemeSeed`] fills it from storage on load.
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub is_dark: Signal<bool>,
}

impl ThemeState {
    /// Flip the mode, persist it and update the document.
    pub fn toggle(&mut self) {
        let next = !(self.is_dark)();
        self.is_dark.set(next);
        set_dark_mode(next);
    }
}

/// Seed the theme on application startup.
///
/// Reads the persisted flag from localStorage, applies the `dark` class to
/// `<html>` and mirrors the value into [`ThemeState`]. Call this once in the
/// top-level App component, after the state has been provided.
#[component]
pub fn ThemeSeed() -> Element {
    let mut theme = use_context::<ThemeState>();

    use_effect(move || {
        spawn(async move {
            let stored = document::eval(&format!(
                r#"
                var value = null;
                try {{ value = window.localStorage.getItem('{DARK_MODE_KEY}'); }} catch (e) {{}}
                document.documentElement.classList.toggle('dark', value === 'true');
                return value;
                "#,
            ))
            .join::<Option<String>>()
            .await
            .ok()
            .flatten();
            theme.is_dark.set(parse_dark_mode(stored.as_deref()));
        });
    });

    rsx! {}
}

/// Persist the dark-mode flag and toggle the `dark` class on the document.
pub fn set_dark_mode(dark: bool) {
    document::eval(&format!(
        r#"
        try {{ window.localStorage.setItem('{DARK_MODE_KEY}', '{dark}'); }} catch (e) {{}}
        document.documentElement.classList.toggle('dark', {dark});
        "#,
    ));
}
