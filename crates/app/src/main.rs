use dioxus::logger::tracing::Level;
use dioxus::prelude::*;
use shared_types::AppConfig;

mod auth;
mod components;
pub mod notify;
mod routes;
mod storage;
use auth::{use_restore_auth, AuthContext};
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CONFIG_TOML: &str = include_str!("../../../config.toml");

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialised: {err}");
    }
    dioxus::launch(App);
}

/// Parse the embedded config, falling back to defaults on a bad file.
fn load_config(source: &str) -> AppConfig {
    AppConfig::from_toml_str(source).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "using default configuration");
        AppConfig::default()
    })
}

#[component]
fn App() -> Element {
    let config = use_hook(|| load_config(CONFIG_TOML));
    use_context_provider(|| config.clone());
    use_context_provider(|| config.features.clone());

    use_context_provider(AuthContext::new);
    use_restore_auth();

    use_context_provider(|| shared_ui::ThemeState {
        is_dark: Signal::new(false),
    });

    let title = config.app.name.clone();

    rsx! {
        document::Title { "{title}" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        shared_ui::ThemeSeed {}
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
