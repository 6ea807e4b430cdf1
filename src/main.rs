use dioxus::prelude::*;

use o365_admin::components::ToastZone;
use o365_admin::config::ShellConfig;
use o365_admin::hooks::{use_auth_session, use_theme_session, use_toast_queue};
use o365_admin::routes::Route;
use o365_admin::stores::ThemeStore;
use o365_admin::theme::{is_dark, system_prefers_dark};

const MAIN_CSS: Asset = asset!("/assets/main.css");

static SHELL_CONFIG: &str = include_str!("../shell.json");

// Class-based dark mode so the root `dark` class drives `dark:` utilities
static TAILWIND_CONFIG: &str =
    "tailwind.config = { darkMode: 'class', theme: { extend: { colors: { primary: '#2563eb' } } } };";

fn main() {
    if let Err(e) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("Failed to initialize logger: {}", e);
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context_provider(|| ShellConfig::load_or_default(SHELL_CONFIG));
    let auth = use_auth_session();
    use_context_provider(|| auth);
    let themes = use_theme_session(config.default_theme);
    use_context_provider(|| themes);
    let toasts = use_toast_queue(config.toast_duration_ms);
    use_context_provider(|| toasts);

    let dark = is_dark(&themes.theme(), system_prefers_dark());

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Script { src: "https://cdn.tailwindcss.com" }
        script { {TAILWIND_CONFIG} }

        div {
            class: if dark { "dark" } else { "" },
            Router::<Route> {}
            ToastZone {}
        }
    }
}
