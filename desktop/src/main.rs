#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use api::ApiClient;
#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::theme::Theme;
use ui::views::{History, Home};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    Home {},
    #[route("/history")]
    History {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

/// Where the packaged desktop build expects the analysis service. The spec
/// keeps the client free of env/config state, so this stays a constant.
const ANALYSIS_SERVICE_ORIGIN: &str = "http://127.0.0.1:5000";

#[cfg(feature = "desktop")]
fn main() {
    dioxus::logger::initialize_default();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Vitalens – v{}", env!("CARGO_PKG_VERSION")))
                    .with_maximized(true),
            ),
        )
        .launch(App);
}

#[cfg(not(feature = "desktop"))]
fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

fn nav_home(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Home {}, "{label}" })
}
fn nav_history(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::History {}, "{label}" })
}

#[component]
fn App() -> Element {
    use_context_provider(|| ApiClient::new(ANALYSIS_SERVICE_ORIGIN));

    let theme = use_signal(Theme::default);
    use_context_provider(|| theme);

    register_nav(NavBuilder {
        home: nav_home,
        history: nav_history,
    });

    // Runtime maximize fallback (in case initial builder maximize is ignored by WM)
    #[cfg(feature = "desktop")]
    {
        let win = dioxus::desktop::use_window();
        use_effect(move || {
            win.set_maximized(true);
        });
    }

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        div { class: "{theme().root_class()}",
            Router::<Route> {}
        }
    }
}

/// A desktop-specific Router around the shared `AppNavbar` component
/// which allows us to use the desktop-specific `Route` enum.
#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        AppNavbar { }

        Outlet::<Route> {}
    }
}
