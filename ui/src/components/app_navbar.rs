use dioxus::prelude::*;
use once_cell::sync::OnceCell;

use crate::core::theme::Theme;

// Navbar stylesheet, inlined so every platform gets it without asset wiring.
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Platform crates register a `NavBuilder` providing fully constructed
/// `Link` elements, so `ui` never needs to know each platform's `Route`
/// enum. Without a registered builder the navbar renders only the brand and
/// the theme toggle.
pub struct NavBuilder {
    pub home: fn(label: &str) -> Element,
    pub history: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn AppNavbar() -> Element {
    // Theme signal is provided by the platform root; embedding contexts
    // without one just hide the toggle.
    let theme: Option<Signal<Theme>> = try_use_context::<Signal<Theme>>();
    let current = theme.map(|signal| signal()).unwrap_or_default();

    let links = NAV_BUILDER.get().map(|builder| {
        rsx! {
            {(builder.home)("Analyze")}
            {(builder.history)("History")}
        }
    });

    rsx! {
        document::Style { "{NAVBAR_CSS_INLINE}" }

        header { class: "navbar",
            span { class: "navbar__brand", "Vitalens" }

            nav { class: "navbar__links",
                if let Some(links) = links {
                    {links}
                }
            }

            if let Some(mut signal) = theme {
                button {
                    r#type: "button",
                    class: "navbar__theme-toggle button button--ghost",
                    onclick: move |_| {
                        let next = signal().toggled();
                        signal.set(next);
                    },
                    "{current.toggle_label()}"
                }
            }
        }
    }
}
