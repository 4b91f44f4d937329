//! Light/dark theme state, provided as a root context signal by each
//! platform entrypoint. The navbar toggle flips it; the root wrapper picks
//! up the matching class from the shared stylesheet.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Class applied to the app root; selectors live in assets/theme/main.css.
    pub fn root_class(self) -> &'static str {
        match self {
            Self::Light => "app",
            Self::Dark => "app app--dark",
        }
    }

    /// Label for the toggle button, naming the mode it switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "🌙 Dark mode",
            Self::Dark => "☀️ Light mode",
        }
    }
}
