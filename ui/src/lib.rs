//! Shared UI crate for Vitalens. Cross-platform views and logic live here.

pub mod analysis;
pub mod core;
pub mod history;
pub mod views;

pub mod components {
    // Application navbar with theme toggle (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}
