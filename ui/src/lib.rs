//! Shared UI crate for Skillboard: score state, the derived-metrics pipeline,
//! and the Dioxus views that render them on every platform.

pub mod core;
pub mod dashboard;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized header + sidebar shell (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}
