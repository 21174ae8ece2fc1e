//! Shared UI crate for Angkor. Locale handling, translations and views live
//! here; the platform crates only add a `Route` enum and launch the app.

pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized navigation bar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    // EN/KM switch button (components/locale_toggle.rs)
    mod locale_toggle;
    pub use locale_toggle::LocaleToggle;
}

pub use crate::core::locale::Locale;

use dioxus::prelude::*;

/// Shared theme stylesheet, linked by the web shell.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
