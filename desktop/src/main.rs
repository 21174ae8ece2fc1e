#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::routing::push_path;
use ui::i18n::preferred_locale;
use ui::views::{About, Home, NotFound};
use ui::Locale;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[redirect("/", || Route::Home { locale: preferred_locale() })]
    #[redirect("/about", || Route::About { locale: preferred_locale() })]
    #[layout(DesktopShell)]
        #[route("/:locale")]
        Home { locale: Locale },
        #[route("/:locale/about")]
        About { locale: Locale },
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme; no separate desktop stylesheet.

#[cfg(feature = "desktop")]
fn main() {
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Angkor – v{}", env!("CARGO_PKG_VERSION"))),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn nav_home(locale: Locale, class: &str, label: &str) -> Element {
    rsx!(Link { class: "{class}", to: Route::Home { locale }, "{label}" })
}
fn nav_about(locale: Locale, class: &str, label: &str) -> Element {
    rsx!(Link { class: "{class}", to: Route::About { locale }, "{label}" })
}

#[component]
fn App() -> Element {
    // Load both locale bundles once
    ui::i18n::init();

    register_nav(NavBuilder {
        home: nav_home,
        about: nav_about,
    });

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> { }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load directly from the crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// Desktop layout around the shared navbar. The in-memory history starts at
/// `/`, which redirects to the OS-preferred locale.
#[component]
fn DesktopShell() -> Element {
    let route = use_route::<Route>();
    let navigator = use_navigator();

    rsx! {
        AppNavbar {
            path: route.to_string(),
            on_navigate: move |target: String| push_path::<Route>(navigator, &target),
        }

        Outlet::<Route> {}
    }
}
