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
    #[layout(WebShell)]
        #[route("/:locale")]
        Home { locale: Locale },
        #[route("/:locale/about")]
        About { locale: Locale },
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

fn nav_home(locale: Locale, class: &str, label: &str) -> Element {
    rsx!(Link {
        class: "{class}",
        to: Route::Home { locale },
        "{label}"
    })
}
fn nav_about(locale: Locale, class: &str, label: &str) -> Element {
    rsx!(Link {
        class: "{class}",
        to: Route::About { locale },
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        ui::i18n::init();
        // Localized links resolve to this crate's typed routes
        register_nav(NavBuilder {
            home: nav_home,
            about: nav_about,
        });
    }

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        Router::<Route> {}
    }
}

/// Web layout: the shared navbar reads the current path from the router and
/// navigates through it when the locale is toggled.
#[component]
fn WebShell() -> Element {
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
