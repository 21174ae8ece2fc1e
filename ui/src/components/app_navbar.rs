use crate::components::LocaleToggle;
use crate::core::locale::{detect_locale, Locale};
use crate::t;
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

// Navbar stylesheet (inlined as well in release native builds)
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Pages reachable from shared UI links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
}

impl Page {
    /// Plain href used when no platform builder is registered.
    pub fn href(self, locale: Locale) -> String {
        match self {
            Page::Home => format!("/{locale}"),
            Page::About => format!("/{locale}/about"),
        }
    }
}

/// Platforms register a `NavBuilder` providing fully constructed `Link`
/// elements so `ui` does not need to know each platform's `Route` enum.
///
/// Each closure receives the locale the link should stay in, the CSS class and
/// the localized label, and returns a `Link` containing that label:
/// ```ignore
/// register_nav(NavBuilder {
///     home: |locale, class, label| rsx!( Link { class: "{class}", to: Route::Home { locale }, "{label}" } ),
///     about: |locale, class, label| rsx!( Link { class: "{class}", to: Route::About { locale }, "{label}" } ),
/// });
/// ```
///
/// Without a builder, plain anchors pointing at [`Page::href`] are rendered.
pub struct NavBuilder {
    pub home: fn(locale: Locale, class: &str, label: &str) -> Element,
    pub about: fn(locale: Locale, class: &str, label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

/// Localized link to `page`, kept in `locale`.
pub fn page_link(page: Page, locale: Locale, class: &str, label: &str) -> Element {
    match NAV_BUILDER.get() {
        Some(builder) => {
            let build = match page {
                Page::Home => builder.home,
                Page::About => builder.about,
            };
            build(locale, class, label)
        }
        None => {
            let href = page.href(locale);
            rsx! { a { class: "{class}", href: "{href}", "{label}" } }
        }
    }
}

/// Top navigation: brand, localized links and the locale toggle.
///
/// `path` is the router's current path; the locale is derived from it on every
/// render. `on_navigate` receives the target path when the locale is toggled.
#[component]
pub fn AppNavbar(path: String, on_navigate: EventHandler<String>) -> Element {
    let locale = detect_locale(&path);
    debug!(%path, %locale, "AppNavbar render");

    let brand = page_link(Page::Home, locale, "navbar__brand", &t!(locale, "nav-logo"));
    let about = page_link(Page::About, locale, "navbar__link", &t!(locale, "home-about"));

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        nav { id: "navbar", class: "navbar",
            {brand}
            div { class: "navbar__links",
                {about}
                LocaleToggle { path, on_navigate }
            }
        }
    }
}
