//! Glue between string paths produced by the locale switcher and the typed
//! `Route` enum each platform crate defines.

use std::fmt::Display;
use std::str::FromStr;

use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;

/// Resolve `path` against the platform route table.
pub fn resolve<R>(path: &str) -> Option<R>
where
    R: Routable,
    <R as FromStr>::Err: Display,
{
    match path.parse::<R>() {
        Ok(route) => Some(route),
        Err(err) => {
            warn!(%path, %err, "navigation target does not match any route");
            None
        }
    }
}

/// Push `path` onto the router history. Fire-and-forget: the router re-renders
/// the shell with the new route, which is where the locale gets re-derived.
pub fn push_path<R>(navigator: Navigator, path: &str)
where
    R: Routable,
    <R as FromStr>::Err: Display,
{
    if let Some(route) = resolve::<R>(path) {
        debug!(%path, "navigating");
        navigator.push(route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::locale::Locale;

    #[derive(Debug, Clone, Routable, PartialEq)]
    #[rustfmt::skip]
    enum TestRoute {
        #[route("/:locale")]
        Page { locale: Locale },
        #[route("/:locale/about")]
        Info { locale: Locale },
    }

    #[component]
    fn Page(locale: Locale) -> Element {
        rsx! { "{locale}" }
    }

    #[component]
    fn Info(locale: Locale) -> Element {
        rsx! { "{locale}" }
    }

    #[test]
    fn resolves_localized_paths() {
        assert_eq!(
            resolve::<TestRoute>("/km/about"),
            Some(TestRoute::Info { locale: Locale::Km })
        );
        assert_eq!(
            resolve::<TestRoute>("/en"),
            Some(TestRoute::Page { locale: Locale::En })
        );
    }

    #[test]
    fn unknown_locale_segment_does_not_resolve() {
        assert_eq!(resolve::<TestRoute>("/fr/about"), None);
    }

    #[test]
    fn routes_render_back_to_their_path() {
        assert_eq!(TestRoute::Info { locale: Locale::Km }.to_string(), "/km/about");
    }
}
