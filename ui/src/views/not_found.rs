use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::components::app_navbar::{page_link, Page};
use crate::core::locale::detect_locale;
use crate::t;

/// Catch-all for paths that match no page. The locale still comes from the
/// first segment, so `/km/nowhere` renders in Khmer.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let attempted = format!("/{}", segments.join("/"));
    let locale = detect_locale(&attempted);
    warn!(path = %attempted, "no page for path");

    let title = t!(locale, "not-found-title");
    let home = page_link(Page::Home, locale, "button button--primary", &t!(locale, "not-found-home"));

    rsx! {
        document::Title { "{title}" }
        main { class: "page page-not-found", lang: "{locale}",
            h1 { "{title}" }
            p { {t!(locale, "not-found-body", path = attempted.clone())} }
            {home}
        }
    }
}
