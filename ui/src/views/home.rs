use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::components::app_navbar::{page_link, Page};
use crate::core::locale::Locale;
use crate::t;

/// Landing page: hero heading, description and a call to action.
#[component]
pub fn Home(locale: Locale) -> Element {
    debug!(%locale, "Home render");

    let title = t!(locale, "home-title");
    let learn_more = page_link(Page::About, locale, "button button--primary", &t!(locale, "home-learn-more"));

    rsx! {
        document::Title { "{title}" }
        main { class: "page page-home", lang: "{locale}",
            h1 { "{title}" }
            p { {t!(locale, "home-description")} }
            {learn_more}
        }
    }
}
