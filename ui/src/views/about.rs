use dioxus::prelude::*;

use crate::components::app_navbar::{page_link, Page};
use crate::core::locale::Locale;
use crate::t;

#[component]
pub fn About(locale: Locale) -> Element {
    let title = t!(locale, "about-title");
    let back = page_link(Page::Home, locale, "button button--primary", &t!(locale, "about-back"));

    rsx! {
        document::Title { "{title}" }
        main { class: "page page-about", lang: "{locale}",
            h1 { "{title}" }
            p { {t!(locale, "about-body")} }
            {back}
        }
    }
}
