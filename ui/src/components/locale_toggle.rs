use crate::core::locale::{detect_locale, toggle_locale};
use crate::t;
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

const CHEVRONS: &str = "M10 3a1 1 0 01.707.293l3 3a1 1 0 01-1.414 1.414L10 5.414 7.707 7.707a1 1 0 01-1.414-1.414l3-3A1 1 0 0110 3zm-3.707 9.293a1 1 0 011.414 0L10 14.586l2.293-2.293a1 1 0 011.414 1.414l-3 3a1 1 0 01-1.414 0l-3-3a1 1 0 010-1.414z";

/// Button switching between the two locales.
///
/// Labeled with the active locale; a click hands the sibling path to
/// `on_navigate` without waiting for the navigation to land.
#[component]
pub fn LocaleToggle(path: String, on_navigate: EventHandler<String>) -> Element {
    let locale = detect_locale(&path);
    let current = locale.label();
    let label = t!(locale, "locale-toggle-label");
    let title = t!(locale, "locale-toggle-title", language = locale.label());

    let toggle = move |_: MouseEvent| {
        let (next, target) = toggle_locale(&path, locale);
        debug!(from = %locale, to = %next, %target, "switching locale");
        on_navigate.call(target);
    };

    rsx! {
        button {
            class: "locale-toggle",
            r#type: "button",
            title: "{title}",
            aria_label: "{label}",
            onclick: toggle,
            span { lang: "{locale}", "{current}" }
            svg {
                class: "locale-toggle__icon",
                "xmlns": "http://www.w3.org/2000/svg",
                "viewBox": "0 0 20 20",
                "fill": "currentColor",
                "aria-hidden": "true",
                path {
                    "fill-rule": "evenodd",
                    "clip-rule": "evenodd",
                    d: CHEVRONS,
                }
            }
        }
    }
}
