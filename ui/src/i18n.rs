//! Internationalization (i18n) support for `angkor-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (bundle selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/angkor-ui.ftl   (fallback/reference)
//!   km-KH/angkor-ui.ftl
//! ```
//!
//! The active locale comes from the URL, not from global state, so there is
//! one loader per [`Locale`] and every lookup names the locale it renders:
//! ```ignore
//! use crate::t;
//! let title = t!(locale, "home-title");
//! let hint = t!(locale, "locale-toggle-title", language = locale.label());
//! ```
//!
//! Platform notes:
//! - Desktop: `DesktopLanguageRequester` (OS locale list) feeds [`preferred_locale`].
//! - Web/WASM: `WebLanguageRequester` (`navigator.languages`).
//! - Assets are always embedded on WASM (`debug-embed` in the target-specific dependency section).
use dioxus::logger::tracing::warn;
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

use crate::core::locale::Locale;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Translation macro taking the locale to render in.
/// Examples:
///     t!(locale, "home-title")
///     t!(locale, "not-found-body", path = "/km/x")
#[macro_export]
macro_rules! t {
    ($locale:expr, $key:literal) => {
        $crate::i18n::fl!($crate::i18n::loader($locale), $key)
    };
    ($locale:expr, $key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!($crate::i18n::loader($locale), $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
const DOMAIN: &str = "angkor-ui";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

static EN: Lazy<FluentLanguageLoader> = Lazy::new(|| localized(Locale::En));
static KM: Lazy<FluentLanguageLoader> = Lazy::new(|| localized(Locale::Km));

fn localized(locale: Locale) -> FluentLanguageLoader {
    let loader = FluentLanguageLoader::new(DOMAIN, Locale::default().language_identifier());
    if let Err(err) = i18n_embed::select(&loader, &Localizations, &[locale.language_identifier()]) {
        warn!(%locale, %err, "failed loading locale bundle; continuing with fallback");
    }
    loader
}

/// Loader rendering messages in `locale` (falls back to `en-US` per message).
pub fn loader(locale: Locale) -> &'static FluentLanguageLoader {
    match locale {
        Locale::En => &*EN,
        Locale::Km => &*KM,
    }
}

/// Load every locale bundle up front (idempotent).
pub fn init() {
    Lazy::force(&EN);
    Lazy::force(&KM);
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// First supported locale among the languages the platform asks for.
/// Only used for entry paths that carry no locale segment.
pub fn preferred_locale() -> Locale {
    pick_locale(&requested_languages())
}

fn pick_locale(requested: &[LanguageIdentifier]) -> Locale {
    requested
        .iter()
        .find_map(|id| Locale::from_code(id.language.as_str()))
        .unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
