//! Supported locales and the path-based locale switcher.
//!
//! The URL path is the only source of truth for the active locale: its first
//! segment (`/km/...`) selects Khmer, anything else falls back to English.
//! Nothing here caches the locale; views re-derive it from the current path
//! on every render.

use std::fmt;
use std::str::FromStr;

use unic_langid::{langid, LanguageIdentifier};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    En,
    Km,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Km];

    /// Path segment / short code.
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Km => "km",
        }
    }

    /// Label shown on the toggle button while this locale is active.
    pub fn label(self) -> &'static str {
        match self {
            Locale::En => "EN",
            Locale::Km => "ខ្មែរ",
        }
    }

    /// The other member of the two-locale set.
    pub fn other(self) -> Self {
        match self {
            Locale::En => Locale::Km,
            Locale::Km => Locale::En,
        }
    }

    /// Fluent bundle folder backing this locale.
    pub fn language_identifier(self) -> LanguageIdentifier {
        match self {
            Locale::En => langid!("en-US"),
            Locale::Km => langid!("km-KH"),
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|locale| locale.code() == code)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale `{0}` (expected `en` or `km`)")]
pub struct UnsupportedLocale(pub String);

impl FromStr for Locale {
    type Err = UnsupportedLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| UnsupportedLocale(s.to_string()))
    }
}

/// First segment of an absolute path, `None` when `path` has no leading `/`.
fn first_segment(path: &str) -> Option<&str> {
    path.strip_prefix('/')
        .map(|rest| rest.split('/').next().unwrap_or_default())
}

/// Locale selected by `path`. Never fails: unknown or malformed paths map to
/// the default locale.
pub fn detect_locale(path: &str) -> Locale {
    first_segment(path)
        .and_then(Locale::from_code)
        .unwrap_or_default()
}

/// Rewrite `path` so its first segment is `locale`.
///
/// A non-empty first segment is replaced and the remainder passed through
/// as-is. When there is no first segment to replace (`""`, `/`, `//x`, or a
/// relative `about`), the locale is prepended instead, so the result always
/// starts with `/{locale}`.
pub fn localized_path(path: &str, locale: Locale) -> String {
    match path.strip_prefix('/') {
        Some(rest) if !rest.is_empty() && !rest.starts_with('/') => {
            let tail = rest.find('/').map_or("", |idx| &rest[idx..]);
            format!("/{locale}{tail}")
        }
        _ => match path.trim_start_matches('/') {
            "" => format!("/{locale}"),
            rest => format!("/{locale}/{rest}"),
        },
    }
}

/// Switch to the other locale. Returns the new locale and the path to
/// navigate to; `current` is trusted as-is.
pub fn toggle_locale(path: &str, current: Locale) -> (Locale, String) {
    let next = current.other();
    (next, localized_path(path, next))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_khmer_only_on_exact_first_segment() {
        for path in ["/km", "/km/", "/km/about", "/km/about/team"] {
            assert_eq!(detect_locale(path), Locale::Km, "{path}");
        }
    }

    #[test]
    fn everything_else_defaults_to_english() {
        for path in ["", "/", "/about", "/en", "/en/about", "/enabled", "/kmx", "km/about", "//km"] {
            assert_eq!(detect_locale(path), Locale::En, "{path}");
        }
    }

    #[test]
    fn toggle_replaces_first_segment() {
        assert_eq!(
            toggle_locale("/en/about", Locale::En),
            (Locale::Km, "/km/about".to_string())
        );
        assert_eq!(toggle_locale("/km", Locale::Km), (Locale::En, "/en".to_string()));
        // An unprefixed page loses its first segment, matching the replacement rule.
        assert_eq!(toggle_locale("/about", Locale::En), (Locale::Km, "/km".to_string()));
    }

    #[test]
    fn toggle_prepends_when_there_is_no_segment() {
        assert_eq!(toggle_locale("/", Locale::En), (Locale::Km, "/km".to_string()));
        assert_eq!(toggle_locale("", Locale::Km), (Locale::En, "/en".to_string()));
        assert_eq!(localized_path("about", Locale::Km), "/km/about");
        assert_eq!(localized_path("//about", Locale::En), "/en/about");
    }

    #[test]
    fn rest_of_path_is_passed_through() {
        assert_eq!(localized_path("/en/a.b/(c)/*", Locale::Km), "/km/a.b/(c)/*");
        assert_eq!(localized_path("/en/about/", Locale::Km), "/km/about/");
    }

    #[test]
    fn toggling_twice_restores_locale_and_path() {
        let start = "/km/about";
        let current = detect_locale(start);
        let (once, path) = toggle_locale(start, current);
        assert_eq!(detect_locale(&path), once);
        let (twice, back) = toggle_locale(&path, once);
        assert_eq!(twice, current);
        assert_eq!(back, start);
    }

    #[test]
    fn target_always_starts_with_the_other_locale() {
        for path in ["", "/", "/x", "/en", "/km/about", "relative/path", "///"] {
            for current in Locale::ALL {
                let (next, target) = toggle_locale(path, current);
                assert_ne!(next, current);
                assert!(Locale::ALL.contains(&next));
                assert_eq!(first_segment(&target), Some(next.code()), "{path}");
            }
        }
    }

    #[test]
    fn parses_only_known_codes() {
        assert_eq!("km".parse::<Locale>(), Ok(Locale::Km));
        assert_eq!("en".parse::<Locale>(), Ok(Locale::En));
        let err = "KM".parse::<Locale>().unwrap_err();
        assert_eq!(err, UnsupportedLocale("KM".into()));
        assert!(err.to_string().contains("`KM`"));
        assert_eq!(Locale::Km.to_string(), "km");
    }

    #[test]
    fn labels_and_bundles() {
        assert_eq!(Locale::En.label(), "EN");
        assert_eq!(Locale::Km.label(), "ខ្មែរ");
        assert_eq!(Locale::Km.language_identifier().to_string(), "km-KH");
    }
}
