//! Locale selection and bilingual content containers.
//!
//! Every content entity carries its body in both Korean and English. The
//! original system stored these as loose `{ko, en}` maps with mixed-type
//! values; here the shape is explicit: [`Bilingual<T>`] holds one `T` per
//! locale, and the per-entity field structs live with the entity models.

use serde::{Deserialize, Serialize};

/// A supported site locale.
///
/// Korean is the primary locale and the fallback for any request that does
/// not ask for English explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Korean (primary).
    #[default]
    Ko,
    /// English.
    En,
}

impl Locale {
    /// Parse a locale from a query-parameter value, falling back to Korean.
    #[must_use]
    pub fn from_param(s: Option<&str>) -> Self {
        match s {
            Some("en") => Self::En,
            _ => Self::Ko,
        }
    }

    /// The locale's lowercase code (`ko` / `en`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Ko => "ko",
            Self::En => "en",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// A value carried in both locales.
///
/// Both sides are required: publishing half-translated content was a
/// recurring data-quality problem in the original document store, so the
/// type makes completeness structural.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bilingual<T> {
    /// Korean content.
    pub ko: T,
    /// English content.
    pub en: T,
}

impl<T> Bilingual<T> {
    /// Create a bilingual value from both sides.
    pub const fn new(ko: T, en: T) -> Self {
        Self { ko, en }
    }

    /// Select the side for a locale.
    pub const fn get(&self, locale: Locale) -> &T {
        match locale {
            Locale::Ko => &self.ko,
            Locale::En => &self.en,
        }
    }

    /// Map both sides through `f`.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Bilingual<U> {
        Bilingual {
            ko: f(self.ko),
            en: f(self.en),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_from_param() {
        assert_eq!(Locale::from_param(Some("en")), Locale::En);
        assert_eq!(Locale::from_param(Some("ko")), Locale::Ko);
        assert_eq!(Locale::from_param(Some("fr")), Locale::Ko);
        assert_eq!(Locale::from_param(None), Locale::Ko);
    }

    #[test]
    fn test_bilingual_get() {
        let b = Bilingual::new("안녕하세요", "hello");
        assert_eq!(*b.get(Locale::Ko), "안녕하세요");
        assert_eq!(*b.get(Locale::En), "hello");
    }

    #[test]
    fn test_bilingual_map() {
        let b = Bilingual::new(1, 2).map(|n| n * 10);
        assert_eq!(b.ko, 10);
        assert_eq!(b.en, 20);
    }

    #[test]
    fn test_bilingual_serde_shape() {
        let b = Bilingual::new("가", "a");
        let json = serde_json::to_value(&b).unwrap();
        assert_eq!(json, serde_json::json!({"ko": "가", "en": "a"}));
    }

    #[test]
    fn test_bilingual_rejects_missing_side() {
        let result: Result<Bilingual<String>, _> = serde_json::from_str(r#"{"ko": "가"}"#);
        assert!(result.is_err());
    }
}
