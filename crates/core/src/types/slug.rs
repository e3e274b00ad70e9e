//! URL slug type for content entities.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Slug`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum SlugError {
    /// The input string is empty.
    #[error("slug cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("slug must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains a character outside `[a-z0-9-]`.
    #[error("slug may only contain lowercase letters, digits, and hyphens")]
    InvalidCharacter,
    /// The input starts or ends with a hyphen.
    #[error("slug cannot start or end with a hyphen")]
    EdgeHyphen,
}

/// A URL slug keying a content entity (press release, story, product, page).
///
/// Slugs are the public identifiers used in both site URLs and admin CRUD
/// routes, so they are validated once at the boundary and carried as a typed
/// value everywhere else.
///
/// ## Examples
///
/// ```
/// use sonaverse_core::Slug;
///
/// assert!(Slug::parse("bodeum-diaper-2024").is_ok());
/// assert!(Slug::parse("Has Spaces").is_err());
/// assert!(Slug::parse("-leading").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Maximum length of a slug.
    pub const MAX_LENGTH: usize = 128;

    /// Parse a `Slug` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, too long, contains a character
    /// outside `[a-z0-9-]`, or starts/ends with a hyphen.
    pub fn parse(s: &str) -> Result<Self, SlugError> {
        if s.is_empty() {
            return Err(SlugError::Empty);
        }

        if s.len() > Self::MAX_LENGTH {
            return Err(SlugError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        if !s
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(SlugError::InvalidCharacter);
        }

        if s.starts_with('-') || s.ends_with('-') {
            return Err(SlugError::EdgeHyphen);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the slug as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Slug` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Slug {
    type Err = SlugError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// SQLx support (with postgres feature)
#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for Slug {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for Slug {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <String as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        // Database values are assumed valid
        Ok(Self(s))
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for Slug {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <String as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_slugs() {
        assert!(Slug::parse("bodeum").is_ok());
        assert!(Slug::parse("bodeum-diaper-2024").is_ok());
        assert!(Slug::parse("a").is_ok());
        assert!(Slug::parse("123").is_ok());
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(Slug::parse(""), Err(SlugError::Empty)));
    }

    #[test]
    fn test_parse_too_long() {
        let long = "a".repeat(129);
        assert!(matches!(Slug::parse(&long), Err(SlugError::TooLong { .. })));
    }

    #[test]
    fn test_parse_invalid_characters() {
        assert!(matches!(
            Slug::parse("Has Spaces"),
            Err(SlugError::InvalidCharacter)
        ));
        assert!(matches!(
            Slug::parse("UpperCase"),
            Err(SlugError::InvalidCharacter)
        ));
        assert!(matches!(
            Slug::parse("under_score"),
            Err(SlugError::InvalidCharacter)
        ));
        assert!(matches!(
            Slug::parse("한국어"),
            Err(SlugError::InvalidCharacter)
        ));
    }

    #[test]
    fn test_parse_edge_hyphen() {
        assert!(matches!(Slug::parse("-leading"), Err(SlugError::EdgeHyphen)));
        assert!(matches!(
            Slug::parse("trailing-"),
            Err(SlugError::EdgeHyphen)
        ));
    }

    #[test]
    fn test_display() {
        let slug = Slug::parse("bodeum-diaper").unwrap();
        assert_eq!(slug.to_string(), "bodeum-diaper");
    }
}
