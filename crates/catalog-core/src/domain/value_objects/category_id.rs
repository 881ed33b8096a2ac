//! Category identifier value object
//!
//! Pure domain object; serialization is handled in the application layer
//! via output projections.

use std::fmt;
use uuid::Uuid;

/// Opaque string-backed identifier for categories.
///
/// Minted fresh as a random unique token, or parsed from an externally
/// supplied string. No format validation is enforced at parse time: an
/// arbitrary string is a valid id that simply may not correspond to any
/// stored category.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategoryId(String);

impl CategoryId {
    /// Mint a fresh unique identifier.
    pub fn unique() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Adopt an externally supplied identifier verbatim.
    pub fn from(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Underlying string value.
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl Default for CategoryId {
    fn default() -> Self {
        Self::unique()
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_ids_differ() {
        assert_ne!(CategoryId::unique(), CategoryId::unique());
    }

    #[test]
    fn test_from_accepts_arbitrary_strings() {
        let id = CategoryId::from("not-a-uuid");
        assert_eq!(id.value(), "not-a-uuid");
        assert_eq!(id.to_string(), "not-a-uuid");
    }

    #[test]
    fn test_equality_by_underlying_string() {
        assert_eq!(CategoryId::from("123"), CategoryId::from("123"));
        assert_ne!(CategoryId::from("123"), CategoryId::from("456"));
    }
}
