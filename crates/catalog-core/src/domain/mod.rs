//! Domain layer - Pure business logic
//!
//! Contains the category aggregate, value objects, validation handlers
//! and persistence ports. No dependencies on infrastructure concerns.

pub mod aggregates;
pub mod entity;
pub mod ports;
pub mod validation;
pub mod value_objects;

// Re-export core domain types
pub use aggregates::Category;
pub use entity::{AggregateRoot, Entity};
pub use ports::{CategoryGateway, Pagination, SearchQuery, SortDirection};
pub use validation::{Error, FailFast, Notification, ValidationHandler, Validator};
pub use value_objects::CategoryId;

use std::fmt;

/// Domain Result type
pub type DomainResult<T> = Result<T, DomainError>;

/// Raised domain failure carrying one or more rule violations.
///
/// This is the "aborts immediately" channel: fail-fast validation,
/// not-found signalling and gateway failures on read/delete paths all
/// surface through it. Accumulated validation problems never use it;
/// they travel back as a [`Notification`] value instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("{}", .0.iter().map(Error::message).collect::<Vec<_>>().join(", "))]
    Validation(Vec<Error>),

    #[error("{0}")]
    NotFound(Error),

    #[error("{0}")]
    Gateway(String),
}

impl DomainError {
    pub fn with_error(error: Error) -> Self {
        Self::Validation(vec![error])
    }

    pub fn with_errors(errors: Vec<Error>) -> Self {
        Self::Validation(errors)
    }

    /// Not-found failure with the fixed message template used by the
    /// Get and Update use cases.
    pub fn not_found(id: impl fmt::Display) -> Self {
        Self::NotFound(Error::new(format!("Category with ID {id} was not found")))
    }

    pub fn gateway(message: impl Into<String>) -> Self {
        Self::Gateway(message.into())
    }

    /// The rule violations carried by this failure.
    pub fn errors(&self) -> Vec<Error> {
        match self {
            Self::Validation(errors) => errors.clone(),
            Self::NotFound(error) => vec![error.clone()],
            Self::Gateway(message) => vec![Error::new(message.clone())],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_template() {
        let failure = DomainError::not_found("123");
        assert_eq!(failure.to_string(), "Category with ID 123 was not found");
        assert_eq!(failure.errors().len(), 1);
    }

    #[test]
    fn test_validation_failure_carries_all_errors() {
        let failure = DomainError::with_errors(vec![Error::new("first"), Error::new("second")]);
        assert_eq!(failure.errors().len(), 2);
        assert_eq!(failure.to_string(), "first, second");
    }

    #[test]
    fn test_gateway_failure_message_is_verbatim() {
        let failure = DomainError::gateway("Gateway error");
        assert_eq!(failure.to_string(), "Gateway error");
    }
}
