//! Fail-immediately validation handler

use crate::domain::{DomainError, DomainResult};

use super::{Error, Validation, ValidationHandler};

/// Stateless handler that aborts on the first violation.
///
/// `append` signals a [`DomainError`] instead of storing anything, so
/// `errors()` always reports empty. Used where the caller wants the very
/// first violation to abort execution through the raised channel rather
/// than via a returned collection.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailFast;

impl FailFast {
    pub fn new() -> Self {
        Self
    }
}

impl ValidationHandler for FailFast {
    fn append(&mut self, error: Error) -> DomainResult<()> {
        Err(DomainError::with_error(error))
    }

    fn append_handler(&mut self, other: &dyn ValidationHandler) -> DomainResult<()> {
        Err(DomainError::with_errors(other.errors().to_vec()))
    }

    fn validate(&mut self, validation: &mut Validation) -> DomainResult<()> {
        validation().map_err(|failure| match failure {
            raised @ DomainError::Validation(_) => raised,
            other => DomainError::with_error(Error::new(other.to_string())),
        })
    }

    fn errors(&self) -> &[Error] {
        &[]
    }
}
