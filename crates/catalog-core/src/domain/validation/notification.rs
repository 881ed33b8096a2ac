//! Collect-all validation handler

use crate::domain::{DomainError, DomainResult};

use super::{Error, Validation, ValidationHandler};

/// Accumulating handler: gathers every error, never raises.
///
/// Owns a growable ordered list of [`Error`] values; insertion order is
/// preserved and duplicates are retained. Write use cases hand a fresh
/// `Notification` to entity validation and return it to the caller as the
/// failure payload when it is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notification {
    errors: Vec<Error>,
}

impl Notification {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_error(error: Error) -> Self {
        Self {
            errors: vec![error],
        }
    }

    /// Normalize a raised failure into the accumulated shape, preserving
    /// every error it carries.
    pub fn from_failure(failure: &DomainError) -> Self {
        Self {
            errors: failure.errors(),
        }
    }
}

impl ValidationHandler for Notification {
    fn append(&mut self, error: Error) -> DomainResult<()> {
        self.errors.push(error);
        Ok(())
    }

    fn append_handler(&mut self, other: &dyn ValidationHandler) -> DomainResult<()> {
        self.errors.extend_from_slice(other.errors());
        Ok(())
    }

    fn validate(&mut self, validation: &mut Validation) -> DomainResult<()> {
        if let Err(failure) = validation() {
            match failure {
                DomainError::Validation(errors) => self.errors.extend(errors),
                other => self.errors.push(Error::new(other.to_string())),
            }
        }
        Ok(())
    }

    fn errors(&self) -> &[Error] {
        &self.errors
    }
}
