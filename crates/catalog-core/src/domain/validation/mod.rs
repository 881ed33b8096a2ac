//! Validation protocol: error values, handlers and entity validators
//!
//! Domain rules report violations through a [`ValidationHandler`]. Two
//! strategies implement it: [`Notification`] gathers every error so a batch
//! of independent checks can all run, while [`FailFast`] aborts on the
//! first violation through the raised [`DomainError`] channel.

mod fail_fast;
mod notification;

pub use fail_fast::FailFast;
pub use notification::Notification;

use crate::domain::DomainResult;
use std::fmt;

/// A single rule violation: a human-readable message, compared by content.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Error {
    message: String,
}

impl Error {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// A zero-argument validation procedure run under a handler.
pub type Validation = dyn FnMut() -> DomainResult<()>;

/// Capability set exposed to validators and use cases.
///
/// `append` is fallible by contract: the accumulating strategy always
/// returns `Ok`, the fail-fast strategy signals a `DomainError` instead of
/// retaining anything. Callers propagate with `?` so the fail-fast abort
/// travels the raised channel without extra plumbing.
pub trait ValidationHandler {
    /// Record one error.
    fn append(&mut self, error: Error) -> DomainResult<()>;

    /// Merge another handler's accumulated errors into this one.
    fn append_handler(&mut self, other: &dyn ValidationHandler) -> DomainResult<()>;

    /// Run a validation procedure, converting any failure it signals into
    /// errors on this handler (collect-all) or re-raising it (fail-fast).
    fn validate(&mut self, validation: &mut Validation) -> DomainResult<()>;

    /// Errors recorded so far, in insertion order.
    fn errors(&self) -> &[Error];

    fn has_error(&self) -> bool {
        !self.errors().is_empty()
    }

    fn first_error(&self) -> Option<&Error> {
        self.errors().first()
    }
}

/// A policy object bound to one entity snapshot and one handler.
///
/// Implementations run a fixed, ordered sequence of rule checks and report
/// through the handler they were constructed with.
pub trait Validator {
    fn validate(&mut self) -> DomainResult<()>;
}
