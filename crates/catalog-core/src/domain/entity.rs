//! Base shape for domain objects: identity plus a validate capability

use crate::domain::{DomainResult, validation::ValidationHandler};

/// A domain object with identity.
///
/// `validate` reports through the handler it is given; which failure
/// strategy applies is decided by the construction site of the handler,
/// not by the entity.
pub trait Entity {
    type Id: PartialEq;

    fn id(&self) -> &Self::Id;

    fn validate(&self, handler: &mut dyn ValidationHandler) -> DomainResult<()>;
}

/// Marker for entities that are the sole consistency boundary for their
/// own invariants.
pub trait AggregateRoot: Entity {}
