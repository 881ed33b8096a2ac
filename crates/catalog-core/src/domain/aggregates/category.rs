//! Category aggregate root and its validator

use crate::domain::{
    DomainResult,
    entity::{AggregateRoot, Entity},
    validation::{Error, ValidationHandler, Validator},
    value_objects::CategoryId,
};
use chrono::{DateTime, Utc};

const NAME_MIN_LENGTH: usize = 3;
const NAME_MAX_LENGTH: usize = 255;

/// Category aggregate root.
///
/// Soft deletion is encoded in `deleted_at`: the invariant
/// `deleted_at == None ⟺ is_active` holds after every transition.
/// Mutators never validate; the caller runs `validate` explicitly after
/// mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    id: CategoryId,
    name: String,
    description: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl Category {
    /// Create a new category with a freshly minted identifier.
    pub fn new_category(
        name: impl Into<String>,
        description: Option<String>,
        is_active: bool,
    ) -> Self {
        let now = Utc::now();
        let deleted_at = if is_active { None } else { Some(now) };

        Self {
            id: CategoryId::unique(),
            name: name.into(),
            description,
            is_active,
            created_at: now,
            updated_at: now,
            deleted_at,
        }
    }

    /// Reconstitute an aggregate from persisted state.
    pub fn with(
        id: CategoryId,
        name: impl Into<String>,
        description: Option<String>,
        is_active: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description,
            is_active,
            created_at,
            updated_at,
            deleted_at,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    /// Make the category active again. Idempotent.
    pub fn activate(&mut self) -> &mut Self {
        self.deleted_at = None;
        self.is_active = true;
        self.updated_at = Utc::now();
        self
    }

    /// Soft-delete the category. An already-set `deleted_at` timestamp is
    /// kept; `updated_at` is refreshed on every call.
    pub fn deactivate(&mut self) -> &mut Self {
        if self.deleted_at.is_none() {
            self.deleted_at = Some(Utc::now());
        }

        self.is_active = false;
        self.updated_at = Utc::now();
        self
    }

    /// One lifecycle transition plus a field overwrite. The transition runs
    /// first so the `deleted_at`/`is_active` invariant is established before
    /// the overwrite; `updated_at` ends strictly later than before the call.
    pub fn update(
        &mut self,
        name: impl Into<String>,
        description: Option<String>,
        is_active: bool,
    ) -> &mut Self {
        if is_active {
            self.activate();
        } else {
            self.deactivate();
        }

        self.name = name.into();
        self.description = description;
        self.updated_at = Utc::now();
        self
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &CategoryId {
        &self.id
    }

    fn validate(&self, handler: &mut dyn ValidationHandler) -> DomainResult<()> {
        CategoryValidator::new(self, handler).validate()
    }
}

impl AggregateRoot for Category {}

/// Validator bound to one category snapshot and one handler.
pub struct CategoryValidator<'a> {
    category: &'a Category,
    handler: &'a mut dyn ValidationHandler,
}

impl<'a> CategoryValidator<'a> {
    pub fn new(category: &'a Category, handler: &'a mut dyn ValidationHandler) -> Self {
        Self { category, handler }
    }

    fn check_name_constraints(&mut self) -> DomainResult<()> {
        let name = self.category.name().trim();

        if name.is_empty() {
            return self.handler.append(Error::new("'name' should not be empty"));
        }

        let length = name.chars().count();
        if !(NAME_MIN_LENGTH..=NAME_MAX_LENGTH).contains(&length) {
            return self
                .handler
                .append(Error::new("'name' must be between 3 and 255 characters"));
        }

        Ok(())
    }
}

impl Validator for CategoryValidator<'_> {
    fn validate(&mut self) -> DomainResult<()> {
        self.check_name_constraints()
    }
}
