//! Output projections of persisted category state
//!
//! Serializable representations handed back to the transport layer.
//! Keeping serde here preserves the split between domain objects and
//! their wire shape. Write outputs carry the id only; read outputs carry
//! the full field set. Never mutated after construction.

use crate::domain::{Category, Entity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity of a freshly created category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCategoryOutput {
    pub id: String,
}

impl From<&Category> for CreateCategoryOutput {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id().value().to_string(),
        }
    }
}

/// Identity of an updated category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCategoryOutput {
    pub id: String,
}

impl From<&Category> for UpdateCategoryOutput {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id().value().to_string(),
        }
    }
}

/// Full-field projection returned by the Get use case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryOutput {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<&Category> for CategoryOutput {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id().value().to_string(),
            name: category.name().to_string(),
            description: category.description().map(str::to_string),
            is_active: category.is_active(),
            created_at: category.created_at(),
            updated_at: category.updated_at(),
            deleted_at: category.deleted_at(),
        }
    }
}

/// Per-item projection used by the listing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryListOutput {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<&Category> for CategoryListOutput {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id().value().to_string(),
            name: category.name().to_string(),
            description: category.description().map(str::to_string),
            is_active: category.is_active(),
            created_at: category.created_at(),
            deleted_at: category.deleted_at(),
        }
    }
}
