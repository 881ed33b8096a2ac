//! Commands - Write operations that change system state

use serde::{Deserialize, Serialize};

/// Create a new category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategoryCommand {
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
}

impl CreateCategoryCommand {
    pub fn with(name: impl Into<String>, description: Option<String>, is_active: bool) -> Self {
        Self {
            name: name.into(),
            description,
            is_active,
        }
    }
}

/// Update an existing category identified by its raw id string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCategoryCommand {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
}

impl UpdateCategoryCommand {
    pub fn with(
        id: impl Into<String>,
        name: impl Into<String>,
        description: Option<String>,
        is_active: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description,
            is_active,
        }
    }
}
