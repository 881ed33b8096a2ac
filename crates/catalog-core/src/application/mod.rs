//! Application layer - Use cases and orchestration
//!
//! Write use cases validate through an accumulating [`Notification`] and
//! return failures as data; not-found signalling and read/delete gateway
//! failures travel the raised [`DomainError`] channel instead. The two
//! channels are deliberately distinct and must stay that way.
//!
//! [`Notification`]: crate::domain::Notification
//! [`DomainError`]: crate::domain::DomainError

pub mod commands;
pub mod dto;
pub mod handlers;

pub use commands::{CreateCategoryCommand, UpdateCategoryCommand};
pub use dto::{CategoryListOutput, CategoryOutput, CreateCategoryOutput, UpdateCategoryOutput};
pub use handlers::{
    CreateCategoryUseCase, DeleteCategoryUseCase, GetCategoryByIdUseCase, ListCategoriesUseCase,
    UpdateCategoryUseCase,
};
