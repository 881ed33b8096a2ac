//! # Catalog Core
//!
//! Domain and application core for the admin catalog backend: the category
//! aggregate with soft-delete lifecycle, an error-accumulation validation
//! protocol with two pluggable failure-handling strategies, and the CRUD
//! use cases orchestrating them over a persistence gateway.
//!
//! Transport and durable storage live behind narrow interfaces; the crate
//! ships an in-memory gateway for tests and local development.

#![warn(rust_2018_idioms)]

pub mod application;
pub mod domain;
pub mod infrastructure;

// Domain layer exports
pub use domain::{
    AggregateRoot, Category, CategoryGateway, CategoryId, DomainError, DomainResult, Entity,
    Error, FailFast, Notification, Pagination, SearchQuery, SortDirection, ValidationHandler,
    Validator,
};

// Application layer exports
pub use application::{
    CategoryListOutput, CategoryOutput, CreateCategoryCommand, CreateCategoryOutput,
    CreateCategoryUseCase, DeleteCategoryUseCase, GetCategoryByIdUseCase, ListCategoriesUseCase,
    UpdateCategoryCommand, UpdateCategoryOutput, UpdateCategoryUseCase,
};

// Infrastructure exports
pub use infrastructure::InMemoryCategoryGateway;

/// Re-export commonly used types
pub mod prelude {
    pub use super::{
        Category,
        CategoryGateway,
        CategoryId,
        CategoryOutput,
        CreateCategoryCommand,
        CreateCategoryUseCase,
        DeleteCategoryUseCase,
        DomainError,
        DomainResult,
        Entity,
        Error,
        GetCategoryByIdUseCase,
        InMemoryCategoryGateway,
        ListCategoriesUseCase,
        Notification,
        SearchQuery,
        UpdateCategoryCommand,
        UpdateCategoryUseCase,
        ValidationHandler,
    };
}
