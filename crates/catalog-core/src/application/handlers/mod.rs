//! Use-case handlers split by write and read side

mod command_handlers;
mod query_handlers;

pub use command_handlers::{CreateCategoryUseCase, DeleteCategoryUseCase, UpdateCategoryUseCase};
pub use query_handlers::{GetCategoryByIdUseCase, ListCategoriesUseCase};
