//! Aggregate roots of the catalog domain

mod category;

pub use category::{Category, CategoryValidator};
