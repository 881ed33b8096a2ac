//! Value objects for the catalog domain

mod category_id;

pub use category_id::CategoryId;
