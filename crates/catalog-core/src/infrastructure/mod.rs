//! Infrastructure adapters implementing the domain ports

pub mod gateways;

pub use gateways::InMemoryCategoryGateway;
