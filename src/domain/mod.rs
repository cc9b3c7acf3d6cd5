//! Domain entities and the validated value objects they are built from.

pub mod competitor;
pub mod product;
pub mod types;
