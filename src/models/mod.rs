//! Diesel row models mapping the schema to the domain layer.

pub mod competitor;
pub mod product;
