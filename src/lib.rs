//! Data layer for the price monitoring service.
//!
//! This crate declares the `products`/`competitors` schema, the validated
//! domain entities stored in it, a Diesel/SQLite repository and the one-shot
//! database initializer.

pub mod config;
pub mod db;
pub mod domain;
pub mod models;
pub mod repository;
pub mod schema;
pub mod setup;
