//! One-shot database initialization.
//!
//! Reads the configured storage path, prepares the filesystem and creates the
//! tables if they do not already exist. Any failure is wrapped into
//! [`SetupError`] with its cause and wrap site, and logged before it
//! propagates.

use std::fs;
use std::panic::Location;
use std::path::Path;

use diesel::connection::SimpleConnection;
use diesel::{Connection, SqliteConnection};
use thiserror::Error;

use crate::config::{ConfigError, DbConfig};

/// DDL materializing the schema declared in [`crate::schema`].
///
/// `IF NOT EXISTS` keeps repeated setup runs idempotent.
const CREATE_SCHEMA_SQL: &str = "\
CREATE TABLE IF NOT EXISTS products (
    sku TEXT NOT NULL PRIMARY KEY,
    name TEXT NOT NULL,
    cost DOUBLE NOT NULL
);
CREATE TABLE IF NOT EXISTS competitors (
    id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    url TEXT NOT NULL UNIQUE,
    product_sku TEXT NOT NULL REFERENCES products (sku) ON DELETE CASCADE
);";

/// Causes of a failed storage initialization.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to create database directory: {0}")]
    CreateDir(#[from] std::io::Error),
    #[error("failed to open database: {0}")]
    Connect(#[from] diesel::ConnectionError),
    #[error("failed to create schema: {0}")]
    Schema(#[from] diesel::result::Error),
}

/// Error returned by [`setup_database`].
///
/// Carries the original cause and the location where it was wrapped.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("configuration error at {location}: {source}")]
    Configuration {
        #[source]
        source: ConfigError,
        location: &'static Location<'static>,
    },
    #[error("storage initialization failed at {location} while {stage}: {source}")]
    Storage {
        stage: &'static str,
        #[source]
        source: StorageError,
        location: &'static Location<'static>,
    },
}

impl SetupError {
    #[track_caller]
    fn configuration(source: ConfigError) -> Self {
        let err = SetupError::Configuration {
            source,
            location: Location::caller(),
        };
        log::error!("{err}");
        err
    }

    #[track_caller]
    fn storage(stage: &'static str, source: impl Into<StorageError>) -> Self {
        let err = SetupError::Storage {
            stage,
            source: source.into(),
            location: Location::caller(),
        };
        log::error!("{err}");
        err
    }
}

/// Reads `DATABASE_PATH` from the environment and initializes the store.
pub fn setup_database() -> Result<(), SetupError> {
    let config = DbConfig::from_env().map_err(SetupError::configuration)?;
    initialize_storage(&config)
}

/// Filesystem and DDL half of [`setup_database`], split out so callers and
/// tests can run it against an explicit configuration.
pub fn initialize_storage(config: &DbConfig) -> Result<(), SetupError> {
    let path = Path::new(&config.database_path);
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .map_err(|e| SetupError::storage("creating the database directory", e))?;
    }

    log::info!("Connecting to the database at {}", config.database_path);
    let mut conn = SqliteConnection::establish(&config.database_path)
        .map_err(|e| SetupError::storage("opening the database", e))?;

    create_schema(&mut conn).map_err(|e| SetupError::storage("creating tables", e))?;
    log::info!("Database tables created (if they did not already exist)");

    Ok(())
}

/// Runs the schema DDL on an existing connection.
pub fn create_schema(conn: &mut SqliteConnection) -> diesel::QueryResult<()> {
    conn.batch_execute(CREATE_SCHEMA_SQL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_schema_is_idempotent() {
        let mut conn = SqliteConnection::establish(":memory:").expect("in-memory database");
        create_schema(&mut conn).expect("first run should create the tables");
        create_schema(&mut conn).expect("second run should be a no-op");
    }
}
