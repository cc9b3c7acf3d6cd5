//! Environment-backed configuration.

use thiserror::Error;

/// Environment variable naming the SQLite file the service stores data in.
pub const DATABASE_PATH_ENV: &str = "DATABASE_PATH";

/// Errors raised while resolving configuration from the environment.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The storage path setting is absent or blank.
    #[error("DATABASE_PATH is not set or empty")]
    MissingDatabasePath,
}

/// Database settings resolved from the process environment.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Filesystem path of the SQLite database file.
    pub database_path: String,
}

impl DbConfig {
    /// Read settings from the environment, loading `.env` first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        match std::env::var(DATABASE_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => Ok(Self {
                database_path: path,
            }),
            _ => Err(ConfigError::MissingDatabasePath),
        }
    }
}
