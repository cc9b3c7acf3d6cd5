//! Error types shared by repository implementations.

use diesel::result::DatabaseErrorKind;
use thiserror::Error;

use crate::domain::types::TypeConstraintError;

/// Generic error type returned from repository functions.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The underlying query failed; constraint violations surface here.
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
    /// No connection could be checked out of the pool.
    #[error("connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    /// A stored row failed domain validation on the way out.
    #[error("validation error: {0}")]
    Validation(String),
}

impl From<TypeConstraintError> for RepositoryError {
    fn from(err: TypeConstraintError) -> Self {
        RepositoryError::Validation(err.to_string())
    }
}

impl RepositoryError {
    /// True for SQLite UNIQUE constraint violations.
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            RepositoryError::Database(diesel::result::Error::DatabaseError(
                DatabaseErrorKind::UniqueViolation,
                _,
            ))
        )
    }

    /// True for SQLite FOREIGN KEY constraint violations.
    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(
            self,
            RepositoryError::Database(diesel::result::Error::DatabaseError(
                DatabaseErrorKind::ForeignKeyViolation,
                _,
            ))
        )
    }
}

/// Convenient alias for results returned from repository functions.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
