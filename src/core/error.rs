/// Newsdesk Error Module
///
/// This module defines the error taxonomy for the data-access layer.
/// It provides structured error handling with proper error propagation
/// and a clear split between caller mistakes and store failures.
use thiserror::Error;

/// Comprehensive error type for the newsdesk data-access layer.
///
/// The variants map directly onto the failure modes of the layer:
/// - `Validation`: a field violates its declared constraint, checked before any I/O
/// - `Conflict`: a uniqueness constraint (author email) was violated at write time
/// - `NotPersisted`: an identity-requiring operation was invoked on a transient entity
/// - `Database`: the store is unreachable or a statement failed for infrastructure reasons
/// - `Config`: the connection configuration file could not be loaded or parsed
///
/// Absent results (a `find_by_id` that matches nothing) are not errors; they
/// surface as `Option::None` or an empty `Vec`.
#[derive(Error, Debug)]
pub enum NewsdeskError {
    /// A candidate record failed validation; no write was attempted
    #[error("Validation error: {field}: {reason}")]
    Validation {
        field: &'static str,
        reason: String,
    },

    /// A store-level uniqueness constraint was violated
    #[error("Conflict error: {0}")]
    Conflict(String),

    /// An operation that requires an assigned identity was called on a
    /// transient entity
    #[error("Not persisted: {0} requires an entity with an assigned id")]
    NotPersisted(&'static str),

    /// Database-related errors from SQLite operations
    #[error("Database error: {0}")]
    Database(rusqlite::Error),

    /// Configuration loading and validation errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Type alias for Result to use NewsdeskError as the error type.
pub type Result<T> = std::result::Result<T, NewsdeskError>;

impl NewsdeskError {
    /// Builds a `Validation` error naming the offending field.
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        NewsdeskError::Validation {
            field,
            reason: reason.into(),
        }
    }
}

/// Classifies store errors on the way in: a UNIQUE constraint failure is a
/// `Conflict` the caller can act on, everything else is infrastructure.
impl From<rusqlite::Error> for NewsdeskError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(code, Some(message))
                if code.code == rusqlite::ErrorCode::ConstraintViolation
                    && message.contains("UNIQUE constraint failed") =>
            {
                NewsdeskError::Conflict(message.clone())
            }
            _ => NewsdeskError::Database(err),
        }
    }
}
