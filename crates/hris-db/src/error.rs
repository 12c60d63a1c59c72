//! Database-specific error types and conversions.

use hris_core::error::HrisError;

/// Database-layer error type.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("SurrealDB error: {0}")]
    Surreal(#[from] surrealdb::Error),

    #[error("Cannot open employee store at {url}: {reason}")]
    Connect { url: String, reason: String },

    #[error("Migration failed: {0}")]
    Migration(String),

    #[error("Query failed: {0}")]
    Query(String),

    #[error("Malformed row: {0}")]
    Decode(String),

    #[error("Record not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Unique constraint violated on {entity}")]
    Conflict { entity: String },
}

impl DbError {
    /// Classify an error raised by a write statement. Unique index
    /// violations become [`DbError::Conflict`].
    pub(crate) fn from_write(entity: &str, err: surrealdb::Error) -> Self {
        if err.to_string().contains("already contains") {
            DbError::Conflict {
                entity: entity.into(),
            }
        } else {
            DbError::Query(err.to_string())
        }
    }
}

impl From<DbError> for HrisError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => HrisError::NotFound { entity, id },
            DbError::Conflict { entity } => HrisError::AlreadyExists { entity },
            other => HrisError::Database(other.to_string()),
        }
    }
}
