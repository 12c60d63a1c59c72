//! Error types for the HRIS system.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HrisError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Entity already exists: {entity}")]
    AlreadyExists { entity: String },

    #[error("Forbidden: {reason}")]
    Forbidden { reason: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Operation timed out: {operation}")]
    Timeout { operation: String },

    #[error("Database error: {0}")]
    Database(String),

    #[error("Cryptography error: {0}")]
    Crypto(String),
}

impl HrisError {
    /// Shorthand for a [`HrisError::Validation`] with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

pub type HrisResult<T> = Result<T, HrisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_shorthand_carries_message() {
        let err = HrisError::validation("email is required");
        assert_eq!(err.to_string(), "Validation error: email is required");
        assert!(!err.is_not_found());
    }

    #[test]
    fn not_found_is_recognised() {
        let err = HrisError::NotFound {
            entity: "employee".into(),
            id: "7".into(),
        };
        assert!(err.is_not_found());
    }
}
