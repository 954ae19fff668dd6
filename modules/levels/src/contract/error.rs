//! Contract error types for the levels module

use thiserror::Error;

/// Levels module domain errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelsError {
    /// Record not found
    #[error("{resource} not found: {id}")]
    NotFound {
        /// Resource type (level, guided_level, question, choice)
        resource: String,
        /// Resource identifier
        id: String,
    },
    /// Field validation failed
    #[error("Validation error on '{field}': {message}")]
    Validation {
        /// Offending field
        field: String,
        /// Validation error message
        message: String,
    },
    /// Uniqueness conflict
    #[error("Conflict: {reason}")]
    Conflict {
        /// Conflict reason
        reason: String,
    },
    /// Internal error
    #[error("Internal error")]
    Internal,
}

impl LevelsError {
    pub fn not_found(resource: &str, id: i32) -> Self {
        Self::NotFound {
            resource: resource.to_string(),
            id: id.to_string(),
        }
    }

    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.to_string(),
            message: message.into(),
        }
    }
}
