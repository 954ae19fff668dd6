//! Contract error types for the retail module

use thiserror::Error;

/// Retail module domain errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RetailError {
    /// Record not found
    #[error("{resource} not found: {id}")]
    NotFound { resource: String, id: String },

    /// Field validation failed
    #[error("Validation error on '{field}': {message}")]
    Validation { field: String, message: String },

    /// Write conflicts with current database state
    #[error("Conflict: {reason}")]
    Conflict { reason: String },

    #[error("Internal error")]
    Internal,
}

impl RetailError {
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
