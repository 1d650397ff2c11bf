//! Validation error types

use thiserror::Error;

/// Validation error for request inputs
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// String doesn't match required format (e.g., object id)
    #[error("{field}: {reason}")]
    InvalidFormat {
        field: &'static str,
        reason: &'static str,
    },

    /// Number out of the accepted range
    #[error("{field} must be non-negative")]
    Negative { field: &'static str },
}

/// Require a non-blank string field.
pub fn required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(())
}
