//! Session error types

use thiserror::Error;

/// Errors surfaced by the strict session accessors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// No field with the requested id exists in the token list.
    #[error("unknown field id: {id}")]
    UnknownField {
        /// The id that was looked up
        id: String,
    },
}

impl SessionError {
    /// Create an unknown-field error.
    pub fn unknown_field(id: impl Into<String>) -> Self {
        Self::UnknownField { id: id.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SessionError::unknown_field("r9");
        assert_eq!(err.to_string(), "unknown field id: r9");
    }
}
