//! Error types for the funcflow context core.
//!
//! The taxonomy is deliberately narrow: the context performs no I/O, so the
//! only aborting condition is a construction-time invalid argument. Lookup
//! misses are `Option::None`, and a null culture assignment falls back to
//! the ambient locale instead of failing.

use thiserror::Error;

/// The main error type for funcflow operations.
#[derive(Debug, Error)]
pub enum FuncflowError {
    /// A variable key failed validation.
    #[error("{0}")]
    InvalidKey(#[from] InvalidKeyError),

    /// An execution context was built without the required runtime handle.
    #[error("execution context requires a runtime handle")]
    MissingRuntime,
}

/// Error raised when a variable key is empty or all whitespace.
#[derive(Debug, Clone, Error)]
#[error("invalid variable key {key:?}: a key must contain at least one non-whitespace character")]
pub struct InvalidKeyError {
    /// The rejected key.
    pub key: String,
}

impl InvalidKeyError {
    /// Creates a new invalid-key error.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_key_message_includes_key() {
        let err = InvalidKeyError::new("  ");
        assert!(err.to_string().contains("\"  \""));
    }

    #[test]
    fn test_invalid_key_converts_to_funcflow_error() {
        let err: FuncflowError = InvalidKeyError::new("").into();
        assert!(matches!(err, FuncflowError::InvalidKey(_)));
    }

    #[test]
    fn test_missing_runtime_message() {
        let err = FuncflowError::MissingRuntime;
        assert_eq!(
            err.to_string(),
            "execution context requires a runtime handle"
        );
    }
}
