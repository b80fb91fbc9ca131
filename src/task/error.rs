use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for the flytectl task plugin
#[derive(Debug, Error, Clone, Serialize, Deserialize)]
pub enum TaskError {
    /// Configuration errors raised at descriptor construction time.
    /// Fatal to construction, never retried.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// JSON serialization/deserialization errors
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// I/O errors (template file reading, etc.)
    #[error("IO error: {0}")]
    Io(String),
}

impl TaskError {
    /// Convert from serde_json::Error
    pub fn from_serde(err: serde_json::Error) -> Self {
        TaskError::Deserialization(err.to_string())
    }

    /// Convert from std::io::Error
    pub fn from_io(err: std::io::Error) -> Self {
        TaskError::Io(err.to_string())
    }
}

/// Type alias for Result with TaskError
pub type Result<T> = std::result::Result<T, TaskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TaskError::Configuration("admin endpoint is required".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: admin endpoint is required"
        );
    }

    #[test]
    fn test_from_serde() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        match TaskError::from_serde(parse_err) {
            TaskError::Deserialization(msg) => assert!(!msg.is_empty()),
            other => panic!("expected Deserialization, got {other:?}"),
        }
    }
}
