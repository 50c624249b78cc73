use thiserror::Error;

/// Custom error type for the scalargrad engine, network layers and trainer.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum ScalarGradError {
    /// An operand could not be coerced, or an operation received an argument it cannot use
    /// (e.g. raising a value to a non-numeric power).
    #[error("Invalid argument for {operation}: {reason}")]
    InvalidArgument { operation: String, reason: String },

    #[error("Shape mismatch: expected {expected}, got {actual} during operation {operation}")]
    ShapeMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Invalid training configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl ScalarGradError {
    pub(crate) fn invalid_argument(operation: &str, reason: impl Into<String>) -> Self {
        ScalarGradError::InvalidArgument {
            operation: operation.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for ScalarGradError {
    fn from(err: std::io::Error) -> Self {
        ScalarGradError::Io(err.to_string())
    }
}
