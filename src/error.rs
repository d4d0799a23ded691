//! Error types for almagemela operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;
use std::path::PathBuf;

/// Main error type for almagemela operations.
///
/// Covers artifact loading failures, schema disagreements between an
/// encoded row and a model, and prediction-time failures.
///
/// # Examples
///
/// ```
/// use almagemela::error::AlmaError;
///
/// let err = AlmaError::DimensionMismatch {
///     expected: "29 columns".to_string(),
///     actual: "5 columns".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug)]
pub enum AlmaError {
    /// Model artifact file cannot be located or read.
    ArtifactNotFound {
        /// Path that failed to resolve
        path: PathBuf,
    },

    /// Invalid or corrupt artifact format.
    FormatError {
        /// Error description
        message: String,
    },

    /// Checksum verification failed.
    ChecksumMismatch {
        /// Expected checksum
        expected: u32,
        /// Actual checksum
        actual: u32,
    },

    /// Encoded row doesn't match the model's expected schema.
    DimensionMismatch {
        /// Expected schema description
        expected: String,
        /// Actual schema found
        actual: String,
    },

    /// Prediction failed for any other reason.
    Prediction {
        /// Failure description
        message: String,
    },

    /// I/O error (permission denied, short read, etc.).
    Io(std::io::Error),

    /// Serialization/deserialization error.
    Serialization(String),

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for AlmaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlmaError::ArtifactNotFound { path } => {
                write!(f, "Model artifact not found: {}", path.display())
            }
            AlmaError::FormatError { message } => {
                write!(f, "Invalid artifact format: {message}")
            }
            AlmaError::ChecksumMismatch { expected, actual } => {
                write!(
                    f,
                    "Checksum mismatch: expected 0x{expected:08X}, got 0x{actual:08X}"
                )
            }
            AlmaError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Feature dimension mismatch: expected {expected}, got {actual}"
                )
            }
            AlmaError::Prediction { message } => {
                write!(f, "Prediction failed: {message}")
            }
            AlmaError::Io(e) => write!(f, "I/O error: {e}"),
            AlmaError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            AlmaError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for AlmaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AlmaError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AlmaError {
    fn from(err: std::io::Error) -> Self {
        AlmaError::Io(err)
    }
}

impl From<&str> for AlmaError {
    fn from(msg: &str) -> Self {
        AlmaError::Other(msg.to_string())
    }
}

impl From<String> for AlmaError {
    fn from(msg: String) -> Self {
        AlmaError::Other(msg)
    }
}

impl AlmaError {
    /// Create a dimension mismatch error with descriptive context
    #[must_use]
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }

    /// Create a prediction error with descriptive context
    #[must_use]
    pub fn prediction(message: impl Into<String>) -> Self {
        Self::Prediction {
            message: message.into(),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, AlmaError>;
