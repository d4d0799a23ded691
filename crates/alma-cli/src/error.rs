//! Error types for alma-cli.

use almagemela::error::AlmaError;
use almagemela::present::MISSING_ARTIFACT_ADVICE;
use std::process::ExitCode;
use thiserror::Error;

/// Result type alias for CLI operations
pub(crate) type Result<T> = std::result::Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug)]
pub(crate) enum CliError {
    /// Model artifact missing: rendered as the fixed advisory
    #[error("{MISSING_ARTIFACT_ADVICE}")]
    ArtifactNotFound,

    /// Invalid .alma artifact
    #[error("Invalid artifact: {0}")]
    InvalidFormat(String),

    /// Artifact failed validation
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Any other evaluation failure
    #[error("An error occurred: {0}")]
    Evaluation(String),
}

impl CliError {
    /// Get exit code for this error
    pub(crate) fn exit_code(&self) -> ExitCode {
        match self {
            Self::ArtifactNotFound => ExitCode::from(3),
            Self::InvalidFormat(_) => ExitCode::from(4),
            Self::ValidationFailed(_) => ExitCode::from(5),
            Self::Io(_) => ExitCode::from(7),
            Self::Evaluation(_) => ExitCode::from(1),
        }
    }
}

impl From<AlmaError> for CliError {
    fn from(e: AlmaError) -> Self {
        match e {
            AlmaError::ArtifactNotFound { .. } => Self::ArtifactNotFound,
            AlmaError::FormatError { .. } | AlmaError::ChecksumMismatch { .. } => {
                Self::InvalidFormat(e.to_string())
            }
            AlmaError::Io(io) => Self::Io(io),
            other => Self::Evaluation(other.to_string()),
        }
    }
}
