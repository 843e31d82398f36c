use serde::Serialize;
use thiserror::Error;

/// Failures a single check can record against an artifact
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CheckError {
    #[error("MISSING: {artifact} ({path})")]
    MissingArtifact { artifact: String, path: String },

    #[error("EMPTY: {artifact} ({path})")]
    EmptyArtifact { artifact: String, path: String },

    #[error("UNREADABLE: {artifact} ({path}): {detail}")]
    UnreadableArtifact { artifact: String, path: String, detail: String },

    #[error("MISSING CONTENT: '{marker}' in {file}")]
    MissingMarker { file: String, marker: String },

    #[error("FORBIDDEN CONTENT: '{marker}' in {file}")]
    ForbiddenMarker { file: String, marker: String },

    #[error("Bookmarklet does not start with '{expected}'")]
    InvalidPayloadPrefix { expected: String },

    #[error("CSS injection logic missing in {file}")]
    InjectionLogicMissing { file: String },
}

/// Errors raised by the harness itself rather than by a check
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("Failed to read config file: {0}")]
    ConfigReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ConfigParseError(#[from] serde_yaml::Error),
}

/// Result type for harness operations
pub type HarnessResult<T> = Result<T, HarnessError>;

/// Recoverable vs. non-recoverable errors
pub trait RecoverableError {
    /// Whether verification may continue after this error was recorded
    fn is_recoverable(&self) -> bool;
}

impl RecoverableError for CheckError {
    fn is_recoverable(&self) -> bool {
        // Later checks read the file, so a missing or unreadable artifact stops the run.
        !matches!(
            self,
            CheckError::MissingArtifact { .. }
                | CheckError::EmptyArtifact { .. }
                | CheckError::UnreadableArtifact { .. }
        )
    }
}
