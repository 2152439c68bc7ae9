//! Error types for gerrit-push operations.
//!
//! This module defines [`GerritPushError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Repository discovery failures degrade to empty results and are logged
//! - Only the top-level push command turns an error into a user notification
//! - [`GerritPushError::UserCancelled`] is a silent abort, not a failure
//! - Use `anyhow::Error` (via `GerritPushError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for gerrit-push operations.
#[derive(Debug, Error)]
pub enum GerritPushError {
    /// No working directory resolved to a git repository root.
    #[error("No git repository found at {path}")]
    NoRepositoryFound { path: PathBuf },

    /// The repository has no remotes at all.
    #[error("No git remotes configured")]
    NoRemoteConfigured,

    /// The current branch could not be determined (e.g. detached HEAD).
    #[error("Unable to determine current branch: {message}")]
    BranchUndetermined { message: String },

    /// A subprocess failed to start or exited with a non-zero status.
    ///
    /// The message is the captured standard error, surfaced verbatim.
    #[error("{message}")]
    ProcessError { message: String },

    /// The user dismissed a prompt or declined the confirmation.
    #[error("Cancelled by user")]
    UserCancelled,

    /// An explicitly requested configuration file does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse a configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid user input or an unanswerable prompt.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GerritPushError {
    /// Whether this error represents a user cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::UserCancelled)
    }
}

/// Result type alias for gerrit-push operations.
pub type Result<T> = std::result::Result<T, GerritPushError>;
