//! Error kinds shipped with the crate.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced by the built-in entry points and the path rules.
///
/// Every variant carries the exact message built by the failing rule, and
/// `Display` prints that message unchanged.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum AssuranceError {
    /// General-purpose failure, used by `Assure::is` and `Assure::that`
    #[error("{0}")]
    Failed(String),

    /// An argument supplied by the caller is invalid
    #[error("{0}")]
    InvalidArgument(String),

    /// The operation is not valid for the current state
    #[error("{0}")]
    InvalidOperation(String),

    /// A file that must exist is missing
    #[error("{0}")]
    FileNotFound(String),

    /// A directory that must exist is missing
    #[error("{0}")]
    DirectoryNotFound(String),
}

impl AssuranceError {
    /// The message carried by this error.
    pub fn message(&self) -> &str {
        match self {
            Self::Failed(message)
            | Self::InvalidArgument(message)
            | Self::InvalidOperation(message)
            | Self::FileNotFound(message)
            | Self::DirectoryNotFound(message) => message,
        }
    }

    /// Check if this error reports a missing file or directory.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::FileNotFound(_) | Self::DirectoryNotFound(_))
    }
}
