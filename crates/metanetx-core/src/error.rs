// Rust guideline compliant 2026-10-18

//! Error types for the MetaNetX resolver library.

use serde::Serialize;
use thiserror::Error;

/// Result type alias for resolver operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Stable error codes for machine-readable error output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The caller supplied an unsupported argument.
    InvalidArgument,
    /// The remote service could not be reached or answered with a failure.
    RemoteLookupFailed,
    /// The remote service answered with JSON of an unexpected shape.
    MalformedResponse,
    /// Configuration values failed validation.
    InvalidConfig,
    /// Local IO failure.
    IoError,
}

/// Error types for resolver operations.
///
/// An unmatched token is not an error; it resolves to an empty
/// [`MetaboliteRecord`](crate::MetaboliteRecord).
#[derive(Debug, Error)]
pub enum Error {
    /// Unsupported input-type tag or other bad argument. Raised before any IO.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Transport failure, non-success HTTP status or unreadable body.
    #[error("Remote lookup failed: {0}")]
    RemoteLookupFailed(String),

    /// Response body was not JSON or did not have the expected shape.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Invalid configuration file or environment override.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns the stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::InvalidArgument(_) => ErrorCode::InvalidArgument,
            Error::RemoteLookupFailed(_) => ErrorCode::RemoteLookupFailed,
            Error::MalformedResponse(_) => ErrorCode::MalformedResponse,
            Error::InvalidConfig(_) => ErrorCode::InvalidConfig,
            Error::Io(_) => ErrorCode::IoError,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Error::MalformedResponse(err.to_string())
        } else {
            Error::RemoteLookupFailed(err.to_string())
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::MalformedResponse(err.to_string())
    }
}
