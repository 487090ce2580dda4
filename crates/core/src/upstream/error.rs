use std::fmt::Display;

use thiserror::Error;

use super::Operation;

/// Failures reported by the upstream pet API, already normalised to the
/// message shown to the user.
///
/// `Failure` and `Network` both display the operation's default message; the
/// status or transport cause they carry is for logs only.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UpstreamError {
    #[error("Invalid ID supplied")]
    InvalidId,

    #[error("Pet not found")]
    NotFound,

    #[error("Invalid input")]
    InvalidInput,

    #[error("{message}")]
    Failure {
        /// Upstream status, or `None` when a success body could not be decoded.
        status: Option<u16>,
        message: String,
    },

    #[error("{message}")]
    Network { message: String, cause: String },
}

impl UpstreamError {
    /// Generic failure for an unmapped upstream status.
    pub fn failure(operation: Operation, status: u16) -> Self {
        Self::Failure {
            status: Some(status),
            message: operation.default_message().to_string(),
        }
    }

    /// Generic failure for a success response whose body did not decode.
    pub fn undecodable(operation: Operation) -> Self {
        Self::Failure {
            status: None,
            message: operation.default_message().to_string(),
        }
    }

    /// Connection-level failure (refused, reset, timed out).
    pub fn network(operation: Operation, cause: impl Display) -> Self {
        Self::Network {
            message: operation.default_message().to_string(),
            cause: cause.to_string(),
        }
    }
}

/// Result type for upstream operations.
pub type Result<T> = std::result::Result<T, UpstreamError>;
