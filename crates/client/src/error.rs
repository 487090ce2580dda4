//! Client error types.

use petstore_core::pet::ValidationErrors;
use petstore_core::upstream::UpstreamError;
use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur outside a single upstream call.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("{0}")]
    Upstream(#[from] UpstreamError),

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),
}
