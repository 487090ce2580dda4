//! Pure mapping from upstream HTTP status codes to [`UpstreamError`] variants.

use super::{Operation, UpstreamError};

/// Maps a non-success upstream status to the error reported for `operation`.
///
/// - `400` -> `InvalidId` ("Invalid ID supplied")
/// - `404` -> `NotFound` ("Pet not found")
/// - `405` on create -> `InvalidInput` ("Invalid input")
/// - anything else -> `Failure` with the operation's default message
///
/// # Examples
///
/// ```
/// use petstore_core::upstream::{status_to_error, Operation};
///
/// assert_eq!(status_to_error(Operation::Fetch, 404).to_string(), "Pet not found");
/// assert_eq!(status_to_error(Operation::Update, 500).to_string(), "Failed to update pet");
/// ```
pub fn status_to_error(operation: Operation, status: u16) -> UpstreamError {
    match (operation, status) {
        (_, 400) => UpstreamError::InvalidId,
        (_, 404) => UpstreamError::NotFound,
        (Operation::Create, 405) => UpstreamError::InvalidInput,
        (operation, status) => UpstreamError::failure(operation, status),
    }
}
