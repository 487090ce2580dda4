//! HTTP client for the upstream pet store API.

pub mod pets;

use std::time::Duration;

use petstore_core::upstream::{status_to_error, Operation, UpstreamError};
use serde::de::DeserializeOwned;

use crate::error::{ClientError, Result};

/// Default upstream base URL.
pub const DEFAULT_BASE_URL: &str = "https://petstore.swagger.io/v2";

/// Default bound on a single upstream call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// HTTP client for the pet store API.
#[derive(Debug, Clone)]
pub struct PetstoreClient {
    client: reqwest::Client,
    base_url: String,
}

impl PetstoreClient {
    /// Create a client whose every request is bounded by `timeout`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ClientError::Build)?;

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request, turning transport failures and non-success statuses
    /// into the operation's upstream error.
    async fn send(
        &self,
        operation: Operation,
        request: reqwest::RequestBuilder,
    ) -> petstore_core::upstream::Result<reqwest::Response> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!(%operation, error = %e, "Upstream request failed");
            UpstreamError::network(operation, e)
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        tracing::warn!(%operation, status = status.as_u16(), "Upstream returned an error status");
        Err(status_to_error(operation, status.as_u16()))
    }

    /// Decode a success body.
    async fn decode<T: DeserializeOwned>(
        &self,
        operation: Operation,
        response: reqwest::Response,
    ) -> petstore_core::upstream::Result<T> {
        response.json().await.map_err(|e| {
            tracing::warn!(%operation, error = %e, "Upstream body did not decode");
            UpstreamError::undecodable(operation)
        })
    }
}
