use std::{env, time::Duration};

/// Most upstream calls a single request makes in sequence: a failed update,
/// its read back and the context lookup.
const MAX_UPSTREAM_CALLS: u32 = 3;

/// Headroom on top of the upstream calls for flash storage and rendering.
const REQUEST_TIMEOUT_MARGIN: Duration = Duration::from_secs(5);

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Upstream pet API base URL (default: "https://petstore.swagger.io/v2")
    pub api_url: String,
    /// Upstream request timeout in seconds (default: 5)
    pub api_timeout_secs: u64,
    /// How long an unread flash survives, in seconds (default: 300)
    pub flash_ttl_seconds: u64,
    /// Name of the cookie carrying the session id (default: "petstore_session")
    pub session_cookie_name: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PETSTORE_API_URL` - Upstream base URL (default: "https://petstore.swagger.io/v2")
    /// - `PETSTORE_TIMEOUT_SECS` - Upstream timeout in seconds (default: 5)
    /// - `FLASH_TTL_SECONDS` - Flash lifetime in seconds (default: 300)
    /// - `SESSION_COOKIE_NAME` - Session cookie name (default: "petstore_session")
    pub fn from_env() -> Self {
        Self {
            api_url: env::var("PETSTORE_API_URL")
                .unwrap_or_else(|_| petstore_client::client::DEFAULT_BASE_URL.to_string()),
            api_timeout_secs: env::var("PETSTORE_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            flash_ttl_seconds: env::var("FLASH_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            session_cookie_name: env::var("SESSION_COOKIE_NAME")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| "petstore_session".to_string()),
        }
    }

    /// Get the upstream timeout as a Duration.
    pub fn api_timeout(&self) -> Duration {
        Duration::from_secs(self.api_timeout_secs)
    }

    /// Server-side bound on a whole request.
    ///
    /// Always outlasts the longest chain of upstream calls, so a slow
    /// upstream ends in a flash and a redirect rather than a bare 408.
    pub fn request_timeout(&self) -> Duration {
        self.api_timeout()
            .saturating_mul(MAX_UPSTREAM_CALLS)
            .saturating_add(REQUEST_TIMEOUT_MARGIN)
    }

    /// Get the flash lifetime as a chrono Duration.
    pub fn flash_ttl(&self) -> chrono::Duration {
        i64::try_from(self.flash_ttl_seconds)
            .ok()
            .and_then(chrono::Duration::try_seconds)
            .unwrap_or(chrono::Duration::MAX)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
