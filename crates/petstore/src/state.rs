//! Shared application state.
//!
//! Handlers see the upstream API and the flash store only through their
//! core traits, so tests can point the state at any implementation.

use std::sync::Arc;

use petstore_client::PetstoreClient;
use petstore_core::flash::FlashRepository;
use petstore_core::upstream::PetApi;

use crate::{config::Config, sessions::FlashStore};

/// Shared application state, cloned for each request handler.
#[derive(Clone)]
pub struct AppState {
    /// Upstream pet API.
    pub api: Arc<dyn PetApi>,
    /// Pending flash per session.
    pub flashes: Arc<dyn FlashRepository>,
    /// Runtime configuration.
    pub config: Arc<Config>,
}

impl AppState {
    /// Create state around an API, with an in-memory flash store.
    pub fn new(api: Arc<dyn PetApi>, config: Config) -> Self {
        Self {
            api,
            flashes: Arc::new(FlashStore::new(config.flash_ttl())),
            config: Arc::new(config),
        }
    }

    /// Create state talking to the upstream named in the configuration.
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let client = PetstoreClient::new(&config.api_url, config.api_timeout())?;
        tracing::info!(
            api_url = %client.base_url(),
            timeout_secs = config.api_timeout_secs,
            "Using upstream pet API"
        );
        Ok(Self::new(Arc::new(client), config))
    }
}
