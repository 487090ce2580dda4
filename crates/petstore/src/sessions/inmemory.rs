//! In-memory flash storage.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;

use petstore_core::flash::{is_flash_expired, Flash, FlashRepository, Result, SessionId};

#[derive(Debug, Clone)]
struct StoredFlash {
    flash: Flash,
    stored_at: DateTime<Utc>,
}

/// In-memory flash store.
///
/// Holds at most one flash per session in a HashMap wrapped in
/// `Arc<RwLock<_>>`. Entries older than the TTL are never returned, and are
/// pruned whenever a new flash is stored.
#[derive(Debug, Clone)]
pub struct FlashStore {
    entries: Arc<RwLock<HashMap<SessionId, StoredFlash>>>,
    ttl: Duration,
}

impl FlashStore {
    /// Creates a new empty store whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Number of stored flashes, expired or not.
    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[async_trait]
impl FlashRepository for FlashStore {
    async fn put(&self, session: &SessionId, flash: Flash) -> Result<()> {
        let now = Utc::now();
        let mut entries = self.entries.write().await;

        entries.retain(|_, stored| !is_flash_expired(stored.stored_at, self.ttl, now));
        entries.insert(
            session.clone(),
            StoredFlash {
                flash,
                stored_at: now,
            },
        );
        Ok(())
    }

    async fn take(&self, session: &SessionId) -> Result<Option<Flash>> {
        let mut entries = self.entries.write().await;
        let Some(stored) = entries.remove(session) else {
            return Ok(None);
        };

        if is_flash_expired(stored.stored_at, self.ttl, Utc::now()) {
            tracing::debug!(session = %session, "Discarding expired flash");
            return Ok(None);
        }
        Ok(Some(stored.flash))
    }
}
