use async_trait::async_trait;

use super::{Flash, FlashError, SessionId};

/// Result type for flash storage operations.
pub type Result<T> = std::result::Result<T, FlashError>;

/// Storage for the single pending flash of each session.
#[async_trait]
pub trait FlashRepository: Send + Sync {
    /// Store the flash for a session, replacing any unread one.
    async fn put(&self, session: &SessionId, flash: Flash) -> Result<()>;

    /// Retrieve and delete the pending flash for a session.
    async fn take(&self, session: &SessionId) -> Result<Option<Flash>>;
}
