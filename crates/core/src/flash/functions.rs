use chrono::{DateTime, Duration, Utc};
use rand::{distr::Alphanumeric, Rng};

use super::SessionId;

/// Generate a random session ID.
pub fn generate_session_id() -> SessionId {
    let id: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect();
    SessionId::new(id)
}

/// Check if a flash stored at `stored_at` has outlived `ttl`.
///
/// A TTL too large to add to `stored_at` never expires.
pub fn is_flash_expired(stored_at: DateTime<Utc>, ttl: Duration, now: DateTime<Utc>) -> bool {
    stored_at
        .checked_add_signed(ttl)
        .is_some_and(|expires_at| expires_at <= now)
}
