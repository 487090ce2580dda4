//! Serde helper functions for upstream deserialization.
//!
//! The public upstream API returns `null` or unexpected values for fields it
//! documents as required. These helpers normalise them.

use serde::{Deserialize, Deserializer};

use crate::pet::PetStatus;

/// Deserialize a value, falling back to its default when the input is `null`.
pub fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let value: Option<T> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// Deserialize a pet status, mapping anything outside the vocabulary to None.
pub fn deserialize_lenient_status<'de, D>(deserializer: D) -> Result<Option<PetStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(|s| s.parse().ok()))
}
