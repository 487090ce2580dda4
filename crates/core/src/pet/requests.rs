//! Validated payloads sent to the upstream API.
//!
//! These are only built by [`super::validation`], so holding one means the
//! form it came from passed every rule.

use serde::{Deserialize, Serialize};

use super::types::{Category, PetStatus, Tag};

/// Creation payload, in the upstream resource shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPet {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    pub photo_urls: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
    pub status: PetStatus,
}

/// Update payload, sent form-encoded to `POST /pet/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetUpdate {
    pub name: String,
    pub status: PetStatus,
}
