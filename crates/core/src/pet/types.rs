use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::error::PetStatusError;
use crate::serde::{deserialize_lenient_status, deserialize_null_default};

/// Lifecycle status of a pet record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetStatus {
    Available,
    Pending,
    Sold,
}

impl PetStatus {
    /// Every status, in the order the selection control lists them.
    pub const ALL: [PetStatus; 3] = [PetStatus::Available, PetStatus::Pending, PetStatus::Sold];

    /// Canonical wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Pending => "pending",
            Self::Sold => "sold",
        }
    }
}

impl fmt::Display for PetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PetStatus {
    type Err = PetStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| PetStatusError(s.to_string()))
    }
}

/// Category sub-object of a pet resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub id: i64,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub name: String,
}

/// Tag sub-object of a pet resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub id: i64,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub name: String,
}

/// A pet as returned by the upstream API.
///
/// Decoding is lenient: the public API stores whatever its users sent, so a
/// missing name or array decodes as empty and an unknown status as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetRecord {
    pub id: i64,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub photo_urls: Vec<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub tags: Vec<Tag>,
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_status",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<PetStatus>,
}

impl PetRecord {
    /// Create a record with just the required fields.
    pub fn new(id: i64, name: impl Into<String>, status: PetStatus) -> Self {
        Self {
            id,
            name: name.into(),
            category: None,
            photo_urls: Vec::new(),
            tags: Vec::new(),
            status: Some(status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_values() {
        let values: Vec<_> = PetStatus::ALL.iter().map(PetStatus::as_str).collect();
        assert_eq!(values, vec!["available", "pending", "sold"]);
        assert_eq!(PetStatus::Pending.to_string(), "pending");
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("sold".parse::<PetStatus>(), Ok(PetStatus::Sold));
        assert_eq!(
            "Sold".parse::<PetStatus>(),
            Err(PetStatusError("Sold".to_string()))
        );
        assert!("invalid_value".parse::<PetStatus>().is_err());
    }

    #[test]
    fn test_status_serde_matches_wire_value() {
        for status in PetStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }

    #[test]
    fn test_record_decodes_minimal_upstream_body() {
        let json = r#"{"id":5,"name":"Rex","status":"available"}"#;
        let pet: PetRecord = serde_json::from_str(json).unwrap();
        assert_eq!(pet, PetRecord::new(5, "Rex", PetStatus::Available));
    }

    #[test]
    fn test_record_decodes_full_upstream_body() {
        let json = r#"{
            "id": 9,
            "category": {"id": 1, "name": "Dogs"},
            "name": "doggie",
            "photoUrls": ["http://img/1.png"],
            "tags": [{"id": 2, "name": "rex"}],
            "status": "sold"
        }"#;
        let pet: PetRecord = serde_json::from_str(json).unwrap();
        assert_eq!(
            pet.category,
            Some(Category {
                id: 1,
                name: "Dogs".to_string()
            })
        );
        assert_eq!(pet.photo_urls, vec!["http://img/1.png".to_string()]);
        assert_eq!(pet.tags[0].id, 2);
        assert_eq!(pet.status, Some(PetStatus::Sold));
    }

    #[test]
    fn test_record_tolerates_junk_fields() {
        let json = r#"{"id":3,"name":null,"photoUrls":null,"tags":[{"id":0}],"status":"string"}"#;
        let pet: PetRecord = serde_json::from_str(json).unwrap();
        assert_eq!(pet.name, "");
        assert!(pet.photo_urls.is_empty());
        assert_eq!(pet.tags[0].name, "");
        assert_eq!(pet.status, None);
    }

    #[test]
    fn test_record_omits_empty_category_and_tags() {
        let pet = PetRecord::new(1, "Rex", PetStatus::Available);
        let value = serde_json::to_value(&pet).unwrap();
        assert!(value.get("category").is_none());
        assert!(value.get("tags").is_none());
        assert_eq!(value["photoUrls"], serde_json::json!([]));
    }
}
