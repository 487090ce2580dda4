use std::collections::BTreeMap;

use thiserror::Error;

/// A status string outside the pet vocabulary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown pet status: {0}")]
pub struct PetStatusError(pub String);

/// Field-level validation failures for a submitted form.
///
/// Keys are form field names as submitted (`photoUrls.1`, `tags.0.name`),
/// values the messages for that field in the order they were raised.
#[derive(Debug, Error, Clone, Default, PartialEq, Eq)]
#[error("{} field(s) failed validation", .fields.len())]
pub struct ValidationErrors {
    fields: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message against a field.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn has(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// First message recorded for a field.
    pub fn first(&self, field: &str) -> Option<&str> {
        self.fields
            .get(field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    /// First message among fields sharing a prefix, e.g. `photoUrls.`.
    pub fn first_with_prefix(&self, prefix: &str) -> Option<&str> {
        self.fields
            .iter()
            .filter(|(field, _)| field.starts_with(prefix))
            .find_map(|(_, messages)| messages.first())
            .map(String::as_str)
    }

    /// Names of every failed field.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}
