use std::fmt;

/// The four logical operations against the upstream pet API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Fetch,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// Message reported when the upstream fails in a way with no specific mapping.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::Fetch => "Unexpected error",
            Self::Create => "Failed to add pet",
            Self::Update => "Failed to update pet",
            Self::Delete => "Failed to delete pet",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fetch => "fetch",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
