//! Pet CLI commands.

use clap::{Parser, Subcommand};
use petstore_core::pet::{PetForm, UpdatePetForm};

/// Pet management commands.
#[derive(Debug, Parser)]
pub struct PetsCommand {
    #[command(subcommand)]
    pub action: PetsAction,
}

/// Available pet actions.
#[derive(Debug, Subcommand)]
pub enum PetsAction {
    /// Get pet by ID.
    Get {
        /// Pet ID.
        id: i64,
    },
    /// Create a new pet.
    Create {
        /// Pet ID.
        #[arg(long)]
        id: String,
        /// Pet name.
        #[arg(long)]
        name: String,
        /// Category ID.
        #[arg(long)]
        category_id: Option<String>,
        /// Category name.
        #[arg(long)]
        category_name: Option<String>,
        /// Photo URL, may be repeated.
        #[arg(long = "photo-url")]
        photo_urls: Vec<String>,
        /// Tag name, may be repeated.
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// One of available, pending, sold.
        #[arg(long)]
        status: String,
    },
    /// Update a pet's name and status.
    Update {
        /// Pet ID.
        id: i64,
        /// New name.
        #[arg(long)]
        name: String,
        /// New status.
        #[arg(long)]
        status: String,
    },
    /// Delete pet by ID.
    Delete {
        /// Pet ID.
        id: i64,
    },
}

/// Build the create form from CLI arguments, so they go through the same
/// parsing as a browser submission.
pub fn create_form(
    id: String,
    name: String,
    category_id: Option<String>,
    category_name: Option<String>,
    photo_urls: Vec<String>,
    tags: Vec<String>,
    status: String,
) -> PetForm {
    let mut pairs = vec![
        ("id".to_string(), id),
        ("name".to_string(), name),
        ("status".to_string(), status),
    ];
    pairs.extend(category_id.map(|v| ("category_id".to_string(), v)));
    pairs.extend(category_name.map(|v| ("category_name".to_string(), v)));
    pairs.extend(photo_urls.into_iter().map(|v| ("photoUrls[]".to_string(), v)));
    pairs.extend(tags.into_iter().map(|v| ("tags[][name]".to_string(), v)));

    PetForm::from_pairs(pairs)
}

/// Build the update form from CLI arguments.
pub fn update_form(name: String, status: String) -> UpdatePetForm {
    let trimmed = |value: String| {
        let value = value.trim().to_string();
        (!value.is_empty()).then_some(value)
    };
    UpdatePetForm {
        name: trimmed(name),
        status: trimmed(status),
        method: None,
    }
}
