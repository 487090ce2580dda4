//! Pretty output formatting.

use petstore_core::pet::{PetRecord, ValidationErrors};

/// Format a pet for display.
pub fn format_pet(pet: &PetRecord) -> String {
    let status = pet.status.map(|s| s.as_str()).unwrap_or("unknown");
    let mut output = format!("{} [{}]\n  ID: {}", pet.name, status, pet.id);

    if let Some(category) = &pet.category {
        output.push_str(&format!(
            "\n  Category: {} (ID: {})",
            category.name, category.id
        ));
    }
    if !pet.photo_urls.is_empty() {
        output.push_str("\n  Photos:");
        for url in &pet.photo_urls {
            output.push_str(&format!("\n    {}", url));
        }
    }
    if !pet.tags.is_empty() {
        let names: Vec<&str> = pet.tags.iter().map(|t| t.name.as_str()).collect();
        output.push_str(&format!("\n  Tags: {}", names.join(", ")));
    }
    output
}

/// Format validation failures, one field per line.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut output = String::from("Validation failed:");
    for field in errors.fields() {
        if let Some(message) = errors.first(field) {
            output.push_str(&format!("\n  {}: {}", field, message));
        }
    }
    output
}
