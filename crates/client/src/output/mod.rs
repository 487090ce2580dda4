//! Output formatting functions.

pub mod pretty;

use petstore_core::pet::PetRecord;

use crate::cli::OutputFormat;

/// Render a pet record in the chosen format.
///
/// JSON output is the compact wire shape; pretty output is headed by `verb`
/// when one is given.
pub fn format_pet(pet: &PetRecord, format: OutputFormat, verb: Option<&str>) -> String {
    match (format, verb) {
        (OutputFormat::Json, _) => serde_json::to_string(pet).unwrap_or_default(),
        (OutputFormat::Pretty, Some(verb)) => format!("{}:\n{}", verb, pretty::format_pet(pet)),
        (OutputFormat::Pretty, None) => pretty::format_pet(pet),
    }
}
