//! Form-to-resource mapping.
//!
//! Validation fails closed: every rule is checked, every violation is
//! reported against its field, and no payload is produced unless the whole
//! form is clean.

use url::Url;

use super::error::ValidationErrors;
use super::form::{PetForm, UpdatePetForm, MAX_LIST_ENTRIES};
use super::requests::{NewPet, PetUpdate};
use super::types::{Category, PetStatus, Tag};

fn required(field: &str) -> String {
    format!("The {field} field is required.")
}

fn not_integer(field: &str) -> String {
    format!("The {field} field must be an integer.")
}

fn invalid_status() -> String {
    "The selected status is invalid.".to_string()
}

/// Parse a pet identifier: a positive integer.
pub fn parse_pet_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

/// Whether a string is an absolute http(s) URL with a host.
pub fn is_valid_url(raw: &str) -> bool {
    Url::parse(raw)
        .map(|url| matches!(url.scheme(), "http" | "https") && url.host().is_some())
        .unwrap_or(false)
}

/// Drop blank photo URLs, keeping the order of the rest.
pub fn filter_photo_urls(photo_urls: &[String]) -> Vec<String> {
    photo_urls
        .iter()
        .filter(|url| !url.trim().is_empty())
        .cloned()
        .collect()
}

/// Category sub-object, present only when both halves are non-empty.
///
/// A category id of `0` counts as empty.
pub fn build_category(id: Option<i64>, name: Option<&str>) -> Option<Category> {
    match (id, name) {
        (Some(id), Some(name)) if id != 0 && !name.trim().is_empty() => Some(Category {
            id,
            name: name.to_string(),
        }),
        _ => None,
    }
}

/// Number tags by their submitted position (1-based), then drop blank ones.
///
/// Identifiers are not renumbered after dropping, so `["", "rex"]` yields a
/// single tag with id 2.
pub fn number_tags(names: &[String]) -> Vec<Tag> {
    names
        .iter()
        .enumerate()
        .filter(|(_, name)| !name.trim().is_empty())
        .map(|(index, name)| Tag {
            id: index as i64 + 1,
            name: name.clone(),
        })
        .collect()
}

fn too_many(field: &str) -> String {
    format!("The {field} field must not have more than {MAX_LIST_ENTRIES} items.")
}

fn check_status(raw: Option<&str>) -> Result<PetStatus, String> {
    raw.ok_or_else(|| required("status"))?
        .parse()
        .map_err(|_| invalid_status())
}

fn check_name(raw: Option<&str>) -> Result<String, String> {
    raw.map(str::to_string).ok_or_else(|| required("name"))
}

fn check_id(raw: Option<&str>) -> Result<i64, String> {
    match raw.ok_or_else(|| required("id"))?.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        Ok(_) => Err("The id field must be at least 1.".to_string()),
        Err(_) => Err(not_integer("id")),
    }
}

fn check_category_id(raw: Option<&str>) -> Result<Option<i64>, String> {
    raw.map(|raw| raw.parse::<i64>().map_err(|_| not_integer("category_id")))
        .transpose()
}

/// Errors that do not block any single value: bad photo URLs and list overflow.
fn list_errors(form: &PetForm) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    for (index, url) in form.photo_urls.iter().enumerate() {
        if !url.trim().is_empty() && !is_valid_url(url) {
            let field = format!("photoUrls.{index}");
            let message = format!("The {field} field must be a valid URL.");
            errors.add(field, message);
        }
    }
    if form.photo_urls_overflow {
        errors.add("photoUrls", too_many("photoUrls"));
    }
    if form.tags_overflow {
        errors.add("tags", too_many("tags"));
    }

    errors
}

fn record<T>(errors: &mut ValidationErrors, field: &str, result: Result<T, String>) {
    if let Err(message) = result {
        errors.add(field, message);
    }
}

/// Validate the "add pet" form and reshape it into the creation payload.
pub fn validate_new_pet(form: &PetForm) -> Result<NewPet, ValidationErrors> {
    let id = check_id(form.id.as_deref());
    let name = check_name(form.name.as_deref());
    let category_id = check_category_id(form.category_id.as_deref());
    let status = check_status(form.status.as_deref());
    let mut errors = list_errors(form);

    match (id, name, category_id, status) {
        (Ok(id), Ok(name), Ok(category_id), Ok(status)) if errors.is_empty() => Ok(NewPet {
            id,
            name,
            category: build_category(category_id, form.category_name.as_deref()),
            photo_urls: filter_photo_urls(&form.photo_urls),
            tags: number_tags(&form.tags),
            status,
        }),
        (id, name, category_id, status) => {
            record(&mut errors, "id", id);
            record(&mut errors, "name", name);
            record(&mut errors, "category_id", category_id);
            record(&mut errors, "status", status);
            Err(errors)
        }
    }
}

/// Validate the "edit pet" form. Only `name` and `status` are read.
pub fn validate_pet_update(form: &UpdatePetForm) -> Result<PetUpdate, ValidationErrors> {
    match (
        check_name(form.name.as_deref()),
        check_status(form.status.as_deref()),
    ) {
        (Ok(name), Ok(status)) => Ok(PetUpdate { name, status }),
        (name, status) => {
            let mut errors = ValidationErrors::new();
            record(&mut errors, "name", name);
            record(&mut errors, "status", status);
            Err(errors)
        }
    }
}
