use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use petstore_core::flash::{Flash, ModalState};
use petstore_core::pet::{is_valid_url, PetForm, PetRecord, PetStatus, ValidationErrors};

use crate::{
    handlers::{flash::take_flash, AppError},
    state::AppState,
};

/// Template wrapper that converts Askama templates into HTML responses.
pub struct HtmlTemplate<T>(pub T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "Failed to render template");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to render template: {err}"),
                )
                    .into_response()
            }
        }
    }
}

/// One entry of a status `<select>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusOption {
    pub value: &'static str,
    pub selected: bool,
}

fn status_options(selected: Option<&str>) -> Vec<StatusOption> {
    PetStatus::ALL
        .iter()
        .map(|status| StatusOption {
            value: status.as_str(),
            selected: selected == Some(status.as_str()),
        })
        .collect()
}

/// A stored photo URL. Only http(s) URLs become links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoView {
    pub url: String,
    pub linkable: bool,
}

impl From<&String> for PhotoView {
    fn from(url: &String) -> Self {
        Self {
            url: url.clone(),
            linkable: is_valid_url(url),
        }
    }
}

/// Pet details panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetView {
    pub id: i64,
    pub name: String,
    pub category: Option<String>,
    pub photos: Vec<PhotoView>,
    pub tags: Vec<String>,
    pub status: String,
}

impl From<&PetRecord> for PetView {
    fn from(pet: &PetRecord) -> Self {
        Self {
            id: pet.id,
            name: pet.name.clone(),
            category: pet.category.as_ref().map(|c| c.name.clone()),
            photos: pet.photo_urls.iter().map(PhotoView::from).collect(),
            tags: pet.tags.iter().map(|t| t.name.clone()).collect(),
            status: pet
                .status
                .map(|s| s.as_str().to_string())
                .unwrap_or_default(),
        }
    }
}

/// The add modal, repopulated after a rejected submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddFormView {
    pub id: String,
    pub name: String,
    pub category_id: String,
    pub category_name: String,
    /// Always at least one input.
    pub photo_urls: Vec<String>,
    /// Always at least one input.
    pub tags: Vec<String>,
    pub statuses: Vec<StatusOption>,
    pub id_error: Option<String>,
    pub name_error: Option<String>,
    pub category_id_error: Option<String>,
    pub photo_urls_error: Option<String>,
    pub tags_error: Option<String>,
    pub status_error: Option<String>,
}

fn at_least_one(values: &[String]) -> Vec<String> {
    if values.is_empty() {
        vec![String::new()]
    } else {
        values.to_vec()
    }
}

fn first_error(errors: &ValidationErrors, field: &str) -> Option<String> {
    errors.first(field).map(str::to_string)
}

impl AddFormView {
    fn new(old: Option<&PetForm>, errors: &ValidationErrors) -> Self {
        let blank = PetForm::default();
        let old = old.unwrap_or(&blank);
        let value = |v: &Option<String>| v.clone().unwrap_or_default();

        Self {
            id: value(&old.id),
            name: value(&old.name),
            category_id: value(&old.category_id),
            category_name: value(&old.category_name),
            photo_urls: at_least_one(&old.photo_urls),
            tags: at_least_one(&old.tags),
            statuses: status_options(old.status.as_deref()),
            id_error: first_error(errors, "id"),
            name_error: first_error(errors, "name"),
            category_id_error: first_error(errors, "category_id"),
            photo_urls_error: errors.first_with_prefix("photoUrls").map(str::to_string),
            tags_error: first_error(errors, "tags"),
            status_error: first_error(errors, "status"),
        }
    }
}

/// The edit modal, prefilled from the re-entered values or the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditFormView {
    pub name: String,
    pub statuses: Vec<StatusOption>,
    pub name_error: Option<String>,
    pub status_error: Option<String>,
}

impl EditFormView {
    fn new(pet: &PetRecord, old: Option<&PetForm>, errors: &ValidationErrors) -> Self {
        let (name, status) = match old {
            Some(old) => (old.name.clone().unwrap_or_default(), old.status.clone()),
            None => (
                pet.name.clone(),
                pet.status.map(|s| s.as_str().to_string()),
            ),
        };

        Self {
            name,
            statuses: status_options(status.as_deref()),
            name_error: first_error(errors, "name"),
            status_error: first_error(errors, "status"),
        }
    }
}

/// Index page template: search, details, and the add/edit modals.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    /// `add`, `edit`, or empty when no modal reopens.
    pub modal: &'static str,
    pub success: Option<String>,
    pub error: Option<String>,
    pub searched_pet_id: String,
    pub pet: Option<PetView>,
    pub add: AddFormView,
    pub edit: Option<EditFormView>,
}

impl From<Flash> for IndexTemplate {
    fn from(flash: Flash) -> Self {
        let edit = flash
            .pet
            .as_ref()
            .map(|pet| EditFormView::new(pet, edit_input(&flash), &flash.errors));
        let add = match flash.modal {
            ModalState::ShowAdd => AddFormView::new(flash.old.as_ref(), &flash.errors),
            _ => AddFormView::new(None, &ValidationErrors::new()),
        };

        Self {
            modal: flash.modal.as_tag().unwrap_or_default(),
            success: flash.success_message().map(str::to_string),
            error: flash.error_message().map(str::to_string),
            searched_pet_id: flash
                .searched_pet_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
            pet: flash.pet.as_ref().map(PetView::from),
            add,
            edit,
        }
    }
}

/// Re-entered edit values apply only when the edit modal reopens.
fn edit_input(flash: &Flash) -> Option<&PetForm> {
    match flash.modal {
        ModalState::ShowEdit => flash.old.as_ref(),
        _ => None,
    }
}

/// Handler for the index page (GET /).
///
/// Renders the pending flash, which taking removes from the store.
pub async fn index(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<HtmlTemplate<IndexTemplate>, AppError> {
    let flash = take_flash(&state, &jar).await?;
    Ok(HtmlTemplate(IndexTemplate::from(flash)))
}
