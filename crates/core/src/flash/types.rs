use serde::{Deserialize, Serialize};

use crate::pet::{PetForm, PetRecord, ValidationErrors};
use crate::upstream::UpstreamError;

pub const PET_CREATED: &str = "Pet created successfully!";
pub const PET_UPDATED: &str = "Pet updated successfully!";
pub const PET_DELETED: &str = "Pet deleted successfully!";

/// Opaque identifier tying a browser to its pending flash.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: String) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which modal the next render reopens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Idle,
    ShowAdd,
    ShowEdit,
}

impl ModalState {
    /// Session tag for the modal, `None` when nothing reopens.
    pub fn as_tag(&self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::ShowAdd => Some("add"),
            Self::ShowEdit => Some("edit"),
        }
    }
}

/// Message shown at the top of the next render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

/// Result of one user operation, before it is turned into a flash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationOutcome {
    Success {
        message: Option<String>,
        pet: Option<PetRecord>,
        searched_pet_id: Option<i64>,
    },
    Failure {
        message: String,
        pet: Option<PetRecord>,
        searched_pet_id: Option<i64>,
    },
}

/// State handed from a write request to exactly one following render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flash {
    pub modal: ModalState,
    pub notice: Option<Notice>,
    pub pet: Option<PetRecord>,
    pub searched_pet_id: Option<i64>,
    pub errors: ValidationErrors,
    /// Values the user typed, for repopulating the form.
    pub old: Option<PetForm>,
}

impl From<OperationOutcome> for Flash {
    fn from(outcome: OperationOutcome) -> Self {
        match outcome {
            OperationOutcome::Success {
                message,
                pet,
                searched_pet_id,
            } => Self {
                notice: message.map(Notice::Success),
                pet,
                searched_pet_id,
                ..Default::default()
            },
            OperationOutcome::Failure {
                message,
                pet,
                searched_pet_id,
            } => Self {
                notice: Some(Notice::Error(message)),
                pet,
                searched_pet_id,
                ..Default::default()
            },
        }
    }
}

impl Flash {
    pub fn success_message(&self) -> Option<&str> {
        match &self.notice {
            Some(Notice::Success(message)) => Some(message),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.notice {
            Some(Notice::Error(message)) => Some(message),
            _ => None,
        }
    }

    /// Search by id found the pet.
    pub fn search_succeeded(id: i64, pet: PetRecord) -> Self {
        OperationOutcome::Success {
            message: None,
            pet: Some(pet),
            searched_pet_id: Some(id),
        }
        .into()
    }

    /// Search by id failed; `id` is `None` when the input was not an id at all.
    pub fn search_failed(id: Option<i64>, error: &UpstreamError) -> Self {
        OperationOutcome::Failure {
            message: error.to_string(),
            pet: None,
            searched_pet_id: id,
        }
        .into()
    }

    /// The add form did not validate: reopen it with the errors and input.
    pub fn create_rejected(errors: ValidationErrors, input: PetForm) -> Self {
        Self {
            modal: ModalState::ShowAdd,
            errors,
            old: Some(input),
            ..Default::default()
        }
    }

    pub fn create_succeeded(pet: PetRecord) -> Self {
        let id = pet.id;
        OperationOutcome::Success {
            message: Some(PET_CREATED.to_string()),
            pet: Some(pet),
            searched_pet_id: Some(id),
        }
        .into()
    }

    pub fn create_failed(error: &UpstreamError) -> Self {
        OperationOutcome::Failure {
            message: error.to_string(),
            pet: None,
            searched_pet_id: None,
        }
        .into()
    }

    /// The edit form did not validate. `context` is the re-fetched record:
    /// when it is available the edit modal reopens, otherwise only the
    /// lookup error and the id survive.
    pub fn update_rejected(
        id: i64,
        errors: ValidationErrors,
        input: PetForm,
        context: Result<PetRecord, UpstreamError>,
    ) -> Self {
        match context {
            Ok(pet) => Self {
                modal: ModalState::ShowEdit,
                pet: Some(pet),
                searched_pet_id: Some(id),
                errors,
                old: Some(input),
                ..Default::default()
            },
            Err(lookup) => OperationOutcome::Failure {
                message: lookup.to_string(),
                pet: None,
                searched_pet_id: Some(id),
            }
            .into(),
        }
    }

    /// The upstream update call failed. The update's own message is shown
    /// whether or not the context lookup worked.
    pub fn update_failed(
        id: i64,
        error: &UpstreamError,
        input: PetForm,
        context: Result<PetRecord, UpstreamError>,
    ) -> Self {
        match context {
            Ok(pet) => Self {
                modal: ModalState::ShowEdit,
                notice: Some(Notice::Error(error.to_string())),
                pet: Some(pet),
                searched_pet_id: Some(id),
                old: Some(input),
                ..Default::default()
            },
            Err(_) => OperationOutcome::Failure {
                message: error.to_string(),
                pet: None,
                searched_pet_id: Some(id),
            }
            .into(),
        }
    }

    pub fn update_succeeded(id: i64, pet: PetRecord) -> Self {
        OperationOutcome::Success {
            message: Some(PET_UPDATED.to_string()),
            pet: Some(pet),
            searched_pet_id: Some(id),
        }
        .into()
    }

    pub fn delete_succeeded() -> Self {
        OperationOutcome::Success {
            message: Some(PET_DELETED.to_string()),
            pet: None,
            searched_pet_id: None,
        }
        .into()
    }

    pub fn delete_failed(error: &UpstreamError) -> Self {
        OperationOutcome::Failure {
            message: error.to_string(),
            pet: None,
            searched_pet_id: None,
        }
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pet::PetStatus;

    fn rex() -> PetRecord {
        PetRecord::new(5, "Rex", PetStatus::Available)
    }

    fn name_required() -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.add("name", "The name field is required.");
        errors
    }

    #[test]
    fn test_modal_tags() {
        assert_eq!(ModalState::Idle.as_tag(), None);
        assert_eq!(ModalState::ShowAdd.as_tag(), Some("add"));
        assert_eq!(ModalState::ShowEdit.as_tag(), Some("edit"));
    }

    #[test]
    fn test_search_succeeded() {
        let flash = Flash::search_succeeded(5, rex());
        assert_eq!(flash.modal, ModalState::Idle);
        assert_eq!(flash.pet, Some(rex()));
        assert_eq!(flash.searched_pet_id, Some(5));
        assert_eq!(flash.notice, None);
    }

    #[test]
    fn test_search_failed_keeps_id() {
        let flash = Flash::search_failed(Some(9), &UpstreamError::NotFound);
        assert_eq!(flash.modal, ModalState::Idle);
        assert_eq!(flash.error_message(), Some("Pet not found"));
        assert_eq!(flash.searched_pet_id, Some(9));
        assert!(flash.pet.is_none());
    }

    #[test]
    fn test_create_rejected_reopens_add_modal() {
        let input = PetForm {
            id: Some("3".to_string()),
            status: Some("invalid_value".to_string()),
            ..Default::default()
        };
        let flash = Flash::create_rejected(name_required(), input.clone());
        assert_eq!(flash.modal, ModalState::ShowAdd);
        assert!(flash.errors.has("name"));
        assert_eq!(flash.old, Some(input));
        assert!(flash.notice.is_none());
    }

    #[test]
    fn test_create_succeeded_searches_new_id() {
        let flash = Flash::create_succeeded(rex());
        assert_eq!(flash.modal, ModalState::Idle);
        assert_eq!(flash.success_message(), Some(PET_CREATED));
        assert_eq!(flash.searched_pet_id, Some(5));
    }

    #[test]
    fn test_create_failed_carries_message_only() {
        let flash = Flash::create_failed(&UpstreamError::InvalidInput);
        assert_eq!(flash.error_message(), Some("Invalid input"));
        assert!(flash.pet.is_none());
        assert!(flash.searched_pet_id.is_none());
    }

    #[test]
    fn test_update_rejected_with_context_reopens_edit() {
        let flash = Flash::update_rejected(5, name_required(), PetForm::default(), Ok(rex()));
        assert_eq!(flash.modal, ModalState::ShowEdit);
        assert_eq!(flash.pet, Some(rex()));
        assert!(flash.errors.has("name"));
        assert!(flash.old.is_some());
    }

    #[test]
    fn test_update_rejected_without_context_is_idle() {
        let flash = Flash::update_rejected(
            5,
            name_required(),
            PetForm::default(),
            Err(UpstreamError::NotFound),
        );
        assert_eq!(flash.modal, ModalState::Idle);
        assert_eq!(flash.error_message(), Some("Pet not found"));
        assert_eq!(flash.searched_pet_id, Some(5));
        assert!(flash.errors.is_empty());
        assert!(flash.old.is_none());
    }

    #[test]
    fn test_update_failed_shows_primary_message() {
        let error = UpstreamError::failure(crate::upstream::Operation::Update, 500);

        let flash = Flash::update_failed(7, &error, PetForm::default(), Ok(rex()));
        assert_eq!(flash.modal, ModalState::ShowEdit);
        assert_eq!(flash.error_message(), Some("Failed to update pet"));

        let flash = Flash::update_failed(7, &error, PetForm::default(), Err(UpstreamError::NotFound));
        assert_eq!(flash.modal, ModalState::Idle);
        assert_eq!(flash.error_message(), Some("Failed to update pet"));
        assert_eq!(flash.searched_pet_id, Some(7));
        assert!(flash.pet.is_none());
    }

    #[test]
    fn test_update_succeeded() {
        let flash = Flash::update_succeeded(5, rex());
        assert_eq!(flash.success_message(), Some(PET_UPDATED));
        assert_eq!(flash.pet, Some(rex()));
        assert_eq!(flash.searched_pet_id, Some(5));
    }

    #[test]
    fn test_delete_outcomes_carry_no_record() {
        let flash = Flash::delete_succeeded();
        assert_eq!(flash.success_message(), Some(PET_DELETED));
        assert!(flash.pet.is_none());

        let flash = Flash::delete_failed(&UpstreamError::NotFound);
        assert_eq!(flash.error_message(), Some("Pet not found"));
        assert!(flash.pet.is_none());
    }
}
