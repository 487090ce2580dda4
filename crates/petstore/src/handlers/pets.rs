//! Write handlers: search, create, update and delete.
//!
//! Each handler turns the request into exactly one flash and redirects to
//! `/`. Upstream failures never escape as HTTP errors. Bodies are read as
//! ordered pairs, so repeated keys reach the form parsers instead of being
//! rejected by the extractor.

use axum::{
    extract::{Path, State},
    response::Redirect,
    Form,
};
use axum_extra::extract::cookie::CookieJar;
use petstore_core::flash::{Flash, OperationOutcome};
use petstore_core::pet::{
    parse_pet_id, validate_new_pet, validate_pet_update, PetForm, SearchForm, UpdatePetForm,
};
use petstore_core::upstream::UpstreamError;

use crate::{
    handlers::{flash::redirect_with_flash, AppError},
    state::AppState,
};

type Redirected = Result<(CookieJar, Redirect), AppError>;

type Pairs = Form<Vec<(String, String)>>;

/// Failure for a path segment that is not a pet id.
fn invalid_id() -> Flash {
    OperationOutcome::Failure {
        message: UpstreamError::InvalidId.to_string(),
        pet: None,
        searched_pet_id: None,
    }
    .into()
}

/// Handler for searching a pet by id (POST /pet/search).
pub async fn search_pet(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(pairs): Pairs,
) -> Redirected {
    let form = SearchForm::from_pairs(pairs);
    let Some(id) = form.id.as_deref().and_then(parse_pet_id) else {
        tracing::debug!(input = ?form.id, "Search rejected, not a pet id");
        let flash = Flash::search_failed(None, &UpstreamError::InvalidId);
        return redirect_with_flash(&state, jar, flash).await;
    };

    let flash = match state.api.get_pet(id).await {
        Ok(pet) => {
            tracing::debug!(pet_id = id, "Pet found");
            Flash::search_succeeded(id, pet)
        }
        Err(e) => {
            tracing::warn!(pet_id = id, error = %e, "Pet search failed");
            Flash::search_failed(Some(id), &e)
        }
    };

    redirect_with_flash(&state, jar, flash).await
}

/// Handler for creating a pet (POST /pet).
pub async fn create_pet(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(pairs): Pairs,
) -> Redirected {
    let form = PetForm::from_pairs(pairs);

    let new_pet = match validate_new_pet(&form) {
        Ok(new_pet) => new_pet,
        Err(errors) => {
            tracing::debug!(fields = ?errors.fields().collect::<Vec<_>>(), "Create form rejected");
            let flash = Flash::create_rejected(errors, form);
            return redirect_with_flash(&state, jar, flash).await;
        }
    };

    let flash = match state.api.create_pet(&new_pet).await {
        Ok(pet) => {
            tracing::info!(pet_id = pet.id, "Pet created");
            Flash::create_succeeded(pet)
        }
        Err(e) => {
            tracing::warn!(pet_id = new_pet.id, error = %e, "Pet creation failed");
            Flash::create_failed(&e)
        }
    };

    redirect_with_flash(&state, jar, flash).await
}

/// Handler for updating a pet (POST /pet/{id}).
///
/// A body carrying `_method=DELETE` is routed to the delete flow.
pub async fn update_pet(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(raw_id): Path<String>,
    Form(pairs): Pairs,
) -> Redirected {
    let form = UpdatePetForm::from_pairs(pairs);
    if form.is_delete() {
        let flash = delete_flow(&state, &raw_id).await;
        return redirect_with_flash(&state, jar, flash).await;
    }

    let Some(id) = parse_pet_id(&raw_id) else {
        return redirect_with_flash(&state, jar, invalid_id()).await;
    };

    let flash = match validate_pet_update(&form) {
        Err(errors) => {
            tracing::debug!(pet_id = id, "Edit form rejected");
            let context = state.api.get_pet(id).await;
            Flash::update_rejected(id, errors, form.into(), context)
        }
        Ok(update) => match state.api.update_pet(id, &update).await {
            Ok(pet) => {
                tracing::info!(pet_id = id, "Pet updated");
                Flash::update_succeeded(id, pet)
            }
            Err(e) => {
                tracing::warn!(pet_id = id, error = %e, "Pet update failed");
                let context = state.api.get_pet(id).await;
                if let Err(lookup) = &context {
                    tracing::debug!(pet_id = id, error = %lookup, "Context lookup failed too");
                }
                Flash::update_failed(id, &e, form.into(), context)
            }
        },
    };

    redirect_with_flash(&state, jar, flash).await
}

/// Handler for deleting a pet (DELETE /pet/{id}).
pub async fn delete_pet(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(raw_id): Path<String>,
) -> Redirected {
    let flash = delete_flow(&state, &raw_id).await;
    redirect_with_flash(&state, jar, flash).await
}

async fn delete_flow(state: &AppState, raw_id: &str) -> Flash {
    let Some(id) = parse_pet_id(raw_id) else {
        return invalid_id();
    };

    match state.api.delete_pet(id).await {
        Ok(()) => {
            tracing::info!(pet_id = id, "Pet deleted");
            Flash::delete_succeeded()
        }
        Err(e) => {
            tracing::warn!(pet_id = id, error = %e, "Pet deletion failed");
            Flash::delete_failed(&e)
        }
    }
}
