mod error;
mod form;
mod requests;
mod types;
mod validation;

pub use error::{PetStatusError, ValidationErrors};
pub use form::{PetForm, SearchForm, UpdatePetForm, MAX_LIST_ENTRIES};
pub use requests::{NewPet, PetUpdate};
pub use types::{Category, PetRecord, PetStatus, Tag};
pub use validation::{
    build_category, filter_photo_urls, is_valid_url, number_tags, parse_pet_id, validate_new_pet,
    validate_pet_update,
};
