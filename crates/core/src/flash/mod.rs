mod error;
mod functions;
mod traits;
mod types;

pub use error::FlashError;
pub use functions::{generate_session_id, is_flash_expired};
pub use traits::{FlashRepository, Result};
pub use types::{
    Flash, ModalState, Notice, OperationOutcome, SessionId, PET_CREATED, PET_DELETED, PET_UPDATED,
};
