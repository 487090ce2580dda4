mod error;
mod http_mapping;
mod traits;
mod types;

pub use error::{Result, UpstreamError};
pub use http_mapping::status_to_error;
pub use traits::PetApi;
pub use types::Operation;
