use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlashError {
    #[error("storage error: {0}")]
    Storage(String),
}
