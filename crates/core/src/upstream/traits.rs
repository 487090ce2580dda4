use async_trait::async_trait;

use crate::pet::{NewPet, PetRecord, PetUpdate};

use super::Result;

/// The upstream pet API, one call per logical operation.
///
/// Implementations never retry and report every failure as an
/// [`UpstreamError`](super::UpstreamError) already carrying its user-facing
/// message.
#[async_trait]
pub trait PetApi: Send + Sync {
    /// Fetch a pet by id.
    async fn get_pet(&self, id: i64) -> Result<PetRecord>;

    /// Create a pet and return the upstream's representation of it.
    async fn create_pet(&self, pet: &NewPet) -> Result<PetRecord>;

    /// Update a pet's name and status, returning the record as re-read after
    /// the write.
    async fn update_pet(&self, id: i64, update: &PetUpdate) -> Result<PetRecord>;

    /// Delete a pet by id.
    async fn delete_pet(&self, id: i64) -> Result<()>;
}
