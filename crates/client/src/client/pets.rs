//! Pet API operations.

use async_trait::async_trait;
use petstore_core::pet::{NewPet, PetRecord, PetUpdate};
use petstore_core::upstream::{Operation, PetApi, Result};

use super::PetstoreClient;

impl PetstoreClient {
    /// Get pet by ID.
    pub async fn get_pet(&self, id: i64) -> Result<PetRecord> {
        let request = self.client.get(self.url(&format!("/pet/{id}")));
        let response = self.send(Operation::Fetch, request).await?;
        self.decode(Operation::Fetch, response).await
    }

    /// Create a new pet from a validated payload.
    pub async fn create_pet(&self, pet: &NewPet) -> Result<PetRecord> {
        let request = self.client.post(self.url("/pet")).json(pet);
        let response = self.send(Operation::Create, request).await?;
        self.decode(Operation::Create, response).await
    }

    /// Update a pet's name and status, then read it back.
    ///
    /// The update response body carries no record, so a successful update is
    /// followed by a fetch; a failing fetch fails the whole call.
    pub async fn update_pet(&self, id: i64, update: &PetUpdate) -> Result<PetRecord> {
        let request = self
            .client
            .post(self.url(&format!("/pet/{id}")))
            .form(update);
        self.send(Operation::Update, request).await?;

        tracing::debug!(pet_id = id, "Pet updated, reading it back");
        self.get_pet(id).await
    }

    /// Delete pet by ID.
    pub async fn delete_pet(&self, id: i64) -> Result<()> {
        let request = self.client.delete(self.url(&format!("/pet/{id}")));
        self.send(Operation::Delete, request).await?;
        Ok(())
    }
}

#[async_trait]
impl PetApi for PetstoreClient {
    async fn get_pet(&self, id: i64) -> Result<PetRecord> {
        PetstoreClient::get_pet(self, id).await
    }

    async fn create_pet(&self, pet: &NewPet) -> Result<PetRecord> {
        PetstoreClient::create_pet(self, pet).await
    }

    async fn update_pet(&self, id: i64, update: &PetUpdate) -> Result<PetRecord> {
        PetstoreClient::update_pet(self, id, update).await
    }

    async fn delete_pet(&self, id: i64) -> Result<()> {
        PetstoreClient::delete_pet(self, id).await
    }
}
