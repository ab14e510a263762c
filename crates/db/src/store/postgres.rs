use animal_rescue_core::types::DbId;
use async_trait::async_trait;
use futures::stream::BoxStream;

use super::{AdoptionRequestStore, AnimalStore, StoreResult};
use crate::models::adoption_request::{AdoptionRequest, NewAdoptionRequest};
use crate::models::animal::Animal;
use crate::repositories::{AdoptionRequestRepo, AnimalRepo};
use crate::DbPool;

/// Postgres-backed store delegating to the repositories.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl AnimalStore for PgStore {
    fn find_all(&self) -> BoxStream<'_, StoreResult<Animal>> {
        AnimalRepo::stream_all(&self.pool)
    }

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<Animal>> {
        AnimalRepo::find_by_id(&self.pool, id).await
    }

    async fn ping(&self) -> StoreResult<()> {
        crate::health_check(&self.pool).await
    }
}

#[async_trait]
impl AdoptionRequestStore for PgStore {
    fn find_by_animal(&self, animal_id: DbId) -> BoxStream<'_, StoreResult<AdoptionRequest>> {
        AdoptionRequestRepo::stream_by_animal(&self.pool, animal_id)
    }

    async fn find_by_animals(&self, animal_ids: &[DbId]) -> StoreResult<Vec<AdoptionRequest>> {
        if animal_ids.is_empty() {
            return Ok(Vec::new());
        }
        tracing::debug!(animals = animal_ids.len(), "Batch-loading adoption requests");
        AdoptionRequestRepo::list_by_animals(&self.pool, animal_ids).await
    }

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<AdoptionRequest>> {
        AdoptionRequestRepo::find_by_id(&self.pool, id).await
    }

    async fn create(&self, request: NewAdoptionRequest) -> StoreResult<AdoptionRequest> {
        AdoptionRequestRepo::create(&self.pool, &request).await
    }

    async fn save(&self, request: &AdoptionRequest) -> StoreResult<Option<AdoptionRequest>> {
        AdoptionRequestRepo::update(&self.pool, request.id, &request.email, &request.notes).await
    }

    async fn delete_by_id(&self, id: DbId) -> StoreResult<bool> {
        AdoptionRequestRepo::delete(&self.pool, id).await
    }
}
