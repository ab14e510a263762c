//! Store traits consumed by the services crate.
//!
//! The traits are object-safe (`async_trait`, boxed streams) so services can
//! hold `Arc<dyn AnimalStore>` and be handed either the Postgres-backed
//! [`PgStore`] or the [`InMemoryStore`] used by tests.
//!
//! Errors are `sqlx::Error` in both implementations and are passed through
//! unchanged by the services.

pub mod memory;
pub mod postgres;

use animal_rescue_core::types::DbId;
use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::models::adoption_request::{AdoptionRequest, NewAdoptionRequest};
use crate::models::animal::Animal;

pub use memory::InMemoryStore;
pub use postgres::PgStore;

/// Result type shared by every store operation.
pub type StoreResult<T> = Result<T, sqlx::Error>;

/// Read access to animals.
#[async_trait]
pub trait AnimalStore: Send + Sync {
    /// Lazily stream every animal in the store's natural order.
    fn find_all(&self) -> BoxStream<'_, StoreResult<Animal>>;

    /// Find a single animal. `adoption_requests` is left empty.
    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<Animal>>;

    /// Cheap reachability probe for health checks.
    async fn ping(&self) -> StoreResult<()>;
}

/// Read and write access to adoption requests.
#[async_trait]
pub trait AdoptionRequestStore: Send + Sync {
    /// Lazily stream the requests attached to one animal.
    fn find_by_animal(&self, animal_id: DbId) -> BoxStream<'_, StoreResult<AdoptionRequest>>;

    /// Load the requests attached to any of the given animals at once.
    async fn find_by_animals(&self, animal_ids: &[DbId]) -> StoreResult<Vec<AdoptionRequest>>;

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<AdoptionRequest>>;

    /// Insert a new request; the store assigns the id.
    async fn create(&self, request: NewAdoptionRequest) -> StoreResult<AdoptionRequest>;

    /// Persist `email` and `notes` of an existing request.
    ///
    /// Returns `None` when the row no longer exists.
    async fn save(&self, request: &AdoptionRequest) -> StoreResult<Option<AdoptionRequest>>;

    /// Returns `true` if a row was removed.
    async fn delete_by_id(&self, id: DbId) -> StoreResult<bool>;
}
