//! Repository for the `adoption_request` table.
//!
//! Provides lookups by id and by owning animal, plus create, update and
//! delete. Ownership is not checked here; that is the guard's job.

use animal_rescue_core::types::DbId;
use futures::stream::BoxStream;
use sqlx::PgPool;

use crate::models::adoption_request::{AdoptionRequest, NewAdoptionRequest};

/// Column list for `adoption_request` queries.
const COLUMNS: &str = "id, adopter_name, email, notes, animal";

/// Provides CRUD operations for adoption requests.
pub struct AdoptionRequestRepo;

impl AdoptionRequestRepo {
    /// Stream the adoption requests attached to one animal.
    pub fn stream_by_animal(
        pool: &PgPool,
        animal_id: DbId,
    ) -> BoxStream<'_, Result<AdoptionRequest, sqlx::Error>> {
        sqlx::query_as::<_, AdoptionRequest>(
            "SELECT id, adopter_name, email, notes, animal \
             FROM adoption_request \
             WHERE animal = $1",
        )
        .bind(animal_id)
        .fetch(pool)
    }

    /// Load the adoption requests of many animals in one round-trip.
    pub async fn list_by_animals(
        pool: &PgPool,
        animal_ids: &[DbId],
    ) -> Result<Vec<AdoptionRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM adoption_request WHERE animal = ANY($1)");
        sqlx::query_as::<_, AdoptionRequest>(&query)
            .bind(animal_ids)
            .fetch_all(pool)
            .await
    }

    /// Find an adoption request by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<AdoptionRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM adoption_request WHERE id = $1");
        sqlx::query_as::<_, AdoptionRequest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new adoption request, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &NewAdoptionRequest,
    ) -> Result<AdoptionRequest, sqlx::Error> {
        let query = format!(
            "INSERT INTO adoption_request (adopter_name, email, notes, animal) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AdoptionRequest>(&query)
            .bind(&input.adopter_name)
            .bind(&input.email)
            .bind(&input.notes)
            .bind(input.animal)
            .fetch_one(pool)
            .await
    }

    /// Update the mutable fields (`email`, `notes`) of an adoption request.
    ///
    /// `adopter_name` and `animal` are never written. Returns `None` if no
    /// row with the given ID exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        email: &str,
        notes: &str,
    ) -> Result<Option<AdoptionRequest>, sqlx::Error> {
        let query = format!(
            "UPDATE adoption_request SET email = $2, notes = $3 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AdoptionRequest>(&query)
            .bind(id)
            .bind(email)
            .bind(notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete an adoption request. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM adoption_request WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
