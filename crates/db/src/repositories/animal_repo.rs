//! Repository for the `animal` table.

use animal_rescue_core::types::DbId;
use futures::stream::BoxStream;
use sqlx::PgPool;

use crate::models::animal::Animal;

/// Provides read operations for animals. Animals are seeded by migrations.
pub struct AnimalRepo;

impl AnimalRepo {
    /// Stream every animal in ascending id order.
    ///
    /// Rows are decoded as they arrive; nothing is buffered here.
    pub fn stream_all(pool: &PgPool) -> BoxStream<'_, Result<Animal, sqlx::Error>> {
        sqlx::query_as::<_, Animal>(
            "SELECT id, name, rescue_date, avatar_url, description \
             FROM animal \
             ORDER BY id",
        )
        .fetch(pool)
    }

    /// Find an animal by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Animal>, sqlx::Error> {
        sqlx::query_as::<_, Animal>(
            "SELECT id, name, rescue_date, avatar_url, description \
             FROM animal \
             WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }
}
