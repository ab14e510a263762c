//! Animal model.

use std::collections::HashSet;

use animal_rescue_core::types::{DbId, RescueDate};
use serde::Serialize;
use sqlx::FromRow;

use super::adoption_request::AdoptionRequest;

/// A row from the `animal` table.
///
/// `adoption_requests` is not a column; it stays empty when the row is
/// loaded and is filled in by the aggregation service.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Animal {
    pub id: DbId,
    pub name: String,
    pub rescue_date: RescueDate,
    pub avatar_url: String,
    pub description: String,
    #[sqlx(skip)]
    pub adoption_requests: HashSet<AdoptionRequest>,
}
