//! Adoption request model and DTOs.

use std::hash::{Hash, Hasher};

use animal_rescue_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity struct (database row)
// ---------------------------------------------------------------------------

/// A row from the `adoption_request` table.
///
/// Equality and hashing use `id` only, so a set of requests never holds
/// two entries for the same row.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdoptionRequest {
    pub id: DbId,
    pub adopter_name: String,
    pub email: String,
    pub notes: String,
    pub animal: DbId,
}

impl PartialEq for AdoptionRequest {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for AdoptionRequest {}

impl Hash for AdoptionRequest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// An adoption request that has been authorized but not yet stored.
///
/// `adopter_name` comes from the authenticated identity, never the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAdoptionRequest {
    pub adopter_name: String,
    pub email: String,
    pub notes: String,
    pub animal: DbId,
}

/// Client payload for submitting or editing an adoption request.
///
/// Unknown fields (including any `adopterName`) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct AdoptionRequestForm {
    pub email: String,
    #[serde(default)]
    pub notes: String,
}
