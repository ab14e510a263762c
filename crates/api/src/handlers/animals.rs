//! Handlers for the public animal listing.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /animals
///
/// All animals with their adoption requests attached, in store order.
/// The body is a bare JSON array, which is what the frontend expects.
pub async fn list_animals(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let animals = state.aggregator.collect_all().await?;

    tracing::debug!(count = animals.len(), "Listed animals");

    Ok(Json(animals))
}
