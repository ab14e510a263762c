//! Route definitions for animals and their adoption requests.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{adoption_requests, animals};
use crate::state::AppState;

/// Routes mounted at `/animals`.
///
/// ```text
/// GET    /                                    -> list_animals
/// POST   /{animal_id}/adoption-requests       -> submit
/// PUT    /{animal_id}/adoption-requests/{id}  -> edit
/// DELETE /{animal_id}/adoption-requests/{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(animals::list_animals))
        .route(
            "/{animal_id}/adoption-requests",
            post(adoption_requests::submit),
        )
        .route(
            "/{animal_id}/adoption-requests/{id}",
            put(adoption_requests::edit).delete(adoption_requests::delete),
        )
}
