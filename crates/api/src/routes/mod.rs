pub mod animals;
pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the API route tree, mounted at the root.
///
/// Route hierarchy:
///
/// ```text
/// /whoami                                          caller identity (auth required)
///
/// /animals                                         list with adoption requests (public)
/// /animals/{animal_id}/adoption-requests           submit (adoption.request)
/// /animals/{animal_id}/adoption-requests/{id}      edit, delete (original requester)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/whoami", get(handlers::whoami::whoami))
        .nest("/animals", animals::router())
}
