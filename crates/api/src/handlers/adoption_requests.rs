//! Handlers for submitting, editing and withdrawing adoption requests.
//!
//! All endpoints require the `adoption.request` authority. A path that
//! names a missing animal or request is answered with 400, not 404: the
//! frontend treats both as a rejected submission.

use animal_rescue_core::error::CoreError;
use animal_rescue_core::types::DbId;
use animal_rescue_db::models::adoption_request::AdoptionRequestForm;
use animal_rescue_services::ServiceError;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdoptionRequester;
use crate::state::AppState;

/// POST /animals/{animal_id}/adoption-requests
pub async fn submit(
    RequireAdoptionRequester(user): RequireAdoptionRequester,
    State(state): State<AppState>,
    Path(animal_id): Path<DbId>,
    Json(form): Json<AdoptionRequestForm>,
) -> AppResult<impl IntoResponse> {
    let created = state
        .adoption_requests
        .submit(&user.identity, animal_id, form)
        .await
        .map_err(reject_missing)?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /animals/{animal_id}/adoption-requests/{id}
///
/// Only `email` and `notes` can change, and only for the original requester.
pub async fn edit(
    RequireAdoptionRequester(user): RequireAdoptionRequester,
    State(state): State<AppState>,
    Path((animal_id, request_id)): Path<(DbId, DbId)>,
    Json(form): Json<AdoptionRequestForm>,
) -> AppResult<impl IntoResponse> {
    let updated = state
        .adoption_requests
        .edit(&user.identity, animal_id, request_id, form)
        .await
        .map_err(reject_missing)?;

    Ok(Json(updated))
}

/// DELETE /animals/{animal_id}/adoption-requests/{id}
pub async fn delete(
    RequireAdoptionRequester(user): RequireAdoptionRequester,
    State(state): State<AppState>,
    Path((animal_id, request_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    state
        .adoption_requests
        .delete(&user.identity, animal_id, request_id)
        .await
        .map_err(reject_missing)?;

    Ok(StatusCode::OK)
}

/// Answer a missing path entity with 400; everything else maps as usual.
fn reject_missing(err: ServiceError) -> AppError {
    match err {
        ServiceError::Core(CoreError::NotFound { entity, id }) => {
            AppError::BadRequest(format!("{entity} with id {id} not found"))
        }
        other => other.into(),
    }
}
