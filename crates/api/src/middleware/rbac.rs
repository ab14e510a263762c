//! Authority-based access control extractors.
//!
//! Wraps [`AuthUser`] and rejects requests whose token lacks the required
//! authority, so handlers enforce it at the type level.

use animal_rescue_core::authorities::AUTHORITY_ADOPTION_REQUEST;
use animal_rescue_core::error::CoreError;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `adoption.request` authority. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn adopt(RequireAdoptionRequester(user): RequireAdoptionRequester) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdoptionRequester(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdoptionRequester {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !user.identity.has_authority(AUTHORITY_ADOPTION_REQUEST) {
            return Err(AppError::Core(CoreError::Forbidden(format!(
                "Authority '{AUTHORITY_ADOPTION_REQUEST}' required"
            ))));
        }
        Ok(RequireAdoptionRequester(user))
    }
}
