use axum::Json;
use serde::Serialize;

use crate::middleware::auth::AuthUser;

#[derive(Debug, Serialize)]
pub struct WhoAmIResponse {
    pub username: String,
    pub authorities: Vec<String>,
}

/// GET /whoami -- the caller's username and authorities.
pub async fn whoami(user: AuthUser) -> Json<WhoAmIResponse> {
    Json(WhoAmIResponse {
        username: user.identity.name,
        authorities: user.identity.authorities,
    })
}
