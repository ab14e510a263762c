#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Arc;

use animal_rescue_api::auth::jwt::{generate_access_token, JwtConfig};
use animal_rescue_api::config::ServerConfig;
use animal_rescue_api::router::build_app_router;
use animal_rescue_api::state::AppState;
use animal_rescue_db::models::adoption_request::AdoptionRequest;
use animal_rescue_db::models::animal::Animal;
use animal_rescue_db::store::InMemoryStore;
use animal_rescue_services::AggregationStrategy;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use chrono::NaiveDate;
use http_body_util::BodyExt;
use tower::ServiceExt;

pub const ADOPTION_REQUEST: &str = "adoption.request";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        aggregation_strategy: AggregationStrategy::PerAnimal,
        aggregation_concurrency: 4,
        db_max_connections: 20,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

fn animal(id: i64, name: &str) -> Animal {
    Animal {
        id,
        name: name.to_string(),
        rescue_date: NaiveDate::from_ymd_opt(2019, 4, 12).unwrap(),
        avatar_url: format!("/images/{}.jpg", name.to_lowercase()),
        description: format!("{name} is waiting for a home."),
        adoption_requests: HashSet::new(),
    }
}

fn request(id: i64, animal: i64, adopter: &str) -> AdoptionRequest {
    AdoptionRequest {
        id,
        adopter_name: adopter.to_string(),
        email: format!("{adopter}@example.com"),
        notes: String::new(),
        animal,
    }
}

/// Same shape as the seed migration: Chocobo (1) with requests 1-3 from
/// other users, Tiger (2) with none, Toby (3) with request 4.
pub fn seeded_store() -> Arc<InMemoryStore> {
    let store = InMemoryStore::new();
    store.insert_animal(animal(1, "Chocobo"));
    store.insert_animal(animal(2, "Tiger"));
    store.insert_animal(animal(3, "Toby"));
    store.insert_adoption_request(request(1, 1, "alice"));
    store.insert_adoption_request(request(2, 1, "bob"));
    store.insert_adoption_request(request(3, 1, "carol"));
    store.insert_adoption_request(request(4, 3, "dave"));
    Arc::new(store)
}

/// Build the full application router over the given in-memory store.
pub fn build_test_app_with(store: Arc<InMemoryStore>, config: ServerConfig) -> Router {
    let state = AppState::new(config.clone(), store.clone(), store);
    build_app_router(state, &config)
}

pub fn build_test_app(store: Arc<InMemoryStore>) -> Router {
    build_test_app_with(store, test_config())
}

/// Sign a token for `username` with the test secret.
pub fn token_for(username: &str, authorities: &[&str]) -> String {
    let authorities: Vec<String> = authorities.iter().map(|a| a.to_string()).collect();
    generate_access_token(username, &authorities, &test_config().jwt).unwrap()
}

pub fn requester_token(username: &str) -> String {
    token_for(username, &[ADOPTION_REQUEST])
}

/// Send a request through the router, optionally authenticated and with a JSON body.
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header("Content-Type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, token: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, token: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn delete(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
