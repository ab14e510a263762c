//! HTTP-level integration tests for `GET /animals`.

mod common;

use animal_rescue_services::AggregationStrategy;
use axum::http::StatusCode;
use common::{body_json, build_test_app, build_test_app_with, get, seeded_store, test_config};

fn request_ids(animal: &serde_json::Value) -> Vec<i64> {
    let mut ids: Vec<i64> = animal["adoptionRequests"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_i64().unwrap())
        .collect();
    ids.sort_unstable();
    ids
}

// ---------------------------------------------------------------------------
// Test: GET /animals is public and keeps store order
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_animals_is_public_and_ordered() {
    let app = build_test_app(seeded_store());
    let response = get(app, "/animals").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let animals = json.as_array().expect("bare JSON array");
    assert_eq!(animals.len(), 3);
    assert_eq!(animals[0]["name"], "Chocobo");
    assert_eq!(animals[1]["name"], "Tiger");
    assert_eq!(animals[2]["name"], "Toby");
}

// ---------------------------------------------------------------------------
// Test: each animal carries exactly its own adoption requests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_animals_attaches_adoption_requests() {
    let app = build_test_app(seeded_store());
    let json = body_json(get(app, "/animals").await).await;

    assert_eq!(request_ids(&json[0]), [1, 2, 3]);
    assert!(request_ids(&json[1]).is_empty());
    assert_eq!(request_ids(&json[2]), [4]);
}

// ---------------------------------------------------------------------------
// Test: wire format uses camelCase
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_animals_uses_camel_case_fields() {
    let app = build_test_app(seeded_store());
    let json = body_json(get(app, "/animals").await).await;
    let chocobo = &json[0];

    assert_eq!(chocobo["id"], 1);
    assert_eq!(chocobo["rescueDate"], "2019-04-12");
    assert_eq!(chocobo["avatarUrl"], "/images/chocobo.jpg");
    assert!(chocobo["description"].is_string());

    let request = chocobo["adoptionRequests"]
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["id"] == 1)
        .unwrap();
    assert_eq!(request["adopterName"], "alice");
    assert_eq!(request["email"], "alice@example.com");
    assert_eq!(request["animal"], 1);
}

// ---------------------------------------------------------------------------
// Test: batched strategy answers identically with one lookup
// ---------------------------------------------------------------------------

#[tokio::test]
async fn batched_strategy_matches_per_animal() {
    let per_animal = body_json(get(build_test_app(seeded_store()), "/animals").await).await;

    let store = seeded_store();
    let mut config = test_config();
    config.aggregation_strategy = AggregationStrategy::Batched;
    let batched = body_json(get(build_test_app_with(store.clone(), config), "/animals").await).await;

    let per_animal = per_animal.as_array().unwrap();
    let batched = batched.as_array().unwrap();
    assert_eq!(per_animal.len(), batched.len());
    for (a, b) in per_animal.iter().zip(batched) {
        assert_eq!(a["name"], b["name"]);
        assert_eq!(request_ids(a), request_ids(b));
    }

    assert_eq!(store.calls().find_by_animals, 1);
    assert_eq!(store.calls().find_by_animal, 0);
}

// ---------------------------------------------------------------------------
// Test: a store failure fails the whole listing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn store_failure_returns_500() {
    let store = seeded_store();
    store.fail_adoption_lookups_for(3);

    let response = get(build_test_app(store), "/animals").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["code"], "INTERNAL_ERROR");
}
