//! Shared in-memory fixtures for service tests.

use std::collections::HashSet;
use std::sync::Arc;

use animal_rescue_core::authorities::AUTHORITY_ADOPTION_REQUEST;
use animal_rescue_core::identity::Identity;
use animal_rescue_core::types::DbId;
use animal_rescue_db::models::adoption_request::AdoptionRequest;
use animal_rescue_db::models::animal::Animal;
use animal_rescue_db::store::InMemoryStore;
use chrono::NaiveDate;

pub fn animal(id: DbId, name: &str) -> Animal {
    Animal {
        id,
        name: name.to_string(),
        rescue_date: NaiveDate::from_ymd_opt(2019, 4, 12).unwrap(),
        avatar_url: format!("/images/{}.jpg", name.to_lowercase()),
        description: format!("{name} is waiting for a home."),
        adoption_requests: HashSet::new(),
    }
}

pub fn request(id: DbId, animal: DbId, adopter: &str) -> AdoptionRequest {
    AdoptionRequest {
        id,
        adopter_name: adopter.to_string(),
        email: format!("{adopter}@example.com"),
        notes: String::new(),
        animal,
    }
}

pub fn requester(name: &str) -> Identity {
    Identity::new(name, [AUTHORITY_ADOPTION_REQUEST])
}

/// Chocobo (1) with two requests, Tiger (2) with none, Toby (3) with one.
pub fn seeded_store() -> Arc<InMemoryStore> {
    let store = InMemoryStore::new();
    store.insert_animal(animal(1, "Chocobo"));
    store.insert_animal(animal(2, "Tiger"));
    store.insert_animal(animal(3, "Toby"));
    store.insert_adoption_request(request(1, 1, "alice"));
    store.insert_adoption_request(request(2, 1, "bob"));
    store.insert_adoption_request(request(3, 3, "carol"));
    Arc::new(store)
}
