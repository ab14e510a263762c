//! In-memory store for tests and local experiments.
//!
//! Animals are emitted in ascending id order, mirroring the Postgres store.
//! Every call is counted so tests can assert how many round-trips an
//! operation made, and reads of chosen animals (or of their adoption
//! requests) can be made to fail.

use std::collections::{BTreeMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

use animal_rescue_core::types::DbId;
use async_trait::async_trait;
use futures::stream::{self, BoxStream, StreamExt};

use super::{AdoptionRequestStore, AnimalStore, StoreResult};
use crate::models::adoption_request::{AdoptionRequest, NewAdoptionRequest};
use crate::models::animal::Animal;

/// Number of calls made to each read method.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreCalls {
    pub find_all: usize,
    pub find_by_animal: usize,
    pub find_by_animals: usize,
}

#[derive(Debug, Default)]
struct Inner {
    animals: BTreeMap<DbId, Animal>,
    requests: BTreeMap<DbId, AdoptionRequest>,
    last_request_id: DbId,
    failing_animals: HashSet<DbId>,
    unreadable_animals: HashSet<DbId>,
    calls: StoreCalls,
}

#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: Mutex<Inner>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add or replace an animal. Any attached requests are discarded.
    pub fn insert_animal(&self, mut animal: Animal) {
        animal.adoption_requests.clear();
        self.lock().animals.insert(animal.id, animal);
    }

    /// Add or replace an adoption request, keeping its id.
    pub fn insert_adoption_request(&self, request: AdoptionRequest) {
        let mut inner = self.lock();
        inner.last_request_id = inner.last_request_id.max(request.id);
        inner.requests.insert(request.id, request);
    }

    /// Make every adoption request lookup for `animal_id` fail.
    pub fn fail_adoption_lookups_for(&self, animal_id: DbId) {
        self.lock().failing_animals.insert(animal_id);
    }

    /// Make reads of `animal_id` fail: `find_all` yields an `Err` in its
    /// place (and keeps going), and `find_by_id` returns an `Err`.
    pub fn fail_animal_reads_for(&self, animal_id: DbId) {
        self.lock().unreadable_animals.insert(animal_id);
    }

    pub fn calls(&self) -> StoreCalls {
        self.lock().calls
    }

    fn read_failure(animal_id: DbId) -> sqlx::Error {
        sqlx::Error::Protocol(format!("animal read failed for animal {animal_id}"))
    }

    fn lookup_failure(animal_id: DbId) -> sqlx::Error {
        sqlx::Error::Protocol(format!(
            "adoption request lookup failed for animal {animal_id}"
        ))
    }
}

#[async_trait]
impl AnimalStore for InMemoryStore {
    fn find_all(&self) -> BoxStream<'_, StoreResult<Animal>> {
        let animals: Vec<StoreResult<Animal>> = {
            let mut inner = self.lock();
            inner.calls.find_all += 1;
            inner
                .animals
                .values()
                .map(|animal| {
                    if inner.unreadable_animals.contains(&animal.id) {
                        Err(Self::read_failure(animal.id))
                    } else {
                        Ok(animal.clone())
                    }
                })
                .collect()
        };
        stream::iter(animals).boxed()
    }

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<Animal>> {
        let inner = self.lock();
        if inner.unreadable_animals.contains(&id) {
            return Err(Self::read_failure(id));
        }
        Ok(inner.animals.get(&id).cloned())
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}

#[async_trait]
impl AdoptionRequestStore for InMemoryStore {
    fn find_by_animal(&self, animal_id: DbId) -> BoxStream<'_, StoreResult<AdoptionRequest>> {
        let mut inner = self.lock();
        inner.calls.find_by_animal += 1;
        if inner.failing_animals.contains(&animal_id) {
            return stream::once(async move { Err(Self::lookup_failure(animal_id)) }).boxed();
        }
        let requests: Vec<AdoptionRequest> = inner
            .requests
            .values()
            .filter(|r| r.animal == animal_id)
            .cloned()
            .collect();
        stream::iter(requests.into_iter().map(Ok)).boxed()
    }

    async fn find_by_animals(&self, animal_ids: &[DbId]) -> StoreResult<Vec<AdoptionRequest>> {
        let mut inner = self.lock();
        inner.calls.find_by_animals += 1;
        if let Some(&failing) = animal_ids.iter().find(|id| inner.failing_animals.contains(*id)) {
            return Err(Self::lookup_failure(failing));
        }
        Ok(inner
            .requests
            .values()
            .filter(|r| animal_ids.contains(&r.animal))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<AdoptionRequest>> {
        Ok(self.lock().requests.get(&id).cloned())
    }

    async fn create(&self, request: NewAdoptionRequest) -> StoreResult<AdoptionRequest> {
        let mut inner = self.lock();
        if !inner.animals.contains_key(&request.animal) {
            return Err(sqlx::Error::Protocol(format!(
                "animal {} does not exist",
                request.animal
            )));
        }
        inner.last_request_id += 1;
        let created = AdoptionRequest {
            id: inner.last_request_id,
            adopter_name: request.adopter_name,
            email: request.email,
            notes: request.notes,
            animal: request.animal,
        };
        inner.requests.insert(created.id, created.clone());
        Ok(created)
    }

    async fn save(&self, request: &AdoptionRequest) -> StoreResult<Option<AdoptionRequest>> {
        let mut inner = self.lock();
        Ok(inner.requests.get_mut(&request.id).map(|stored| {
            stored.email.clone_from(&request.email);
            stored.notes.clone_from(&request.notes);
            stored.clone()
        }))
    }

    async fn delete_by_id(&self, id: DbId) -> StoreResult<bool> {
        Ok(self.lock().requests.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use futures::TryStreamExt;

    use super::*;

    fn animal(id: DbId, name: &str) -> Animal {
        Animal {
            id,
            name: name.to_string(),
            rescue_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            avatar_url: format!("/images/{id}.jpg"),
            description: String::new(),
            adoption_requests: HashSet::new(),
        }
    }

    fn new_request(animal: DbId, adopter: &str) -> NewAdoptionRequest {
        NewAdoptionRequest {
            adopter_name: adopter.to_string(),
            email: "a@e.com".to_string(),
            notes: String::new(),
            animal,
        }
    }

    #[tokio::test]
    async fn find_all_emits_in_id_order() {
        let store = InMemoryStore::new();
        store.insert_animal(animal(2, "Tiger"));
        store.insert_animal(animal(1, "Chocobo"));

        let names: Vec<String> = AnimalStore::find_all(&store)
            .map_ok(|a| a.name)
            .try_collect()
            .await
            .unwrap();
        assert_eq!(names, ["Chocobo", "Tiger"]);
        assert_eq!(store.calls().find_all, 1);
    }

    #[tokio::test]
    async fn create_assigns_ids_after_seeded_rows() {
        let store = InMemoryStore::new();
        store.insert_animal(animal(1, "Chocobo"));
        store.insert_adoption_request(AdoptionRequest {
            id: 10,
            adopter_name: "alice".to_string(),
            email: "alice@e.com".to_string(),
            notes: String::new(),
            animal: 1,
        });

        let created = store.create(new_request(1, "u1")).await.unwrap();
        assert_eq!(created.id, 11);
        assert_eq!(created.adopter_name, "u1");
    }

    #[tokio::test]
    async fn create_rejects_unknown_animal() {
        let store = InMemoryStore::new();
        assert!(store.create(new_request(99, "u1")).await.is_err());
    }

    #[tokio::test]
    async fn save_only_touches_email_and_notes() {
        let store = InMemoryStore::new();
        store.insert_animal(animal(1, "Chocobo"));
        let mut created = store.create(new_request(1, "u1")).await.unwrap();

        created.email = "b@e.com".to_string();
        created.adopter_name = "mallory".to_string();
        created.animal = 42;
        let saved = store.save(&created).await.unwrap().unwrap();

        assert_eq!(saved.email, "b@e.com");
        assert_eq!(saved.adopter_name, "u1");
        assert_eq!(saved.animal, 1);
    }

    #[tokio::test]
    async fn delete_reports_whether_a_row_was_removed() {
        let store = InMemoryStore::new();
        store.insert_animal(animal(1, "Chocobo"));
        let created = store.create(new_request(1, "u1")).await.unwrap();

        assert!(store.delete_by_id(created.id).await.unwrap());
        assert!(!store.delete_by_id(created.id).await.unwrap());
        assert!(AdoptionRequestStore::find_by_id(&store, created.id)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn injected_failure_surfaces_on_both_lookup_paths() {
        let store = InMemoryStore::new();
        store.insert_animal(animal(1, "Chocobo"));
        store.fail_adoption_lookups_for(1);

        let streamed: Result<Vec<_>, _> = store.find_by_animal(1).try_collect().await;
        assert!(streamed.is_err());
        assert!(store.find_by_animals(&[1]).await.is_err());
        assert_eq!(store.calls().find_by_animal, 1);
        assert_eq!(store.calls().find_by_animals, 1);
    }

    #[tokio::test]
    async fn injected_animal_failure_keeps_its_position() {
        let store = InMemoryStore::new();
        store.insert_animal(animal(1, "Chocobo"));
        store.insert_animal(animal(2, "Tiger"));
        store.insert_animal(animal(3, "Toby"));
        store.fail_animal_reads_for(2);

        let items: Vec<StoreResult<Animal>> = AnimalStore::find_all(&store).collect().await;
        assert_eq!(items.len(), 3);
        assert!(items[0].is_ok());
        assert!(items[1].is_err());
        assert!(items[2].is_ok());

        assert!(AnimalStore::find_by_id(&store, 2).await.is_err());
        assert!(AnimalStore::find_by_id(&store, 1).await.unwrap().is_some());
    }
}
