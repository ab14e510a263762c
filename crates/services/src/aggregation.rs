//! Animals joined with their adoption requests.
//!
//! The join is a two-phase pipeline: stream the animals, then fetch each
//! animal's requests and attach them before the animal is emitted. Output
//! order always follows the animal store.
//!
//! Two strategies produce identical output:
//!
//! - [`AggregationStrategy::PerAnimal`] issues one `find_by_animal` call per
//!   animal (N+1 round-trips), with up to `concurrency` calls in flight.
//! - [`AggregationStrategy::Batched`] loads all animals, then issues a single
//!   `find_by_animals` call and groups the rows in memory.
//!
//! Either way the stream is fail-fast: the first store error is yielded and
//! nothing follows it.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use animal_rescue_core::error::CoreError;
use animal_rescue_core::types::DbId;
use animal_rescue_db::models::adoption_request::AdoptionRequest;
use animal_rescue_db::models::animal::Animal;
use animal_rescue_db::store::{AdoptionRequestStore, AnimalStore};
use futures::future;
use futures::stream::{self, BoxStream, StreamExt, TryStreamExt};

use crate::error::{ServiceError, ServiceResult};

/// Default number of per-animal lookups allowed in flight.
pub const DEFAULT_CONCURRENCY: usize = 8;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AggregationStrategy {
    #[default]
    PerAnimal,
    Batched,
}

impl FromStr for AggregationStrategy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "per_animal" => Ok(Self::PerAnimal),
            "batched" => Ok(Self::Batched),
            other => Err(CoreError::Validation(format!(
                "Unknown aggregation strategy '{other}'. Must be one of: per_animal, batched"
            ))),
        }
    }
}

impl fmt::Display for AggregationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PerAnimal => "per_animal",
            Self::Batched => "batched",
        })
    }
}

/// Reads every animal together with its adoption requests.
#[derive(Clone)]
pub struct AnimalAggregator {
    animals: Arc<dyn AnimalStore>,
    adoption_requests: Arc<dyn AdoptionRequestStore>,
    strategy: AggregationStrategy,
    concurrency: usize,
}

impl AnimalAggregator {
    pub fn new(
        animals: Arc<dyn AnimalStore>,
        adoption_requests: Arc<dyn AdoptionRequestStore>,
    ) -> Self {
        Self {
            animals,
            adoption_requests,
            strategy: AggregationStrategy::default(),
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    pub fn with_strategy(mut self, strategy: AggregationStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Values below 1 are raised to 1.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn strategy(&self) -> AggregationStrategy {
        self.strategy
    }

    /// Stream all animals, each with its adoption requests attached.
    pub fn all_animals_with_adoptions(&self) -> BoxStream<'_, ServiceResult<Animal>> {
        tracing::debug!(
            strategy = %self.strategy,
            concurrency = self.concurrency,
            "Aggregating animals with adoption requests",
        );

        let animals = match self.strategy {
            AggregationStrategy::PerAnimal => self.per_animal(),
            AggregationStrategy::Batched => self.batched(),
        };
        stop_after_first_error(animals)
    }

    /// Collect [`Self::all_animals_with_adoptions`] into a `Vec`.
    pub async fn collect_all(&self) -> ServiceResult<Vec<Animal>> {
        self.all_animals_with_adoptions().try_collect().await
    }

    fn per_animal(&self) -> BoxStream<'_, ServiceResult<Animal>> {
        // Animal read errors queue behind the lookups already in flight, so
        // everything read before the failure is still emitted first.
        self.animals
            .find_all()
            .map(move |animal| async move {
                match animal {
                    Ok(animal) => self.attach_adoption_requests(animal).await,
                    Err(err) => Err(ServiceError::from(err)),
                }
            })
            .buffered(self.concurrency)
            .boxed()
    }

    async fn attach_adoption_requests(&self, mut animal: Animal) -> ServiceResult<Animal> {
        animal.adoption_requests = self
            .adoption_requests
            .find_by_animal(animal.id)
            .try_collect::<HashSet<_>>()
            .await?;
        Ok(animal)
    }

    fn batched(&self) -> BoxStream<'_, ServiceResult<Animal>> {
        stream::once(self.load_batched())
            .map_ok(|animals| stream::iter(animals.into_iter().map(Ok::<_, ServiceError>)))
            .try_flatten()
            .boxed()
    }

    async fn load_batched(&self) -> ServiceResult<Vec<Animal>> {
        let mut animals: Vec<Animal> = self.animals.find_all().try_collect().await?;
        if animals.is_empty() {
            return Ok(animals);
        }

        let ids: Vec<DbId> = animals.iter().map(|a| a.id).collect();
        let mut by_animal: HashMap<DbId, HashSet<AdoptionRequest>> = HashMap::new();
        for request in self.adoption_requests.find_by_animals(&ids).await? {
            by_animal.entry(request.animal).or_default().insert(request);
        }

        for animal in &mut animals {
            animal.adoption_requests = by_animal.remove(&animal.id).unwrap_or_default();
        }
        Ok(animals)
    }
}

/// End the stream right after the first `Err` item.
fn stop_after_first_error<'a, T: Send + 'a>(
    items: BoxStream<'a, ServiceResult<T>>,
) -> BoxStream<'a, ServiceResult<T>> {
    items
        .scan(false, |failed, item| {
            if *failed {
                return future::ready(None);
            }
            *failed = item.is_err();
            future::ready(Some(item))
        })
        .boxed()
}
