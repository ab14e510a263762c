use std::sync::Arc;

use animal_rescue_db::store::{AdoptionRequestStore, AnimalStore};
use animal_rescue_services::{AdoptionRequestService, AnimalAggregator};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (accessed by middleware and handlers).
    pub config: Arc<ServerConfig>,
    /// Animal store, used directly by the health check.
    pub animals: Arc<dyn AnimalStore>,
    /// Read path: animals joined with their adoption requests.
    pub aggregator: Arc<AnimalAggregator>,
    /// Write path: guarded adoption request submissions and changes.
    pub adoption_requests: Arc<AdoptionRequestService>,
}

impl AppState {
    /// Wire the services on top of the given stores.
    pub fn new(
        config: ServerConfig,
        animals: Arc<dyn AnimalStore>,
        adoption_requests: Arc<dyn AdoptionRequestStore>,
    ) -> Self {
        let aggregator = AnimalAggregator::new(Arc::clone(&animals), Arc::clone(&adoption_requests))
            .with_strategy(config.aggregation_strategy)
            .with_concurrency(config.aggregation_concurrency);
        let service = AdoptionRequestService::new(Arc::clone(&animals), adoption_requests);

        Self {
            config: Arc::new(config),
            animals,
            aggregator: Arc::new(aggregator),
            adoption_requests: Arc::new(service),
        }
    }
}
