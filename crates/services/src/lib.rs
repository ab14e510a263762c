//! Application services sitting between the HTTP handlers and the stores.
//!
//! - [`aggregation`] -- animals joined with their adoption requests
//! - [`guard`] -- who may submit, edit or withdraw an adoption request
//! - [`adoption`] -- submit/edit/delete built on the guard

pub mod adoption;
pub mod aggregation;
pub mod error;
pub mod guard;

pub use adoption::AdoptionRequestService;
pub use aggregation::{AggregationStrategy, AnimalAggregator};
pub use error::{ServiceError, ServiceResult};
pub use guard::AdoptionRequestGuard;

#[cfg(test)]
mod fixtures;
