//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod adoption_request_repo;
pub mod animal_repo;

pub use adoption_request_repo::AdoptionRequestRepo;
pub use animal_repo::AnimalRepo;
