pub mod adoption_requests;
pub mod animals;
pub mod whoami;
