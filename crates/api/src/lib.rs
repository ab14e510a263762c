//! Animal rescue API server library.
//!
//! Exposes the building blocks (config, state, auth, error handling,
//! routes) so integration tests and the binary entrypoints can share them.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod state;
