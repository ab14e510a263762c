//! Authentication and authorization middleware extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the caller's identity from a JWT Bearer token.
//! - [`rbac::RequireAdoptionRequester`] -- Requires the `adoption.request` authority.

pub mod auth;
pub mod rbac;
