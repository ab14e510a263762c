//! Domain primitives shared by every animal-rescue crate.
//!
//! Nothing in here touches the database or HTTP; the `db`, `services`
//! and `api` crates build on these types.

pub mod adoption;
pub mod authorities;
pub mod error;
pub mod identity;
pub mod types;
