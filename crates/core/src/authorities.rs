//! Well-known authority name constants.
//!
//! Authorities travel in the `authorities` claim of the access token.

/// Grants submitting, editing and withdrawing one's own adoption requests.
pub const AUTHORITY_ADOPTION_REQUEST: &str = "adoption.request";
