//! Adoption request rules: field validation and the creator-only check.
//!
//! Used by the services layer before anything is written to the store.

use crate::error::CoreError;
use crate::identity::Identity;

/* --------------------------------------------------------------------------
Constants
-------------------------------------------------------------------------- */

/// Maximum length for the contact email (RFC 5321 path limit).
pub const MAX_EMAIL_LENGTH: usize = 320;

/// Maximum length for the free-form notes.
pub const MAX_NOTES_LENGTH: usize = 10_000;

/* --------------------------------------------------------------------------
Validation functions
-------------------------------------------------------------------------- */

/// Validate the contact email.
///
/// Only presence and length are checked; the demo client sends free-form
/// values and the format is not enforced.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if email.trim().is_empty() {
        return Err(CoreError::Validation("Email must not be empty".to_string()));
    }
    if email.chars().count() > MAX_EMAIL_LENGTH {
        return Err(CoreError::Validation(format!(
            "Email must be at most {MAX_EMAIL_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate the notes. Empty notes are allowed.
pub fn validate_notes(notes: &str) -> Result<(), CoreError> {
    if notes.chars().count() > MAX_NOTES_LENGTH {
        return Err(CoreError::Validation(format!(
            "Notes must be at most {MAX_NOTES_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Only the original requester may change or withdraw an adoption request.
pub fn ensure_requester(adopter_name: &str, identity: &Identity) -> Result<(), CoreError> {
    if adopter_name == identity.name {
        Ok(())
    } else {
        Err(CoreError::Forbidden(format!(
            "User '{}' is not the original requester",
            identity.name
        )))
    }
}
