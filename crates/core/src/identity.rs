//! The authenticated caller as seen by the domain layer.

use serde::Serialize;

/// An authenticated caller: the username plus the authorities granted to it.
///
/// The HTTP layer builds this from a validated access token; services only
/// ever compare `name` and look up authorities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub name: String,
    pub authorities: Vec<String>,
}

impl Identity {
    pub fn new(name: impl Into<String>, authorities: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            authorities: authorities.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the identity carries the given authority (exact match).
    pub fn has_authority(&self, authority: &str) -> bool {
        self.authorities.iter().any(|a| a == authority)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::authorities::AUTHORITY_ADOPTION_REQUEST;

    #[test]
    fn has_authority_matches_exactly() {
        let identity = Identity::new("u1", [AUTHORITY_ADOPTION_REQUEST]);
        assert!(identity.has_authority("adoption.request"));
        assert!(!identity.has_authority("adoption"));
        assert!(!identity.has_authority("ADOPTION.REQUEST"));
    }

    #[test]
    fn identity_without_authorities() {
        let identity = Identity::new("u1", Vec::<String>::new());
        assert!(!identity.has_authority(AUTHORITY_ADOPTION_REQUEST));
    }
}
