//! Authorization for adoption request writes.
//!
//! Any identity with the `adoption.request` authority may submit. Editing
//! and withdrawing are reserved for the identity that submitted the request.

use std::sync::Arc;

use animal_rescue_core::adoption::ensure_requester;
use animal_rescue_core::authorities::AUTHORITY_ADOPTION_REQUEST;
use animal_rescue_core::error::CoreError;
use animal_rescue_core::identity::Identity;
use animal_rescue_core::types::DbId;
use animal_rescue_db::models::adoption_request::{
    AdoptionRequest, AdoptionRequestForm, NewAdoptionRequest,
};
use animal_rescue_db::store::{AdoptionRequestStore, AnimalStore};

use crate::error::ServiceResult;

#[derive(Clone)]
pub struct AdoptionRequestGuard {
    animals: Arc<dyn AnimalStore>,
    adoption_requests: Arc<dyn AdoptionRequestStore>,
}

impl AdoptionRequestGuard {
    pub fn new(
        animals: Arc<dyn AnimalStore>,
        adoption_requests: Arc<dyn AdoptionRequestStore>,
    ) -> Self {
        Self {
            animals,
            adoption_requests,
        }
    }

    /// Build the record to insert for a new submission.
    ///
    /// The adopter name is always the caller's identity.
    pub fn authorize_submit(
        &self,
        identity: &Identity,
        animal_id: DbId,
        form: AdoptionRequestForm,
    ) -> ServiceResult<NewAdoptionRequest> {
        ensure_can_request(identity)?;

        Ok(NewAdoptionRequest {
            adopter_name: identity.name.clone(),
            email: form.email,
            notes: form.notes,
            animal: animal_id,
        })
    }

    /// Load the request the caller wants to edit or withdraw.
    ///
    /// Fails with `NotFound` if the animal is missing, or if the request is
    /// missing or attached to another animal. Fails with `Forbidden` if the
    /// caller did not submit it.
    pub async fn authorize_mutate(
        &self,
        identity: &Identity,
        animal_id: DbId,
        request_id: DbId,
    ) -> ServiceResult<AdoptionRequest> {
        ensure_can_request(identity)?;

        self.animals
            .find_by_id(animal_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Animal",
                id: animal_id,
            })?;

        let request = self
            .adoption_requests
            .find_by_id(request_id)
            .await?
            .filter(|r| r.animal == animal_id)
            .ok_or(CoreError::NotFound {
                entity: "AdoptionRequest",
                id: request_id,
            })?;

        ensure_requester(&request.adopter_name, identity)?;

        Ok(request)
    }
}

fn ensure_can_request(identity: &Identity) -> Result<(), CoreError> {
    if identity.has_authority(AUTHORITY_ADOPTION_REQUEST) {
        Ok(())
    } else {
        Err(CoreError::Forbidden(format!(
            "Authority '{AUTHORITY_ADOPTION_REQUEST}' required"
        )))
    }
}
