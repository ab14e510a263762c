//! Submitting, editing and withdrawing adoption requests.

use std::sync::Arc;

use animal_rescue_core::adoption::{validate_email, validate_notes};
use animal_rescue_core::error::CoreError;
use animal_rescue_core::identity::Identity;
use animal_rescue_core::types::DbId;
use animal_rescue_db::models::adoption_request::{AdoptionRequest, AdoptionRequestForm};
use animal_rescue_db::store::{AdoptionRequestStore, AnimalStore};

use crate::error::ServiceResult;
use crate::guard::AdoptionRequestGuard;

/// Write path for adoption requests; every call goes through the guard.
#[derive(Clone)]
pub struct AdoptionRequestService {
    guard: AdoptionRequestGuard,
    animals: Arc<dyn AnimalStore>,
    adoption_requests: Arc<dyn AdoptionRequestStore>,
}

impl AdoptionRequestService {
    pub fn new(
        animals: Arc<dyn AnimalStore>,
        adoption_requests: Arc<dyn AdoptionRequestStore>,
    ) -> Self {
        Self {
            guard: AdoptionRequestGuard::new(Arc::clone(&animals), Arc::clone(&adoption_requests)),
            animals,
            adoption_requests,
        }
    }

    pub fn guard(&self) -> &AdoptionRequestGuard {
        &self.guard
    }

    /// Create an adoption request for `animal_id` on behalf of `identity`.
    pub async fn submit(
        &self,
        identity: &Identity,
        animal_id: DbId,
        form: AdoptionRequestForm,
    ) -> ServiceResult<AdoptionRequest> {
        let draft = self.guard.authorize_submit(identity, animal_id, form)?;
        validate_email(&draft.email)?;
        validate_notes(&draft.notes)?;

        if self.animals.find_by_id(animal_id).await?.is_none() {
            return Err(CoreError::NotFound {
                entity: "Animal",
                id: animal_id,
            }
            .into());
        }

        let created = self.adoption_requests.create(draft).await?;

        tracing::info!(
            request_id = created.id,
            animal_id,
            user = %identity.name,
            "Adoption request created",
        );

        Ok(created)
    }

    /// Replace the email and notes of the caller's own request.
    pub async fn edit(
        &self,
        identity: &Identity,
        animal_id: DbId,
        request_id: DbId,
        form: AdoptionRequestForm,
    ) -> ServiceResult<AdoptionRequest> {
        let mut request = self
            .guard
            .authorize_mutate(identity, animal_id, request_id)
            .await?;
        validate_email(&form.email)?;
        validate_notes(&form.notes)?;

        request.email = form.email;
        request.notes = form.notes;

        let saved = self
            .adoption_requests
            .save(&request)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "AdoptionRequest",
                id: request_id,
            })?;

        tracing::info!(request_id, animal_id, user = %identity.name, "Adoption request updated");

        Ok(saved)
    }

    /// Remove the caller's own request.
    pub async fn delete(
        &self,
        identity: &Identity,
        animal_id: DbId,
        request_id: DbId,
    ) -> ServiceResult<()> {
        self.guard
            .authorize_mutate(identity, animal_id, request_id)
            .await?;

        if !self.adoption_requests.delete_by_id(request_id).await? {
            return Err(CoreError::NotFound {
                entity: "AdoptionRequest",
                id: request_id,
            }
            .into());
        }

        tracing::info!(request_id, animal_id, user = %identity.name, "Adoption request deleted");

        Ok(())
    }
}
