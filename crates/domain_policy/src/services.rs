//! Illustration service
//!
//! Orchestrates one calculation request: validate the form as of the
//! clock's date, project benefits for the accepted application, and store
//! the combined record. Nothing is stored for a rejected form.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info};

use core_kernel::{Clock, IllustrationId, UserId};

use crate::error::PolicyError;
use crate::form::ApplicationForm;
use crate::illustration::{Illustration, NewIllustration};
use crate::ports::IllustrationRepository;
use crate::projection::project;
use crate::validation::{self, ValidationResult};

/// Service for calculating and retrieving illustrations
#[derive(Clone)]
pub struct IllustrationService {
    repository: Arc<dyn IllustrationRepository>,
    clock: Arc<dyn Clock>,
}

impl IllustrationService {
    /// Creates a new illustration service
    ///
    /// # Arguments
    ///
    /// * `repository` - Where accepted illustrations are stored
    /// * `clock` - Supplies the reference date for age computation
    pub fn new(repository: Arc<dyn IllustrationRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// The date ages are computed against
    pub fn reference_date(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Validates a form without projecting or storing anything
    pub fn validate(&self, form: &ApplicationForm) -> ValidationResult {
        validation::validate(form, self.reference_date())
    }

    /// Validates, projects and stores an illustration for `user_id`
    ///
    /// # Errors
    ///
    /// * `PolicyError::Validation` - the form broke product rules; carries every diagnostic
    /// * `PolicyError::Repository` - the store failed
    pub async fn calculate(
        &self,
        user_id: &UserId,
        form: &ApplicationForm,
    ) -> Result<Illustration, PolicyError> {
        let reference_date = self.reference_date();
        let application = validation::accept(form, reference_date).map_err(|failure| {
            debug!(
                user = %user_id,
                %reference_date,
                violations = failure.errors.len(),
                "Application rejected"
            );
            failure
        })?;

        let benefits = project(&application);
        let illustration = self
            .repository
            .insert(NewIllustration {
                user_id: user_id.clone(),
                application,
                benefits,
            })
            .await?;

        info!(
            user = %user_id,
            illustration_id = %illustration.id,
            years = illustration.benefits.len(),
            "Illustration calculated"
        );
        Ok(illustration)
    }

    /// Fetches an illustration owned by `user_id`
    ///
    /// # Errors
    ///
    /// * `PolicyError::IllustrationNotFound` - unknown id, or owned by another user
    /// * `PolicyError::Repository` - the store failed
    pub async fn get(
        &self,
        user_id: &UserId,
        id: IllustrationId,
    ) -> Result<Illustration, PolicyError> {
        self.repository
            .find_for_user(id, user_id)
            .await?
            .ok_or_else(|| PolicyError::illustration_not_found(id))
    }

    /// Checks that the underlying store is reachable
    pub async fn ping(&self) -> Result<(), PolicyError> {
        Ok(self.repository.ping().await?)
    }
}
