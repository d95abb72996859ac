use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, instrument};

use crate::{
    app_error::{AppError, AppResult},
    domain::entities::waitlist_entry::{NewWaitlistEntry, WaitlistEntry},
    validators::{is_non_blank, is_valid_email},
};

/// Storage port for waitlist rows.
///
/// Implementations must make `insert` race-free: of several concurrent inserts
/// with the same email exactly one succeeds and the rest fail with
/// [`AppError::DuplicateEmail`].
#[async_trait]
pub trait WaitlistRepo: Send + Sync {
    async fn insert(&self, entry: &NewWaitlistEntry) -> AppResult<WaitlistEntry>;
    async fn count(&self) -> AppResult<i64>;
    /// All rows, newest first.
    async fn list(&self) -> AppResult<Vec<WaitlistEntry>>;
}

#[derive(Clone)]
pub struct WaitlistUseCases {
    repo: Arc<dyn WaitlistRepo>,
}

impl WaitlistUseCases {
    pub fn new(repo: Arc<dyn WaitlistRepo>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self, clinic_name, clinic_size))]
    pub async fn join(
        &self,
        email: &str,
        clinic_name: &str,
        clinic_size: &str,
    ) -> AppResult<WaitlistEntry> {
        let new_entry = validate_submission(email, clinic_name, clinic_size)?;
        let entry = self.repo.insert(&new_entry).await?;

        info!(entry_id = %entry.id, clinic_size = %entry.clinic_size, "Clinic joined the waitlist");
        Ok(entry)
    }

    pub async fn stats(&self) -> AppResult<i64> {
        self.repo.count().await
    }

    pub async fn list(&self) -> AppResult<Vec<WaitlistEntry>> {
        self.repo.list().await
    }
}

fn validate_submission(
    email: &str,
    clinic_name: &str,
    clinic_size: &str,
) -> AppResult<NewWaitlistEntry> {
    if !is_valid_email(email) {
        return Err(AppError::Validation(
            "Please enter a valid email address".into(),
        ));
    }
    if !is_non_blank(clinic_name) {
        return Err(AppError::Validation("Clinic name is required".into()));
    }
    if !is_non_blank(clinic_size) {
        return Err(AppError::Validation("Please select clinic size".into()));
    }

    Ok(NewWaitlistEntry {
        email: email.trim().to_string(),
        clinic_name: clinic_name.trim().to_string(),
        clinic_size: clinic_size.trim().to_string(),
    })
}
