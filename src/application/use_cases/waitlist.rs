use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use crate::{
    app_error::AppResult, domain::entities::waitlist_entry::WaitlistEntry,
    validators::validate_waitlist_email,
};

#[async_trait]
pub trait WaitlistRepo: Send + Sync {
    /// Fails with `AppError::DuplicateEmail` if the email is already on the list,
    /// compared case-insensitively.
    async fn create(&self, email: &str) -> AppResult<WaitlistEntry>;
    async fn find_by_email(&self, email: &str) -> AppResult<Option<WaitlistEntry>>;
    async fn count(&self) -> AppResult<usize>;
}

#[derive(Debug, Clone)]
pub struct JoinOutcome {
    pub entry: WaitlistEntry,
    pub position: u64,
}

#[derive(Clone)]
pub struct WaitlistUseCases {
    repo: Arc<dyn WaitlistRepo>,
}

impl WaitlistUseCases {
    pub fn new(repo: Arc<dyn WaitlistRepo>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self, email))]
    pub async fn join(&self, email: &str) -> AppResult<JoinOutcome> {
        let email = validate_waitlist_email(email)?;
        let entry = self.repo.create(email).await?;

        // Ids are sequential and entries are never removed, so the id is the
        // entry count at the moment of insertion.
        let position = entry.id;
        tracing::info!(entry_id = entry.id, position, "Waitlist signup recorded");

        Ok(JoinOutcome { entry, position })
    }

    #[instrument(skip(self))]
    pub async fn count(&self) -> AppResult<usize> {
        self.repo.count().await
    }
}
