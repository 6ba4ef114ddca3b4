//! Mock implementations of the waitlist repository trait.

use async_trait::async_trait;

use crate::{
    app_error::{AppError, AppResult},
    domain::entities::waitlist_entry::WaitlistEntry,
    use_cases::waitlist::WaitlistRepo,
};

/// Waitlist repo whose every operation fails, for 500 paths.
#[derive(Default)]
pub struct FailingWaitlistRepo;

#[async_trait]
impl WaitlistRepo for FailingWaitlistRepo {
    async fn create(&self, _email: &str) -> AppResult<WaitlistEntry> {
        Err(AppError::Internal("waitlist store unavailable".into()))
    }

    async fn find_by_email(&self, _email: &str) -> AppResult<Option<WaitlistEntry>> {
        Err(AppError::Internal("waitlist store unavailable".into()))
    }

    async fn count(&self) -> AppResult<usize> {
        Err(AppError::Internal("waitlist store unavailable".into()))
    }
}
