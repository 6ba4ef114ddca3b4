use async_trait::async_trait;
use chrono::Utc;

use crate::{
    adapters::persistence::{MemoryPersistence, WaitlistTable},
    app_error::{AppError, AppResult},
    domain::entities::waitlist_entry::{WaitlistEntry, normalize_email},
    use_cases::waitlist::WaitlistRepo,
};

impl WaitlistTable {
    /// Case-insensitive lookup behind both `create` and `find_by_email`.
    fn find(&self, normalized: &str) -> Option<&WaitlistEntry> {
        self.entries
            .values()
            .find(|entry| entry.normalized_email() == normalized)
    }
}

#[async_trait]
impl WaitlistRepo for MemoryPersistence {
    async fn create(&self, email: &str) -> AppResult<WaitlistEntry> {
        let normalized = normalize_email(email);
        // Check and insert under one guard so two signups for the same
        // address cannot both pass the uniqueness check.
        let mut table = self.waitlist.write().await;
        if table.find(&normalized).is_some() {
            return Err(AppError::DuplicateEmail);
        }

        let id = table.next_id;
        table.next_id += 1;
        let entry = WaitlistEntry {
            id,
            email: email.trim().to_string(),
            created_at: Utc::now(),
        };
        table.entries.insert(id, entry.clone());
        Ok(entry)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<WaitlistEntry>> {
        let normalized = normalize_email(email);
        Ok(self.waitlist.read().await.find(&normalized).cloned())
    }

    async fn count(&self) -> AppResult<usize> {
        Ok(self.waitlist.read().await.entries.len())
    }
}
