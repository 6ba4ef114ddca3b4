use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct WaitlistEntry {
    pub id: u64,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl WaitlistEntry {
    /// Key used for the one-entry-per-email invariant.
    pub fn normalized_email(&self) -> String {
        normalize_email(&self.email)
    }
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
