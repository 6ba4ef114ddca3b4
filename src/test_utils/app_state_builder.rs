//! Test app state builder for HTTP-level integration testing.

use std::sync::Arc;

use axum::http::HeaderValue;

use crate::{
    adapters::{http::app_state::AppState, persistence::MemoryPersistence},
    infra::config::AppConfig,
    use_cases::waitlist::{WaitlistRepo, WaitlistUseCases},
};

pub fn test_config() -> AppConfig {
    AppConfig {
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        cors_origin: HeaderValue::from_static("http://localhost:5000"),
        log_file: None,
    }
}

/// Builds an `AppState` on a fresh `MemoryPersistence`, optionally swapping
/// in another waitlist repository.
#[derive(Default)]
pub struct TestAppStateBuilder {
    waitlist_repo: Option<Arc<dyn WaitlistRepo>>,
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_waitlist_repo(mut self, repo: Arc<dyn WaitlistRepo>) -> Self {
        self.waitlist_repo = Some(repo);
        self
    }

    pub fn build(self) -> AppState {
        let waitlist_repo = self
            .waitlist_repo
            .unwrap_or_else(|| Arc::new(MemoryPersistence::new()));

        AppState {
            config: Arc::new(test_config()),
            waitlist_use_cases: Arc::new(WaitlistUseCases::new(waitlist_repo)),
        }
    }
}
