//! Test app state builder for HTTP-level integration testing.
//!
//! This module provides `TestAppStateBuilder` which creates a minimal `AppState`
//! with in-memory mocks for testing HTTP endpoints.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;

use crate::{
    adapters::http::app_state::AppState,
    infra::config::{AppConfig, StoreConfig},
    test_utils::InMemoryWaitlistRepo,
    use_cases::waitlist::{WaitlistRepo, WaitlistUseCases},
};

/// Builder for creating `AppState` with in-memory mocks for testing.
///
/// # Example
///
/// ```ignore
/// let repo = Arc::new(InMemoryWaitlistRepo::with_count(5));
/// let app_state = TestAppStateBuilder::new().with_repo(repo.clone()).build();
/// ```
pub struct TestAppStateBuilder {
    repo: Option<Arc<dyn WaitlistRepo>>,
}

impl TestAppStateBuilder {
    /// Create a new builder backed by an empty in-memory repo.
    pub fn new() -> Self {
        Self {
            repo: Some(Arc::new(InMemoryWaitlistRepo::new())),
        }
    }

    /// Use a specific repo (for asserting on inserted rows or injecting failures).
    pub fn with_repo(mut self, repo: Arc<dyn WaitlistRepo>) -> Self {
        self.repo = Some(repo);
        self
    }

    /// Build without any store, as when no database is configured.
    pub fn unconfigured(mut self) -> Self {
        self.repo = None;
        self
    }

    pub fn build(self) -> AppState {
        // The config only reports the backend kind; the repo itself is injected.
        let store = match self.repo {
            Some(_) => StoreConfig::Postgres {
                database_url: "postgres://test@localhost/waitlist".to_string(),
            },
            None => StoreConfig::Unconfigured,
        };

        let config = Arc::new(AppConfig {
            bind_addr: "127.0.0.1:3001".parse::<SocketAddr>().unwrap(),
            cors_origin: HeaderValue::from_static("http://localhost:3000"),
            store,
            database_max_connections: 1,
            database_acquire_timeout_secs: 1,
            run_migrations: false,
            waitlist_table: "waitlist".to_string(),
            store_timeout_secs: 1,
            log_file: "test.log".to_string(),
        });

        AppState {
            config,
            waitlist_use_cases: Arc::new(WaitlistUseCases::new(self.repo)),
        }
    }
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
