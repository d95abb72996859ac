//! Test app state builder for HTTP-level integration testing.
//!
//! This module provides `TestAppStateBuilder` which creates a minimal `AppState`
//! backed by an in-memory waitlist repo unless another repo is supplied.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use crate::{
    adapters::http::app_state::AppState,
    domain::entities::waitlist_entry::WaitlistEntry,
    infra::config::AppConfig,
    test_utils::InMemoryWaitlistRepo,
    use_cases::waitlist::{WaitlistRepo, WaitlistUseCases},
};

/// Builder for creating `AppState` with in-memory mocks for testing.
///
/// # Example
///
/// ```ignore
/// let app_state = TestAppStateBuilder::new()
///     .with_entry(create_test_entry(|e| e.email = "a@x.com".to_string()))
///     .build();
/// ```
pub struct TestAppStateBuilder {
    entries: Vec<WaitlistEntry>,
    repo: Option<Arc<dyn WaitlistRepo>>,
    public_dir: PathBuf,
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self {
            entries: vec![],
            repo: None,
            public_dir: PathBuf::from("/nonexistent/waitlist-public"),
        }
    }

    /// Seed the in-memory repo. Ignored when a custom repo is set.
    pub fn with_entry(mut self, entry: WaitlistEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Use a custom repo (SQLite, failing stub, ...).
    pub fn with_repo(mut self, repo: Arc<dyn WaitlistRepo>) -> Self {
        self.repo = Some(repo);
        self
    }

    pub fn with_public_dir(mut self, public_dir: PathBuf) -> Self {
        self.public_dir = public_dir;
        self
    }

    /// Build with the default in-memory repo and return it for assertions.
    pub fn build_with_repo(self) -> (AppState, Arc<InMemoryWaitlistRepo>) {
        let repo = Arc::new(InMemoryWaitlistRepo::with_entries(self.entries.clone()));
        let app_state = self.with_repo(repo.clone()).build();
        (app_state, repo)
    }

    pub fn build(self) -> AppState {
        let repo: Arc<dyn WaitlistRepo> = match self.repo {
            Some(repo) => repo,
            None => Arc::new(InMemoryWaitlistRepo::with_entries(self.entries)),
        };

        let config = Arc::new(AppConfig {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            database_url: "sqlite::memory:".to_string(),
            db_max_connections: 1,
            public_dir: self.public_dir,
            log_file: None,
        });

        AppState {
            config,
            waitlist_use_cases: Arc::new(WaitlistUseCases::new(repo)),
        }
    }
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
