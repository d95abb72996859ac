//! In-memory mock implementations of the waitlist repository trait.

use async_trait::async_trait;
use std::sync::Mutex;
use uuid::Uuid;

use crate::{
    app_error::{AppError, AppResult},
    domain::entities::waitlist_entry::{NewWaitlistEntry, WaitlistEntry},
    use_cases::waitlist::WaitlistRepo,
};

/// In-memory implementation of WaitlistRepo for testing.
///
/// Entries are kept in insertion order; the mutex makes insert atomic.
#[derive(Default)]
pub struct InMemoryWaitlistRepo {
    pub entries: Mutex<Vec<WaitlistEntry>>,
}

impl InMemoryWaitlistRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repo with initial entries for testing.
    pub fn with_entries(entries: Vec<WaitlistEntry>) -> Self {
        Self {
            entries: Mutex::new(entries),
        }
    }

    /// Get all entries in insertion order (for test assertions).
    pub fn get_all(&self) -> Vec<WaitlistEntry> {
        self.entries.lock().unwrap().clone()
    }
}

#[async_trait]
impl WaitlistRepo for InMemoryWaitlistRepo {
    async fn insert(&self, entry: &NewWaitlistEntry) -> AppResult<WaitlistEntry> {
        let mut entries = self.entries.lock().unwrap();

        if entries.iter().any(|e| e.email == entry.email) {
            return Err(AppError::DuplicateEmail);
        }

        let created = WaitlistEntry {
            id: Uuid::new_v4(),
            email: entry.email.clone(),
            clinic_name: entry.clinic_name.clone(),
            clinic_size: entry.clinic_size.clone(),
            created_at: chrono::Utc::now(),
        };
        entries.push(created.clone());
        Ok(created)
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(self.entries.lock().unwrap().len() as i64)
    }

    async fn list(&self) -> AppResult<Vec<WaitlistEntry>> {
        let mut entries: Vec<WaitlistEntry> =
            self.entries.lock().unwrap().iter().rev().cloned().collect();
        // Stable sort keeps later inserts first on equal timestamps.
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(entries)
    }
}

/// Repo whose every call fails like an unreachable database.
#[derive(Default)]
pub struct FailingWaitlistRepo;

#[async_trait]
impl WaitlistRepo for FailingWaitlistRepo {
    async fn insert(&self, _entry: &NewWaitlistEntry) -> AppResult<WaitlistEntry> {
        Err(AppError::Database("database unavailable".into()))
    }

    async fn count(&self) -> AppResult<i64> {
        Err(AppError::Database("database unavailable".into()))
    }

    async fn list(&self) -> AppResult<Vec<WaitlistEntry>> {
        Err(AppError::Database("database unavailable".into()))
    }
}
