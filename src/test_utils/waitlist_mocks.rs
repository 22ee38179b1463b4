//! In-memory mock implementations of the waitlist store.

use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::Utc;

use crate::{
    app_error::{AppError, AppResult},
    entities::waitlist_entry::{NewWaitlistEntry, WaitlistEntry},
    test_utils::create_test_entry,
    use_cases::waitlist::WaitlistRepo,
};

/// In-memory implementation of WaitlistRepo for testing.
#[derive(Default)]
pub struct InMemoryWaitlistRepo {
    pub rows: Mutex<Vec<WaitlistEntry>>,
    inserted: Mutex<Vec<NewWaitlistEntry>>,
    count_calls: AtomicUsize,
}

impl InMemoryWaitlistRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repo with `n` pre-existing rows.
    pub fn with_count(n: i64) -> Self {
        let rows = (1..=n).map(|id| create_test_entry(id, |_| {})).collect();
        Self {
            rows: Mutex::new(rows),
            ..Self::default()
        }
    }

    /// Entries inserted through the repo (for test assertions).
    pub fn inserted(&self) -> Vec<NewWaitlistEntry> {
        self.inserted.lock().unwrap().clone()
    }

    pub fn count_calls(&self) -> usize {
        self.count_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WaitlistRepo for InMemoryWaitlistRepo {
    async fn insert(&self, entry: &NewWaitlistEntry) -> AppResult<WaitlistEntry> {
        let mut rows = self.rows.lock().unwrap();
        let id = rows.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        let row = WaitlistEntry {
            id,
            first_name: entry.first_name.clone(),
            last_name: entry.last_name.clone(),
            email: entry.email.clone(),
            phone: entry.phone.clone(),
            year_of_study: entry.year_of_study.clone(),
            school: entry.school.clone(),
            created_at: Utc::now(),
        };
        rows.push(row.clone());
        self.inserted.lock().unwrap().push(entry.clone());
        Ok(row)
    }

    async fn count(&self) -> AppResult<i64> {
        self.count_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.rows.lock().unwrap().len() as i64)
    }
}

#[derive(Clone, Copy)]
enum Failure {
    Unreachable,
    Broken,
}

/// Repo whose every call fails, either as an unreachable store or as an
/// unexpected database error.
pub struct FailingWaitlistRepo {
    failure: Failure,
}

impl FailingWaitlistRepo {
    pub fn unreachable() -> Self {
        Self {
            failure: Failure::Unreachable,
        }
    }

    pub fn broken() -> Self {
        Self {
            failure: Failure::Broken,
        }
    }

    fn error(&self) -> AppError {
        match self.failure {
            Failure::Unreachable => AppError::StoreUnavailable("connection refused".into()),
            Failure::Broken => AppError::Database("relation \"waitlist\" does not exist".into()),
        }
    }
}

#[async_trait]
impl WaitlistRepo for FailingWaitlistRepo {
    async fn insert(&self, _entry: &NewWaitlistEntry) -> AppResult<WaitlistEntry> {
        Err(self.error())
    }

    async fn count(&self) -> AppResult<i64> {
        Err(self.error())
    }
}
