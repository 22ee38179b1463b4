use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use tracing::instrument;

use crate::{
    app_error::{AppError, AppResult},
    entities::waitlist_entry::{NewWaitlistEntry, WaitlistEntry, WaitlistSubmission},
    validators::validate_submission,
};

#[async_trait]
pub trait WaitlistRepo: Send + Sync {
    async fn insert(&self, entry: &NewWaitlistEntry) -> AppResult<WaitlistEntry>;
    async fn count(&self) -> AppResult<i64>;
}

/// Result of a successful signup.
#[derive(Debug, Clone, Serialize)]
pub struct JoinOutcome {
    pub entry: WaitlistEntry,
    /// Count read after the insert. Not transactional with it, so concurrent
    /// signups may already be included.
    pub count: i64,
}

#[derive(Clone)]
pub struct WaitlistUseCases {
    repo: Option<Arc<dyn WaitlistRepo>>,
}

impl WaitlistUseCases {
    /// `None` means no store is configured; every store call then fails with
    /// `StoreUnavailable`.
    pub fn new(repo: Option<Arc<dyn WaitlistRepo>>) -> Self {
        Self { repo }
    }

    pub fn is_configured(&self) -> bool {
        self.repo.is_some()
    }

    fn repo(&self) -> AppResult<&Arc<dyn WaitlistRepo>> {
        self.repo
            .as_ref()
            .ok_or_else(|| AppError::StoreUnavailable("waitlist store not configured".into()))
    }

    /// Validates the submission, inserts one row and re-reads the total.
    ///
    /// Validation runs before the store is touched, so bad input never
    /// reaches the store and is reported even when no store is configured.
    #[instrument(skip_all)]
    pub async fn join(&self, submission: WaitlistSubmission) -> AppResult<JoinOutcome> {
        let entry = validate_submission(submission)?;
        let repo = self.repo()?;

        let entry = repo.insert(&entry).await?;
        tracing::info!(entry_id = entry.id, "Waitlist entry created");

        let count = repo.count().await?;
        Ok(JoinOutcome { entry, count })
    }

    #[instrument(skip(self))]
    pub async fn count(&self) -> AppResult<i64> {
        self.repo()?.count().await
    }

    /// Count for decorative display: an unavailable store reads as zero.
    #[instrument(skip(self))]
    pub async fn display_count(&self) -> AppResult<i64> {
        match self.count().await {
            Err(AppError::StoreUnavailable(reason)) => {
                tracing::warn!(%reason, "Waitlist store unavailable, reporting count as 0");
                Ok(0)
            }
            other => other,
        }
    }
}
