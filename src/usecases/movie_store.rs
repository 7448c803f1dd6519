//! Upsert store: replace-or-insert keyed by (title, releaseDate),
//! preserving the original `createdAt` across updates.

use crate::domain::{DomainError, MovieRecord};
use crate::ports::MovieRepoPort;
use std::sync::Arc;
use tracing::debug;

/// Wraps the repository port with the creation-timestamp carry-forward.
/// The replace-or-insert itself relies on the store's native atomicity.
pub struct MovieStore {
    repo: Arc<dyn MovieRepoPort>,
}

impl MovieStore {
    pub fn new(repo: Arc<dyn MovieRepoPort>) -> Self {
        Self { repo }
    }

    /// Persist the record under its (title, releaseDate) key.
    ///
    /// When a record already exists under that key, its `createdAt` is
    /// copied into the incoming record before the replace, so the creation
    /// timestamp survives updates. Returns the stored record.
    pub async fn upsert(&self, mut record: MovieRecord) -> Result<MovieRecord, DomainError> {
        if let Some(existing) = self
            .repo
            .find_by_key(&record.title, &record.release_date)
            .await?
        {
            if !existing.created_at.is_empty() {
                debug!(
                    title = %record.title,
                    created_at = %existing.created_at,
                    "existing record found, preserving createdAt"
                );
                record.created_at = existing.created_at;
            }
        }
        self.repo.replace_upsert(record).await
    }
}
