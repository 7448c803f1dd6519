//! In-memory repository. Same contract as the Mongo adapter, no server.
//!
//! Used by unit tests; the upsert logic is exercised against this.

use crate::domain::{DomainError, MovieRecord};
use crate::ports::MovieRepoPort;
use mongodb::bson::oid::ObjectId;
use tokio::sync::Mutex;

/// Vec-backed store keyed by (title, releaseDate). The mutex makes each
/// operation atomic, mirroring the document store's upsert guarantee.
#[derive(Default)]
pub struct InMemoryMovieRepo {
    records: Mutex<Vec<MovieRecord>>,
}

impl InMemoryMovieRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.lock().await.len()
    }
}

#[async_trait::async_trait]
impl MovieRepoPort for InMemoryMovieRepo {
    async fn find_by_key(
        &self,
        title: &str,
        release_date: &str,
    ) -> Result<Option<MovieRecord>, DomainError> {
        let records = self.records.lock().await;
        Ok(records
            .iter()
            .find(|r| r.title == title && r.release_date == release_date)
            .cloned())
    }

    async fn replace_upsert(&self, mut record: MovieRecord) -> Result<MovieRecord, DomainError> {
        let mut records = self.records.lock().await;
        let existing = records
            .iter()
            .position(|r| r.title == record.title && r.release_date == record.release_date);
        match existing {
            Some(idx) => {
                record.id = records[idx].id.or_else(|| Some(ObjectId::new()));
                records[idx] = record.clone();
            }
            None => {
                record.id = Some(ObjectId::new());
                records.push(record.clone());
            }
        }
        Ok(record)
    }
}
