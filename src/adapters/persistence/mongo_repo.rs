//! MongoDB repository. Implements MovieRepoPort over a typed collection.
//!
//! Uses find_one_and_replace with upsert so concurrent writers targeting
//! the same (title, releaseDate) key leave exactly one surviving record.
//! Records are written as whole documents, so the field order of
//! `MovieRecord` is the order persisted.

use crate::domain::{DomainError, MovieRecord};
use crate::ports::MovieRepoPort;
use mongodb::bson::doc;
use mongodb::options::ReturnDocument;
use mongodb::{Client, Collection};
use tracing::info;

/// Movie collection handle. Connect once at startup and share via Arc.
pub struct MongoMovieRepo {
    collection: Collection<MovieRecord>,
}

impl MongoMovieRepo {
    /// Connect to the store and verify it is reachable.
    /// A bad URI or unreachable server fails here, before any post is consumed.
    pub async fn connect(uri: &str, db_name: &str, coll_name: &str) -> Result<Self, DomainError> {
        let client = Client::with_uri_str(uri)
            .await
            .map_err(|e| DomainError::Store(e.to_string()))?;
        let database = client.database(db_name);
        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| DomainError::Store(format!("ping failed: {}", e)))?;

        info!(db = db_name, collection = coll_name, "MongoDB connected");

        Ok(Self {
            collection: database.collection(coll_name),
        })
    }
}

#[async_trait::async_trait]
impl MovieRepoPort for MongoMovieRepo {
    async fn find_by_key(
        &self,
        title: &str,
        release_date: &str,
    ) -> Result<Option<MovieRecord>, DomainError> {
        self.collection
            .find_one(doc! { "title": title, "releaseDate": release_date })
            .await
            .map_err(|e| DomainError::Store(e.to_string()))
    }

    async fn replace_upsert(&self, record: MovieRecord) -> Result<MovieRecord, DomainError> {
        let filter = doc! { "title": &record.title, "releaseDate": &record.release_date };
        self.collection
            .find_one_and_replace(filter, &record)
            .upsert(true)
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| DomainError::Store(e.to_string()))?
            .ok_or_else(|| DomainError::Store("upsert returned no document".into()))
    }
}
