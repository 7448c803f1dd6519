//! Ingest use case: one channel post in, at most one record out.
//!
//! Orchestrates caption parsing, the metadata search fallback chain,
//! record building, and the upsert. Failed external calls degrade per
//! policy: a failed search counts as "no results", a failed details fetch
//! abandons the write. Nothing is reported back to the channel.

use crate::domain::record::{build_full, build_minimal};
use crate::domain::{classify_category, parse_caption, DomainError, IncomingPost, MovieCandidate};
use crate::ports::MetadataPort;
use crate::usecases::movie_store::MovieStore;
use std::sync::Arc;
use tracing::{info, warn};

/// Message handler. One instance serves all posts; holds no mutable state.
pub struct IngestService {
    metadata: Arc<dyn MetadataPort>,
    store: MovieStore,
}

impl IngestService {
    pub fn new(metadata: Arc<dyn MetadataPort>, store: MovieStore) -> Self {
        Self { metadata, store }
    }

    /// Process one media post end to end.
    ///
    /// Search order: parsed title + year (when a year was found), then
    /// parsed title alone, then the raw caption when it differs. No hits
    /// at all take the minimal-record path; a chosen candidate whose
    /// details cannot be fetched abandons the write entirely.
    pub async fn handle_post(&self, post: IncomingPost) -> Result<(), DomainError> {
        let caption = post.caption.as_str();
        let parsed = parse_caption(caption);
        let category = classify_category(caption);

        let title_for_search = if parsed.title.is_empty() {
            caption
        } else {
            parsed.title.as_str()
        };

        let mut candidates = Vec::new();
        if let Some(year) = parsed.year.as_deref() {
            candidates = self.search_or_empty(title_for_search, Some(year)).await;
        }
        if candidates.is_empty() {
            candidates = self.search_or_empty(title_for_search, None).await;
        }
        if candidates.is_empty() && !caption.is_empty() && caption != title_for_search {
            candidates = self.search_or_empty(caption, None).await;
        }

        let Some(candidate) = candidates.into_iter().next() else {
            info!(caption, "no metadata match, writing minimal record");
            let record = build_minimal(&parsed, caption, &post.media_file_id, category);
            let stored = self.store.upsert(record).await?;
            info!(title = %stored.title, record_id = ?stored.id, "saved minimal record");
            return Ok(());
        };

        let details = match self.metadata.details(candidate.id).await {
            Ok(Some(details)) => details,
            Ok(None) => {
                info!(
                    tmdb_id = candidate.id,
                    "metadata details unavailable, abandoning write"
                );
                return Ok(());
            }
            Err(e) => {
                warn!(
                    tmdb_id = candidate.id,
                    error = %e,
                    "details fetch failed, abandoning write"
                );
                return Ok(());
            }
        };

        let record = build_full(&details, &parsed.title, &post.media_file_id, category);
        let stored = self.store.upsert(record).await?;
        info!(title = %stored.title, record_id = ?stored.id, "saved movie record");
        Ok(())
    }

    /// One best-effort search; a failed call is logged and counts as empty.
    async fn search_or_empty(&self, query: &str, year: Option<&str>) -> Vec<MovieCandidate> {
        match self.metadata.search(query, year).await {
            Ok(candidates) => candidates,
            Err(e) => {
                warn!(query, error = %e, "metadata search failed, treating as no results");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::persistence::memory_repo::InMemoryMovieRepo;
    use crate::domain::{Category, MediaKind, MovieDetails};
    use crate::ports::MovieRepoPort;
    use std::collections::VecDeque;
    use tokio::sync::Mutex;

    /// Scripted metadata port: pops one canned response per search call
    /// (missing entries count as empty) and records the queries it saw.
    struct ScriptedMetadata {
        searches: Mutex<VecDeque<Result<Vec<MovieCandidate>, DomainError>>>,
        details: Mutex<Option<Result<Option<MovieDetails>, DomainError>>>,
        seen_queries: Mutex<Vec<(String, Option<String>)>>,
    }

    impl ScriptedMetadata {
        fn new(
            searches: Vec<Result<Vec<MovieCandidate>, DomainError>>,
            details: Option<Result<Option<MovieDetails>, DomainError>>,
        ) -> Self {
            Self {
                searches: Mutex::new(searches.into()),
                details: Mutex::new(details),
                seen_queries: Mutex::new(Vec::new()),
            }
        }

        async fn seen(&self) -> Vec<(String, Option<String>)> {
            self.seen_queries.lock().await.clone()
        }
    }

    #[async_trait::async_trait]
    impl MetadataPort for ScriptedMetadata {
        async fn search(
            &self,
            query: &str,
            year: Option<&str>,
        ) -> Result<Vec<MovieCandidate>, DomainError> {
            self.seen_queries
                .lock()
                .await
                .push((query.to_string(), year.map(String::from)));
            self.searches
                .lock()
                .await
                .pop_front()
                .unwrap_or_else(|| Ok(Vec::new()))
        }

        async fn details(&self, _id: i64) -> Result<Option<MovieDetails>, DomainError> {
            self.details
                .lock()
                .await
                .take()
                .expect("details called more than once or without a script")
        }
    }

    fn candidate() -> MovieCandidate {
        MovieCandidate {
            id: 27205,
            title: "Inception".into(),
            release_date: Some("2010-07-16".into()),
        }
    }

    fn details() -> MovieDetails {
        MovieDetails {
            title: "Inception".into(),
            release_date: Some("2010-07-16".into()),
            vote_average: Some(8.4),
            ..Default::default()
        }
    }

    fn post(caption: &str) -> IncomingPost {
        IncomingPost {
            media_file_id: "file-42".into(),
            media_kind: MediaKind::Video,
            caption: caption.into(),
        }
    }

    fn service(
        metadata: Arc<ScriptedMetadata>,
        repo: Arc<InMemoryMovieRepo>,
    ) -> IngestService {
        IngestService::new(metadata, MovieStore::new(repo))
    }

    #[tokio::test]
    async fn test_all_searches_empty_takes_minimal_path() {
        let metadata = Arc::new(ScriptedMetadata::new(vec![], None));
        let repo = Arc::new(InMemoryMovieRepo::new());
        let svc = service(metadata.clone(), repo.clone());

        svc.handle_post(post("Unknown Film 2019")).await.unwrap();

        assert_eq!(
            metadata.seen().await,
            vec![
                ("Unknown Film".into(), Some("2019".into())),
                ("Unknown Film".into(), None),
                ("Unknown Film 2019".into(), None),
            ]
        );
        let stored = repo
            .find_by_key("Unknown Film", "2019")
            .await
            .unwrap()
            .expect("minimal record stored");
        assert_eq!(stored.poster_url, "");
        assert_eq!(stored.rating, 0.0);
        assert_eq!(stored.telegram_links, vec!["file-42"]);
    }

    #[tokio::test]
    async fn test_first_hit_skips_remaining_searches() {
        let metadata = Arc::new(ScriptedMetadata::new(
            vec![Ok(vec![candidate()])],
            Some(Ok(Some(details()))),
        ));
        let repo = Arc::new(InMemoryMovieRepo::new());
        let svc = service(metadata.clone(), repo.clone());

        svc.handle_post(post("Inception 2010")).await.unwrap();

        assert_eq!(metadata.seen().await.len(), 1);
        let stored = repo
            .find_by_key("Inception", "2010-07-16")
            .await
            .unwrap()
            .expect("full record stored");
        assert_eq!(stored.rating, 8.4);
    }

    #[tokio::test]
    async fn test_details_error_abandons_write() {
        let metadata = Arc::new(ScriptedMetadata::new(
            vec![Ok(vec![candidate()])],
            Some(Err(DomainError::Metadata("timeout".into()))),
        ));
        let repo = Arc::new(InMemoryMovieRepo::new());
        let svc = service(metadata, repo.clone());

        svc.handle_post(post("Inception 2010")).await.unwrap();

        assert_eq!(repo.len().await, 0);
    }

    #[tokio::test]
    async fn test_details_absent_abandons_write() {
        let metadata = Arc::new(ScriptedMetadata::new(
            vec![Ok(vec![candidate()])],
            Some(Ok(None)),
        ));
        let repo = Arc::new(InMemoryMovieRepo::new());
        let svc = service(metadata, repo.clone());

        svc.handle_post(post("Inception 2010")).await.unwrap();

        assert_eq!(repo.len().await, 0);
    }

    #[tokio::test]
    async fn test_search_error_counts_as_empty_and_falls_back() {
        let metadata = Arc::new(ScriptedMetadata::new(
            vec![
                Err(DomainError::Metadata("503".into())),
                Ok(vec![candidate()]),
            ],
            Some(Ok(Some(details()))),
        ));
        let repo = Arc::new(InMemoryMovieRepo::new());
        let svc = service(metadata.clone(), repo.clone());

        svc.handle_post(post("Inception 2010")).await.unwrap();

        assert_eq!(
            metadata.seen().await,
            vec![
                ("Inception".into(), Some("2010".into())),
                ("Inception".into(), None),
            ]
        );
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_no_raw_caption_search_when_identical_to_title() {
        let metadata = Arc::new(ScriptedMetadata::new(vec![], None));
        let repo = Arc::new(InMemoryMovieRepo::new());
        let svc = service(metadata.clone(), repo.clone());

        svc.handle_post(post("Inception")).await.unwrap();

        // No year, and the caption parses to itself: a single search.
        assert_eq!(metadata.seen().await, vec![("Inception".into(), None)]);
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_category_from_caption_reaches_record() {
        let metadata = Arc::new(ScriptedMetadata::new(vec![], None));
        let repo = Arc::new(InMemoryMovieRepo::new());
        let svc = service(metadata, repo.clone());

        svc.handle_post(post("Jailer Tamil Full Movie")).await.unwrap();

        let stored = repo
            .find_by_key("Jailer Tamil Full Movie", "")
            .await
            .unwrap()
            .expect("minimal record stored");
        assert_eq!(stored.category, Category::South);
    }
}
