//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, MovieCandidate, MovieDetails, MovieRecord};

/// Movie metadata provider. Search candidates, then fetch details.
///
/// Failures surface as errors; the caller decides whether a failed call
/// degrades to "no results" or abandons the write.
#[async_trait::async_trait]
pub trait MetadataPort: Send + Sync {
    /// Search by title, optionally constrained to a release year.
    /// Returns candidates in the provider's order; possibly empty.
    async fn search(
        &self,
        query: &str,
        year: Option<&str>,
    ) -> Result<Vec<MovieCandidate>, DomainError>;

    /// Fetch full details (cast, crew, genres, videos) for a candidate.
    /// `Ok(None)` means the provider has no such movie.
    async fn details(&self, id: i64) -> Result<Option<MovieDetails>, DomainError>;
}

/// Movie repository. Keyed by (title, releaseDate).
#[async_trait::async_trait]
pub trait MovieRepoPort: Send + Sync {
    /// Look up the record stored under the given key.
    async fn find_by_key(
        &self,
        title: &str,
        release_date: &str,
    ) -> Result<Option<MovieRecord>, DomainError>;

    /// Atomically replace the record under the incoming record's key, or
    /// insert it when absent. Returns the stored record, including any
    /// store-assigned identifier.
    async fn replace_upsert(&self, record: MovieRecord) -> Result<MovieRecord, DomainError>;
}
