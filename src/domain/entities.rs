//! Domain entities. Pure data structures for the core business.
//!
//! No Telegram/HTTP types here — these are mapped from adapters.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A channel post carrying indexable media. Mapped from the Telegram adapter.
#[derive(Debug, Clone)]
pub struct IncomingPost {
    /// Opaque file identifier for the attached media.
    pub media_file_id: String,
    pub media_kind: MediaKind,
    /// Raw caption text; empty when the post has none.
    pub caption: String,
}

/// Media kinds we index. Posts with anything else are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Video,
    Document,
}

/// Title and year extracted from a raw caption. Not persisted directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCaption {
    pub title: String,
    pub year: Option<String>,
}

/// Content category derived from caption keywords.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Hollywood,
    Bollywood,
    South,
}

/// The persisted movie record.
///
/// Field declaration order is the persisted field order — downstream
/// consumers read these records positionally. Do not reorder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieRecord {
    /// Store-assigned identifier; present only on records read back.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub poster_url: String,
    pub backdrop_url: String,
    pub description: String,
    pub category: Category,
    /// Comma-joined cast names, capped to the first ten.
    pub actors: String,
    pub director: String,
    pub producer: String,
    pub rating: f64,
    pub download_links: Vec<String>,
    pub telegram_links: Vec<String>,
    /// Series seasons; always empty for channel movie posts.
    pub seasons: Vec<serde_json::Value>,
    pub trailer_link: String,
    pub genres: Vec<String>,
    /// ISO date, or the parsed year alone for minimal records, or empty.
    pub release_date: String,
    /// Minutes.
    pub runtime: i64,
    pub tagline: String,
    /// Set on first creation, carried forward across updates.
    pub created_at: String,
    pub updated_at: String,
    pub schema_version: i32,
}

/// One search hit from the metadata provider, in provider order.
#[derive(Debug, Clone)]
pub struct MovieCandidate {
    pub id: i64,
    pub title: String,
    pub release_date: Option<String>,
}

/// Full metadata for a chosen candidate.
#[derive(Debug, Clone, Default)]
pub struct MovieDetails {
    pub title: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub overview: Option<String>,
    pub release_date: Option<String>,
    pub runtime: Option<i64>,
    pub vote_average: Option<f64>,
    pub tagline: Option<String>,
    /// Genre names only.
    pub genres: Vec<String>,
    /// Cast names in the provider's credit order.
    pub cast: Vec<String>,
    /// Crew in the provider's own ordering.
    pub crew: Vec<CrewMember>,
    pub videos: Vec<VideoRef>,
}

#[derive(Debug, Clone)]
pub struct CrewMember {
    pub name: String,
    pub job: String,
}

/// A hosted video attached to the metadata (trailers, teasers, ...).
#[derive(Debug, Clone)]
pub struct VideoRef {
    pub key: String,
    pub site: String,
    pub kind: String,
}
