//! Record Builder: assembles the persisted `MovieRecord`.
//!
//! Full mode derives every field from provider metadata; minimal mode uses
//! only the parsed caption. Numeric fields coerce missing values to zero
//! rather than failing. Timestamps are stamped at construction; the store
//! overrides `createdAt` when a prior record exists.

use crate::domain::entities::{Category, MovieDetails, MovieRecord, ParsedCaption};
use chrono::{SecondsFormat, Utc};

const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/original";
const YOUTUBE_WATCH_URL: &str = "https://www.youtube.com/watch?v=";

/// Cast names kept in the comma-joined `actors` field.
const MAX_ACTORS: usize = 10;

/// Build a record from full provider metadata.
pub fn build_full(
    details: &MovieDetails,
    parsed_title: &str,
    file_id: &str,
    category: Category,
) -> MovieRecord {
    let now = now_utc();

    let title = if parsed_title.is_empty() {
        details.title.clone()
    } else {
        parsed_title.to_string()
    };

    let actors = details
        .cast
        .iter()
        .take(MAX_ACTORS)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");

    MovieRecord {
        id: None,
        title,
        poster_url: image_url(details.poster_path.as_deref()),
        backdrop_url: image_url(details.backdrop_path.as_deref()),
        description: details.overview.clone().unwrap_or_default(),
        category,
        actors,
        director: first_crew_with_job(details, "director"),
        producer: first_crew_with_job(details, "producer"),
        rating: details.vote_average.unwrap_or(0.0),
        download_links: Vec::new(),
        telegram_links: vec![file_id.to_string()],
        seasons: Vec::new(),
        trailer_link: trailer_url(details),
        genres: details.genres.clone(),
        release_date: details.release_date.clone().unwrap_or_default(),
        runtime: details.runtime.unwrap_or(0),
        tagline: details.tagline.clone().unwrap_or_default(),
        created_at: now.clone(),
        updated_at: now,
        schema_version: 0,
    }
}

/// Build a record with no provider metadata at all.
///
/// Title falls back to the raw caption when parsing produced nothing;
/// `releaseDate` holds the parsed year alone, if any.
pub fn build_minimal(
    parsed: &ParsedCaption,
    caption: &str,
    file_id: &str,
    category: Category,
) -> MovieRecord {
    let now = now_utc();

    let title = if parsed.title.is_empty() {
        caption.to_string()
    } else {
        parsed.title.clone()
    };

    MovieRecord {
        id: None,
        title,
        poster_url: String::new(),
        backdrop_url: String::new(),
        description: String::new(),
        category,
        actors: String::new(),
        director: String::new(),
        producer: String::new(),
        rating: 0.0,
        download_links: Vec::new(),
        telegram_links: vec![file_id.to_string()],
        seasons: Vec::new(),
        trailer_link: String::new(),
        genres: Vec::new(),
        release_date: parsed.year.clone().unwrap_or_default(),
        runtime: 0,
        tagline: String::new(),
        created_at: now.clone(),
        updated_at: now,
        schema_version: 0,
    }
}

/// Full image URL for a provider image path; empty when there is none.
pub fn image_url(path: Option<&str>) -> String {
    match path {
        Some(p) if !p.is_empty() => format!("{}{}", IMAGE_BASE_URL, p),
        _ => String::new(),
    }
}

/// Name of the first crew member whose job equals `job` (case-insensitive),
/// in the provider's own ordering. Empty when none match.
fn first_crew_with_job(details: &MovieDetails, job: &str) -> String {
    details
        .crew
        .iter()
        .find(|m| m.job.to_lowercase() == job)
        .map(|m| m.name.clone())
        .unwrap_or_default()
}

/// Watch URL of the first YouTube-hosted trailer; empty when none exists.
fn trailer_url(details: &MovieDetails) -> String {
    details
        .videos
        .iter()
        .find(|v| {
            v.kind.eq_ignore_ascii_case("trailer")
                && v.site.eq_ignore_ascii_case("youtube")
                && !v.key.is_empty()
        })
        .map(|v| format!("{}{}", YOUTUBE_WATCH_URL, v.key))
        .unwrap_or_default()
}

/// Current UTC time as ISO 8601 with a `Z` suffix.
fn now_utc() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}
