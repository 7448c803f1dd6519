//! TMDB adapter. Implements MetadataPort over the TMDB v3 REST API.
//!
//! Search hits /search/movie; details hits /movie/{id} with credits and
//! videos expanded in one call. Every request carries a fixed timeout so a
//! stalled provider degrades instead of blocking the pipeline.

use crate::domain::{CrewMember, DomainError, MovieCandidate, MovieDetails, VideoRef};
use crate::ports::MetadataPort;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

const TMDB_API_URL: &str = "https://api.themoviedb.org/3";

/// TMDB API adapter. Requires an API key from https://www.themoviedb.org.
pub struct TmdbAdapter {
    client: reqwest::Client,
    api_key: String,
}

impl TmdbAdapter {
    /// Create an adapter with the given per-request timeout.
    pub fn new(api_key: String, timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::Metadata(format!("HTTP client build failed: {}", e)))?;
        Ok(Self { client, api_key })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<Option<T>, DomainError> {
        let response = self
            .client
            .get(url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(params)
            .send()
            .await
            .map_err(|e| DomainError::Metadata(format!("request failed: {}", e)))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %text.chars().take(200).collect::<String>(), "TMDB returned error");
            return Err(DomainError::Metadata(format!("API error {}", status)));
        }

        response
            .json::<T>()
            .await
            .map(Some)
            .map_err(|e| DomainError::Metadata(format!("failed to parse response: {}", e)))
    }
}

#[async_trait::async_trait]
impl MetadataPort for TmdbAdapter {
    async fn search(
        &self,
        query: &str,
        year: Option<&str>,
    ) -> Result<Vec<MovieCandidate>, DomainError> {
        let url = format!("{}/search/movie", TMDB_API_URL);
        let mut params = vec![("query", query)];
        if let Some(y) = year {
            params.push(("year", y));
        }

        let response: SearchResponse = self
            .get_json(&url, &params)
            .await?
            .ok_or_else(|| DomainError::Metadata("search endpoint not found".into()))?;

        debug!(query, year, hits = response.results.len(), "TMDB search");

        Ok(response
            .results
            .into_iter()
            .map(|item| MovieCandidate {
                id: item.id,
                title: item.title.unwrap_or_default(),
                release_date: item.release_date.filter(|d| !d.is_empty()),
            })
            .collect())
    }

    async fn details(&self, id: i64) -> Result<Option<MovieDetails>, DomainError> {
        let url = format!("{}/movie/{}", TMDB_API_URL, id);
        let params = [("append_to_response", "videos,credits")];

        let response: Option<DetailsResponse> = self.get_json(&url, &params).await?;
        Ok(response.map(to_domain))
    }
}

fn to_domain(dto: DetailsResponse) -> MovieDetails {
    let credits = dto.credits.unwrap_or_default();
    MovieDetails {
        title: dto.title.unwrap_or_default(),
        poster_path: dto.poster_path.filter(|p| !p.is_empty()),
        backdrop_path: dto.backdrop_path.filter(|p| !p.is_empty()),
        overview: dto.overview,
        release_date: dto.release_date.filter(|d| !d.is_empty()),
        runtime: dto.runtime,
        vote_average: dto.vote_average,
        tagline: dto.tagline,
        genres: dto.genres.into_iter().filter_map(|g| g.name).collect(),
        cast: credits
            .cast
            .into_iter()
            .filter_map(|member| member.name)
            .collect(),
        crew: credits
            .crew
            .into_iter()
            .filter_map(|member| {
                Some(CrewMember {
                    name: member.name?,
                    job: member.job.unwrap_or_default(),
                })
            })
            .collect(),
        videos: dto
            .videos
            .unwrap_or_default()
            .results
            .into_iter()
            .map(|v| VideoRef {
                key: v.key.unwrap_or_default(),
                site: v.site.unwrap_or_default(),
                kind: v.kind.unwrap_or_default(),
            })
            .collect(),
    }
}

/// TMDB API response structures.
#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchItem>,
}

#[derive(Deserialize)]
struct SearchItem {
    id: i64,
    title: Option<String>,
    release_date: Option<String>,
}

#[derive(Deserialize)]
struct DetailsResponse {
    title: Option<String>,
    poster_path: Option<String>,
    backdrop_path: Option<String>,
    overview: Option<String>,
    release_date: Option<String>,
    runtime: Option<i64>,
    vote_average: Option<f64>,
    tagline: Option<String>,
    #[serde(default)]
    genres: Vec<GenreItem>,
    credits: Option<CreditsItem>,
    videos: Option<VideosItem>,
}

#[derive(Deserialize)]
struct GenreItem {
    name: Option<String>,
}

#[derive(Deserialize, Default)]
struct CreditsItem {
    #[serde(default)]
    cast: Vec<CastItem>,
    #[serde(default)]
    crew: Vec<CrewItem>,
}

#[derive(Deserialize)]
struct CastItem {
    name: Option<String>,
}

#[derive(Deserialize)]
struct CrewItem {
    name: Option<String>,
    job: Option<String>,
}

#[derive(Deserialize, Default)]
struct VideosItem {
    #[serde(default)]
    results: Vec<VideoItem>,
}

#[derive(Deserialize)]
struct VideoItem {
    key: Option<String>,
    site: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details_mapping_from_api_json() {
        let json = r#"{
            "title": "Inception",
            "poster_path": "/poster.jpg",
            "backdrop_path": "",
            "overview": "A thief.",
            "release_date": "2010-07-16",
            "runtime": 148,
            "vote_average": 8.4,
            "tagline": "Your mind is the scene of the crime.",
            "genres": [{"id": 28, "name": "Action"}, {"id": 878, "name": "Science Fiction"}],
            "credits": {
                "cast": [{"name": "Leonardo DiCaprio"}, {"name": null}],
                "crew": [{"name": "Christopher Nolan", "job": "Director"}]
            },
            "videos": {"results": [{"key": "abc", "site": "YouTube", "type": "Trailer"}]}
        }"#;
        let dto: DetailsResponse = serde_json::from_str(json).unwrap();
        let details = to_domain(dto);

        assert_eq!(details.title, "Inception");
        assert_eq!(details.poster_path.as_deref(), Some("/poster.jpg"));
        assert_eq!(details.backdrop_path, None);
        assert_eq!(details.runtime, Some(148));
        assert_eq!(details.genres, vec!["Action", "Science Fiction"]);
        assert_eq!(details.cast, vec!["Leonardo DiCaprio"]);
        assert_eq!(details.crew[0].job, "Director");
        assert_eq!(details.videos[0].kind, "Trailer");
    }

    #[test]
    fn test_details_mapping_tolerates_missing_sections() {
        let dto: DetailsResponse = serde_json::from_str(r#"{"title": "Bare"}"#).unwrap();
        let details = to_domain(dto);

        assert_eq!(details.title, "Bare");
        assert!(details.cast.is_empty());
        assert!(details.videos.is_empty());
        assert_eq!(details.release_date, None);
        assert_eq!(details.runtime, None);
    }
}
