//! Movie metadata lookup against a TMDB-style search endpoint.
//!
//! The client is deliberately minimal: one GET per call, no caching, no
//! retry, no client-side rate limiting (the interactive prompt debounces
//! instead, see [`crate::lookup`]). Every failure mode — missing key, empty
//! query, transport error, non-2xx status, malformed body — degrades to an
//! empty candidate list; a lookup can never fail the flow that asked for it.

use serde::Deserialize;

/// A candidate match returned by the metadata provider. Results only ever
/// pre-fill the movie form; nothing is persisted until the user accepts one.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieCandidate {
    pub tmdb_id: i64,
    pub title: String,
    /// Raw release date text from the provider, e.g. "2021-10-22".
    pub release_date: String,
    pub poster_path: Option<String>,
}

impl MovieCandidate {
    /// The year portion of the release date, if any.
    pub fn release_year(&self) -> &str {
        self.release_date.split('-').next().unwrap_or_default()
    }
}

/// Seam for the lookup session and its tests.
pub trait MetadataSearch {
    fn search(&self, query: &str) -> Vec<MovieCandidate>;
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    id: i64,
    title: String,
    #[serde(default)]
    release_date: String,
    #[serde(default)]
    poster_path: Option<String>,
}

pub struct TmdbClient {
    api_url: String,
    api_key: Option<String>,
    client: reqwest::blocking::Client,
}

impl TmdbClient {
    pub fn new(api_url: String, api_key: Option<String>) -> Self {
        Self {
            api_url,
            api_key,
            client: reqwest::blocking::Client::new(),
        }
    }

    fn request(&self, key: &str, query: &str) -> reqwest::Result<SearchResponse> {
        let url = format!("{}/search/movie", self.api_url);
        self.client
            .get(&url)
            .query(&[("api_key", key), ("query", query)])
            .send()?
            .error_for_status()?
            .json::<SearchResponse>()
    }
}

impl MetadataSearch for TmdbClient {
    fn search(&self, query: &str) -> Vec<MovieCandidate> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }
        let Some(key) = self.api_key.as_deref() else {
            tracing::debug!("no metadata api key configured, skipping lookup");
            return Vec::new();
        };

        match self.request(key, query) {
            Ok(response) => response
                .results
                .into_iter()
                .map(|r| MovieCandidate {
                    tmdb_id: r.id,
                    title: r.title,
                    release_date: r.release_date,
                    poster_path: r.poster_path,
                })
                .collect(),
            Err(e) => {
                tracing::warn!(query, error = %e, "metadata search failed");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_returns_empty_without_key_needed() {
        let client = TmdbClient::new("http://127.0.0.1:1".to_string(), Some("k".to_string()));
        assert!(client.search("").is_empty());
        assert!(client.search("   ").is_empty());
    }

    #[test]
    fn missing_key_returns_empty() {
        let client = TmdbClient::new("http://127.0.0.1:1".to_string(), None);
        assert!(client.search("dune").is_empty());
    }

    #[test]
    fn transport_failure_returns_empty() {
        // Nothing listens on port 1; the connection fails immediately.
        let client = TmdbClient::new("http://127.0.0.1:1".to_string(), Some("k".to_string()));
        assert!(client.search("dune").is_empty());
    }

    #[test]
    fn release_year_comes_from_date_text() {
        let candidate = MovieCandidate {
            tmdb_id: 438631,
            title: "Dune".to_string(),
            release_date: "2021-10-22".to_string(),
            poster_path: None,
        };
        assert_eq!(candidate.release_year(), "2021");

        let undated = MovieCandidate {
            release_date: String::new(),
            ..candidate
        };
        assert_eq!(undated.release_year(), "");
    }

    #[test]
    fn response_body_parses_provider_shape() {
        let body = r#"{
            "page": 1,
            "results": [
                {"id": 438631, "title": "Dune", "release_date": "2021-10-22",
                 "poster_path": "/d5NXSklXo0qyIYkgV94XAgMIckC.jpg", "vote_average": 7.8},
                {"id": 841, "title": "Dune", "release_date": "1984-12-14", "poster_path": null}
            ],
            "total_results": 2
        }"#;
        let parsed: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.results.len(), 2);
        assert_eq!(parsed.results[0].id, 438631);
        assert!(parsed.results[1].poster_path.is_none());
    }
}
