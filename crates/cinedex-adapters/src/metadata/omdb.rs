//! OMDb API client.
//!
//! One blocking GET per lookup: `?apikey=KEY&t=TITLE`. OMDb reports
//! "unknown title" inside a 200 response (`"Response": "False"`), which
//! maps to `Ok(None)` on the port; only transport and decoding failures
//! are errors.

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, instrument};

use cinedex_core::{
    application::{ApplicationError, ports::MetadataSource},
    domain::Movie,
    error::{CoreError, CoreResult},
};

const DEFAULT_BASE_URL: &str = "http://www.omdbapi.com/";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Movie metadata source backed by <https://www.omdbapi.com>.
pub struct OmdbClient {
    http: reqwest::blocking::Client,
    api_key: String,
    base_url: String,
}

impl OmdbClient {
    /// Build a client for the public OMDb endpoint.
    pub fn new(api_key: impl Into<String>) -> CoreResult<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Build a client against a custom endpoint (used by tests).
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> CoreResult<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                CoreError::Application(ApplicationError::Network {
                    reason: format!("failed to build HTTP client: {e}"),
                })
            })?;
        Ok(Self {
            http,
            api_key: api_key.into(),
            base_url: base_url.into(),
        })
    }
}

impl MetadataSource for OmdbClient {
    #[instrument(skip(self))]
    fn lookup(&self, title: &str) -> CoreResult<Option<Movie>> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[("apikey", self.api_key.as_str()), ("t", title)])
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| ApplicationError::Network {
                reason: e.to_string(),
            })?;

        let body: OmdbResponse = response.json().map_err(|e| ApplicationError::Network {
            reason: format!("failed to decode OMDb response: {e}"),
        })?;

        if body.response != "True" {
            debug!(title, error = body.error.as_deref(), "OMDb has no match");
            return Ok(None);
        }

        Ok(Some(movie_from_response(title, body)))
    }
}

/// Raw OMDb payload; every field except `Response` may be absent.
#[derive(Debug, Deserialize)]
struct OmdbResponse {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Title")]
    title: Option<String>,
    #[serde(rename = "Year")]
    year: Option<String>,
    #[serde(rename = "imdbRating")]
    imdb_rating: Option<String>,
    #[serde(rename = "Poster")]
    poster: Option<String>,
    #[serde(rename = "Error")]
    error: Option<String>,
}

/// Map a positive OMDb response onto a record with fixed fallbacks:
/// rating 0.0 when "N/A", empty poster when "N/A", year from the leading
/// digits (series report spans like "2019-2022"), 0 when unparseable.
fn movie_from_response(requested_title: &str, body: OmdbResponse) -> Movie {
    let title = body
        .title
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| requested_title.to_string());

    let year = body
        .year
        .as_deref()
        .map(leading_year)
        .unwrap_or(0);

    let rating = body
        .imdb_rating
        .as_deref()
        .filter(|r| *r != "N/A")
        .and_then(|r| r.parse::<f64>().ok())
        .unwrap_or(0.0);

    let poster = body
        .poster
        .filter(|p| p != "N/A")
        .unwrap_or_default();

    Movie::new(title, year, rating, poster)
}

fn leading_year(raw: &str) -> i32 {
    let digits: String = raw.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

// ── tests ─────────────────────────────────────────────────────────────────────
