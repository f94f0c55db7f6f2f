//! Unsplash API client for photo search and random lookups.
//!
//! Uses async reqwest for non-blocking HTTP requests. The base URL is
//! passed in by the caller so tests can point requests at a mock server.

use reqwest::Client;
use serde::Deserialize;

use crate::error::{LookupError, LookupResult};
use crate::models::{Orientation, Photo, SearchOptions};

/// Production API root
pub const UNSPLASH_API_URL: &str = "https://api.unsplash.com";

const USER_AGENT: &str = "ImageLookup/1.0";

/// Successful `/search/photos` response body
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    pub results: Vec<Photo>,
}

/// `/photos/random` answers with a single photo object or a list of them,
/// depending on the request; both shapes are accepted.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RandomResponse {
    Many(Vec<Photo>),
    One(Box<Photo>),
}

impl RandomResponse {
    /// Normalize either response shape into a list
    pub(crate) fn into_photos(self) -> Vec<Photo> {
        match self {
            RandomResponse::Many(photos) => photos,
            RandomResponse::One(photo) => vec![*photo],
        }
    }
}

/// Unsplash error response body
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub errors: Vec<String>,
}

/// Search photos matching `query`, with `options.category` appended to the
/// query string when present
pub(crate) async fn search_photos(
    client: &Client,
    base_url: &str,
    access_key: &str,
    query: &str,
    options: &SearchOptions,
) -> LookupResult<Vec<Photo>> {
    let search_query = match options.category.as_deref() {
        Some(category) => format!("{query} {category}"),
        None => query.to_string(),
    };

    log::debug!("Searching photos for {search_query:?}");

    let mut params: Vec<(&str, String)> = vec![
        ("client_id", access_key.to_string()),
        ("query", search_query),
        ("per_page", options.count.to_string()),
        ("orientation", options.orientation.as_str().to_string()),
    ];
    if let Some(color) = options.color.as_deref() {
        params.push(("color", color.to_string()));
    }
    if options.featured {
        params.push(("featured", "true".to_string()));
    }

    let response = client
        .get(format!("{base_url}/search/photos"))
        .header("User-Agent", USER_AGENT)
        .query(&params)
        .send()
        .await?;

    let body = read_success_body(response).await?;
    let parsed: SearchResponse = serde_json::from_str(&body)?;
    Ok(parsed.results)
}

/// Fetch random photos, optionally scoped to a category
pub(crate) async fn random_photos(
    client: &Client,
    base_url: &str,
    access_key: &str,
    category: Option<&str>,
    count: u32,
) -> LookupResult<Vec<Photo>> {
    log::debug!("Fetching {count} random photos (category: {category:?})");

    let mut params: Vec<(&str, String)> = vec![
        ("client_id", access_key.to_string()),
        ("count", count.to_string()),
        ("orientation", Orientation::Landscape.as_str().to_string()),
    ];
    if let Some(category) = category {
        params.push(("query", category.to_string()));
    }

    let response = client
        .get(format!("{base_url}/photos/random"))
        .header("User-Agent", USER_AGENT)
        .query(&params)
        .send()
        .await?;

    let body = read_success_body(response).await?;
    let parsed: RandomResponse = serde_json::from_str(&body)?;
    Ok(parsed.into_photos())
}

/// Read the body of a successful response; map a non-2xx status to an
/// error, extracting the API error message when the body carries one
async fn read_success_body(response: reqwest::Response) -> LookupResult<String> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.text().await?);
    }

    let body = response.text().await.unwrap_or_default();
    match serde_json::from_str::<ApiErrorBody>(&body) {
        Ok(parsed) => Err(LookupError::Api {
            status,
            message: parsed.errors.join("; "),
        }),
        Err(_) => Err(LookupError::HttpStatus(status)),
    }
}

#[cfg(test)]
#[path = "unsplash_tests.rs"]
mod tests;
