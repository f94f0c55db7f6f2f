//! Image lookup service tying together the remote API, the result cache
//! and the placeholder fallback.
//!
//! This is the single point of access for landing page imagery: callers ask
//! for search results or random galleries and always get a usable photo
//! list back, remote hiccups included.

use std::env;

use chrono::Duration;
use reqwest::Client;

use crate::api::unsplash::{self, UNSPLASH_API_URL};
use crate::cache::{CacheStats, PhotoCache};
use crate::error::LookupResult;
use crate::models::{ImageSize, Photo, SearchOptions};

/// Environment variable holding the Unsplash access key.
pub const ACCESS_KEY_ENV: &str = "UNSPLASH_ACCESS_KEY";

/// Stand-in key used when no real access key is configured.
/// Requests made with it fail and degrade to placeholder imagery.
const PLACEHOLDER_ACCESS_KEY: &str = "demo-access-key";

/// How long cached result sets stay fresh, in minutes.
const CACHE_TTL_MINUTES: i64 = 30;

/// Image lookup service with a timed in-memory cache.
pub struct ImageService {
    client: Client,
    pub(crate) access_key: String,
    pub(crate) base_url: String,
    pub(crate) cache_ttl: Duration,
    cache: PhotoCache,
}

impl Default for ImageService {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageService {
    /// Creates a service configured from the environment.
    ///
    /// Reads the access key from `UNSPLASH_ACCESS_KEY`. Without one, a
    /// placeholder key is used and every lookup serves placeholder imagery.
    pub fn new() -> Self {
        let access_key = match env::var(ACCESS_KEY_ENV) {
            Ok(key) if !key.trim().is_empty() => key,
            _ => {
                log::warn!(
                    "{} is not set, falling back to placeholder access key",
                    ACCESS_KEY_ENV
                );
                PLACEHOLDER_ACCESS_KEY.to_string()
            }
        };
        Self::with_access_key(access_key)
    }

    /// Creates a service with an explicit access key.
    pub fn with_access_key(access_key: impl Into<String>) -> Self {
        let access_key = access_key.into();
        log::info!("Creating image lookup service");
        log::debug!("Access key length: {}", access_key.len());
        Self {
            client: Client::new(),
            access_key,
            base_url: UNSPLASH_API_URL.to_string(),
            cache_ttl: Duration::minutes(CACHE_TTL_MINUTES),
            cache: PhotoCache::new(),
        }
    }

    /// Searches for photos matching `query`, serving cached results while
    /// they are fresh.
    ///
    /// Remote failures and empty result sets degrade to placeholder imagery
    /// so a gallery always has something to render. Placeholders are never
    /// cached; the next call tries the remote API again.
    pub async fn search_images(&self, query: &str, options: &SearchOptions) -> Vec<Photo> {
        if query.trim().is_empty() {
            log::warn!("Empty search query, serving placeholder imagery");
            return fallback_photos(query);
        }

        let key = cache_key(query, options.category.as_deref());
        if let Some(photos) = self.cache.fresh(&key).await {
            log::debug!("Cache hit for '{}'", key);
            return photos;
        }

        log::info!("Cache miss for '{}', searching remote API", key);
        let fetched = unsplash::search_photos(
            &self.client,
            &self.base_url,
            &self.access_key,
            query,
            options,
        )
        .await;

        self.resolve(&key, query, fetched).await
    }

    /// Fetches random photos, optionally scoped to a category.
    ///
    /// Results are cached per category under their own key family, with the
    /// same fallback behavior as [`search_images`](Self::search_images).
    pub async fn random_images(&self, category: Option<&str>, count: u32) -> Vec<Photo> {
        let key = cache_key("random", category);
        if let Some(photos) = self.cache.fresh(&key).await {
            log::debug!("Cache hit for '{}'", key);
            return photos;
        }

        log::info!("Cache miss for '{}', requesting random photos", key);
        let fetched = unsplash::random_photos(
            &self.client,
            &self.base_url,
            &self.access_key,
            category,
            count,
        )
        .await;

        self.resolve(&key, category.unwrap_or("random"), fetched).await
    }

    /// Builds a display URL for `photo` at the requested size.
    ///
    /// See [`Photo::optimized_url`] for the sizing rules.
    pub fn optimized_image_url(
        &self,
        photo: &Photo,
        size: ImageSize,
        custom_dimensions: Option<(u32, u32)>,
    ) -> String {
        photo.optimized_url(size, custom_dimensions)
    }

    /// Drops every cached result set, forcing the next lookups to refetch.
    pub async fn clear_cache(&self) {
        self.cache.clear().await;
    }

    /// Reports how many result sets are cached and their approximate size.
    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.stats().await
    }

    /// Caches successful non-empty lookups; failures and empty result sets
    /// become placeholder imagery and stay out of the cache.
    async fn resolve(
        &self,
        key: &str,
        query: &str,
        fetched: LookupResult<Vec<Photo>>,
    ) -> Vec<Photo> {
        match fetched {
            Ok(photos) if !photos.is_empty() => {
                self.cache.store(key, photos.clone(), self.cache_ttl).await;
                photos
            }
            Ok(_) => {
                log::warn!("No results for '{}', serving placeholder imagery", key);
                fallback_photos(query)
            }
            Err(e) => {
                log::warn!(
                    "Lookup for '{}' failed: {}, serving placeholder imagery",
                    key,
                    e
                );
                fallback_photos(query)
            }
        }
    }
}

/// Builds the cache key for a query/category pair.
fn cache_key(query: &str, category: Option<&str>) -> String {
    format!("{}_{}", query, category.unwrap_or("general"))
}

/// Placeholder result set for when the remote lookup cannot deliver.
fn fallback_photos(query: &str) -> Vec<Photo> {
    vec![Photo::placeholder(query)]
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
