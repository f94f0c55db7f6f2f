use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tokio::sync::RwLock;

use crate::models::Photo;

/// A cached result set together with its expiry bookkeeping.
#[derive(Debug, Clone, Serialize)]
pub struct CacheEntry {
    pub photos: Vec<Photo>,
    pub cached_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl CacheEntry {
    fn new(photos: Vec<Photo>, ttl: Duration) -> Self {
        let cached_at = Utc::now();
        Self {
            photos,
            cached_at,
            expires_at: cached_at + ttl,
        }
    }

    /// Check whether the entry is still within its time to live
    pub fn is_fresh(&self) -> bool {
        Utc::now() < self.expires_at
    }
}

/// Snapshot of the cache contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of stored entries, fresh and stale alike
    pub entries: usize,
    /// Approximate memory footprint, measured as serialized JSON bytes
    pub approx_size_bytes: usize,
}

/// In-memory cache for photo lookup results
/// Expired entries are kept until overwritten or explicitly cleared
#[derive(Debug, Clone, Default)]
pub struct PhotoCache {
    entries: Arc<RwLock<HashMap<String, CacheEntry>>>,
}

impl PhotoCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the photos stored under `key`, if the entry is still fresh
    pub async fn fresh(&self, key: &str) -> Option<Vec<Photo>> {
        let entries = self.entries.read().await;
        match entries.get(key) {
            Some(entry) if entry.is_fresh() => Some(entry.photos.clone()),
            Some(_) => {
                log::debug!("Cache entry for '{}' has expired", key);
                None
            }
            None => None,
        }
    }

    /// Store photos under `key` with the given time to live
    /// Overwrites any previous entry for the key
    pub async fn store(&self, key: &str, photos: Vec<Photo>, ttl: Duration) {
        let entry = CacheEntry::new(photos, ttl);
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), entry);
        log::debug!("Cached results for '{}', {} entries total", key, entries.len());
    }

    /// Drop all entries
    pub async fn clear(&self) {
        let mut entries = self.entries.write().await;
        let dropped = entries.len();
        entries.clear();
        log::info!("Cleared image cache, {} entries dropped", dropped);
    }

    /// Count the entries and estimate their serialized size
    pub async fn stats(&self) -> CacheStats {
        let entries = self.entries.read().await;
        let approx_size_bytes = serde_json::to_vec(&*entries).map(|b| b.len()).unwrap_or(0);
        CacheStats {
            entries: entries.len(),
            approx_size_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PhotoCredit, PhotoUrls};

    fn create_test_photo(id: &str) -> Photo {
        Photo {
            id: id.to_string(),
            urls: PhotoUrls {
                raw: Some(format!("https://images.example.com/{id}?ixid=abc123")),
                full: format!("https://images.example.com/{id}-full.jpg"),
                regular: format!("https://images.example.com/{id}-regular.jpg"),
                small: format!("https://images.example.com/{id}-small.jpg"),
                thumb: format!("https://images.example.com/{id}-thumb.jpg"),
            },
            alt_description: Some("a scenic test photo".to_string()),
            description: None,
            user: PhotoCredit {
                name: "Test Author".to_string(),
                username: "testauthor".to_string(),
            },
            width: 4000,
            height: 2667,
        }
    }

    #[tokio::test]
    async fn test_store_and_fresh() {
        let cache = PhotoCache::new();
        let photos = vec![create_test_photo("p1"), create_test_photo("p2")];

        cache.store("sunset_general", photos.clone(), Duration::minutes(30)).await;

        let retrieved = cache.fresh("sunset_general").await;
        assert_eq!(retrieved, Some(photos));
    }

    #[tokio::test]
    async fn test_fresh_on_missing_key_returns_none() {
        let cache = PhotoCache::new();
        assert!(cache.fresh("nothing_here").await.is_none());
    }

    #[tokio::test]
    async fn test_keys_are_isolated() {
        let cache = PhotoCache::new();

        cache.store("sunset_general", vec![create_test_photo("s1")], Duration::minutes(30)).await;
        cache.store("sunset_nature", vec![create_test_photo("n1")], Duration::minutes(30)).await;

        assert_eq!(cache.fresh("sunset_general").await.unwrap()[0].id, "s1");
        assert_eq!(cache.fresh("sunset_nature").await.unwrap()[0].id, "n1");
    }

    #[tokio::test]
    async fn test_store_overwrites_existing_entry() {
        let cache = PhotoCache::new();

        cache.store("city_general", vec![create_test_photo("old")], Duration::minutes(30)).await;
        cache.store("city_general", vec![create_test_photo("new")], Duration::minutes(30)).await;

        let retrieved = cache.fresh("city_general").await.unwrap();
        assert_eq!(retrieved.len(), 1);
        assert_eq!(retrieved[0].id, "new");

        let stats = cache.stats().await;
        assert_eq!(stats.entries, 1);
    }

    #[tokio::test]
    async fn test_expired_entry_is_not_fresh_but_still_counted() {
        let cache = PhotoCache::new();

        cache.store("sunset_general", vec![create_test_photo("p1")], Duration::milliseconds(30)).await;
        tokio::time::sleep(std::time::Duration::from_millis(60)).await;

        assert!(cache.fresh("sunset_general").await.is_none());
        // The stale entry stays around until overwritten or cleared
        assert_eq!(cache.stats().await.entries, 1);
    }

    #[tokio::test]
    async fn test_clear_empties_cache() {
        let cache = PhotoCache::new();

        cache.store("a_general", vec![create_test_photo("p1")], Duration::minutes(30)).await;
        cache.store("b_general", vec![create_test_photo("p2")], Duration::minutes(30)).await;
        assert_eq!(cache.stats().await.entries, 2);

        cache.clear().await;

        assert_eq!(cache.stats().await.entries, 0);
        assert!(cache.fresh("a_general").await.is_none());
    }

    #[tokio::test]
    async fn test_stats_report_serialized_size() {
        let cache = PhotoCache::new();

        let empty = cache.stats().await;
        assert_eq!(empty.entries, 0);

        cache.store("sunset_general", vec![create_test_photo("p1")], Duration::minutes(30)).await;

        let stats = cache.stats().await;
        assert_eq!(stats.entries, 1);
        assert!(stats.approx_size_bytes > 0);

        cache.store("city_general", vec![create_test_photo("p2")], Duration::minutes(30)).await;
        assert!(cache.stats().await.approx_size_bytes > stats.approx_size_bytes);
    }

    #[test]
    fn test_entry_freshness() {
        let entry = CacheEntry::new(vec![create_test_photo("p1")], Duration::minutes(30));
        assert!(entry.is_fresh());

        let expired = CacheEntry::new(vec![create_test_photo("p2")], Duration::minutes(-1));
        assert!(!expired.is_fresh());
    }

    #[test]
    fn test_entry_expiry_matches_ttl() {
        let entry = CacheEntry::new(vec![], Duration::minutes(30));
        assert_eq!(entry.expires_at - entry.cached_at, Duration::minutes(30));
    }
}
