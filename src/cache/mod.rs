//! Caching layer for photo lookup results

pub mod photo_cache;

pub use photo_cache::{CacheEntry, CacheStats, PhotoCache};
