//! Cached image lookup for landing page galleries.
//!
//! Wraps the Unsplash search API behind [`ImageService`]: results are held
//! in a timed in-memory cache, remote failures degrade to placeholder
//! imagery, and display URLs can be derived per size tier or with custom
//! crop dimensions.

pub mod api;
pub mod cache;
pub mod error;
pub mod models;
pub mod service;

// Re-export commonly used items
pub use cache::{CacheStats, PhotoCache};
pub use error::{LookupError, LookupResult};
pub use models::{
    ImageSize, Orientation, Photo, PhotoCredit, PhotoUrls, SearchOptions, DEFAULT_RANDOM_COUNT,
    DEFAULT_SEARCH_COUNT,
};
pub use service::{ImageService, ACCESS_KEY_ENV};
