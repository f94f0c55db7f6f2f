//! Client for the remote photo search API (Unsplash)

pub mod unsplash;

pub use unsplash::UNSPLASH_API_URL;
