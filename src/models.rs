use serde::{Deserialize, Serialize};

/// Default number of results requested by a search
pub const DEFAULT_SEARCH_COUNT: u32 = 20;

/// Default number of photos requested from the random endpoint
pub const DEFAULT_RANDOM_COUNT: u32 = 10;

/// One remote image resource, as served by the photo API
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Photo {
    pub id: String,
    pub urls: PhotoUrls,
    #[serde(default)]
    pub alt_description: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub user: PhotoCredit,
    pub width: u32,
    pub height: u32,
}

/// URL variants of a photo, keyed by resolution tier.
/// `raw` is the only optional tier; it backs custom-size requests.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PhotoUrls {
    #[serde(default)]
    pub raw: Option<String>,
    pub full: String,
    pub regular: String,
    pub small: String,
    pub thumb: String,
}

/// Photographer attribution attached to every photo
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PhotoCredit {
    pub name: String,
    pub username: String,
}

impl Photo {
    /// Get the URL for a size tier, optionally resized server-side.
    ///
    /// With `custom` dimensions the `raw` variant is extended with
    /// width/height/fit/crop parameters (entropy framing). A photo without
    /// a `raw` variant degrades to the plain tier URL.
    pub fn optimized_url(&self, size: ImageSize, custom: Option<(u32, u32)>) -> String {
        if let Some((width, height)) = custom {
            if let Some(raw) = self.urls.raw.as_deref() {
                return format!("{raw}&w={width}&h={height}&fit=crop&crop=entropy");
            }
            log::warn!(
                "Photo {} has no raw URL, serving {} tier instead of {}x{}",
                self.id,
                size.as_str(),
                width,
                height
            );
        }
        self.urls.for_size(size).to_string()
    }

    /// Profile URL of the photographer, for attribution links
    pub fn credit_url(&self) -> String {
        format!("https://unsplash.com/@{}", self.user.username)
    }

    /// Synthesize a deterministic placeholder photo for `query`.
    ///
    /// Served when the remote API fails or returns nothing usable.
    pub fn placeholder(query: &str) -> Photo {
        let trimmed = query.trim();
        let label = if trimmed.is_empty() { "image" } else { trimmed };
        let slug = label
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
            .to_lowercase();
        let text = urlencoding::encode(label);
        let variant = |width: u32, height: u32| {
            format!("https://placehold.co/{width}x{height}?text={text}")
        };

        Photo {
            id: format!("fallback-{slug}"),
            urls: PhotoUrls {
                raw: Some(variant(1920, 1280)),
                full: variant(1920, 1280),
                regular: variant(1080, 720),
                small: variant(400, 267),
                thumb: variant(200, 133),
            },
            alt_description: Some(format!("Placeholder image for {label}")),
            description: None,
            user: PhotoCredit {
                name: "Placeholder".to_string(),
                username: "placeholder".to_string(),
            },
            width: 1920,
            height: 1280,
        }
    }
}

impl PhotoUrls {
    /// URL variant for a resolution tier.
    /// `Raw` serves the `full` variant when the photo has no raw URL.
    pub fn for_size(&self, size: ImageSize) -> &str {
        match size {
            ImageSize::Raw => self.raw.as_deref().unwrap_or(&self.full),
            ImageSize::Full => &self.full,
            ImageSize::Regular => &self.regular,
            ImageSize::Small => &self.small,
            ImageSize::Thumb => &self.thumb,
        }
    }
}

/// Resolution tier of a photo URL variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSize {
    Raw,
    Full,
    Regular,
    Small,
    Thumb,
}

impl ImageSize {
    /// Returns the tier name as it appears in API payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::Raw => "raw",
            ImageSize::Full => "full",
            ImageSize::Regular => "regular",
            ImageSize::Small => "small",
            ImageSize::Thumb => "thumb",
        }
    }
}

/// Orientation filter accepted by the search and random endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Landscape,
    Portrait,
    Squarish,
}

impl Orientation {
    /// Returns the parameter value expected by the API
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Landscape => "landscape",
            Orientation::Portrait => "portrait",
            Orientation::Squarish => "squarish",
        }
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Orientation::Landscape
    }
}

/// Filters for `ImageService::search_images`
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Optional category, appended to the query and part of the cache key
    pub category: Option<String>,
    /// Desired result count (`per_page` upstream)
    pub count: u32,
    pub orientation: Orientation,
    /// Optional color filter passed through to the API
    pub color: Option<String>,
    /// Restrict results to curated/featured photos
    pub featured: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            category: None,
            count: DEFAULT_SEARCH_COUNT,
            orientation: Orientation::Landscape,
            color: None,
            featured: false,
        }
    }
}
