use thiserror::Error;

/// Unified error type for photo API operations
#[derive(Debug, Error)]
pub enum LookupError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Failed to parse JSON response
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// API returned an error response
    #[error("{status}: {message}")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },
    /// HTTP error status code without a readable error body
    #[error("HTTP error: {0}")]
    HttpStatus(reqwest::StatusCode),
}

/// Result type alias for lookup operations
pub type LookupResult<T> = Result<T, LookupError>;
