//! Error types for the catalog service client.

use std::fmt;

use thiserror::Error;

/// Errors reported by the catalog service itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// HTTP-level error with status code.
    Http { status: u16, message: String },
    /// Rate limit exceeded.
    RateLimit { retry_after: Option<u64> },
    /// Resource not found.
    NotFound { resource: String, id: String },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http { status, message } => write!(f, "HTTP error {}: {}", status, message),
            ApiError::RateLimit { retry_after } => match retry_after {
                Some(secs) => write!(f, "Rate limited, retry after {} seconds", secs),
                None => write!(f, "Rate limited"),
            },
            ApiError::NotFound { resource, id } => {
                write!(f, "{} not found: {}", resource, id)
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Returns true if this error is potentially retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ApiError::RateLimit { .. })
    }
}

/// Errors that can occur when talking to the catalog service.
#[derive(Debug, Error)]
pub enum Error {
    /// The service answered with an error response.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Transport-level failure (connection, timeout, body decode).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Failed to encode request query parameters.
    #[error("failed to encode query string: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),
}

impl Error {
    /// Returns true if retrying the request could succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Api(api) => api.is_retryable(),
            Error::Transport(e) => e.is_timeout() || e.is_connect(),
            Error::Query(_) => false,
        }
    }

    /// Returns the appropriate CLI exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Api(ApiError::RateLimit { .. }) => 4,
            Error::Transport(_) => 3,
            _ => 2,
        }
    }
}

/// Result type for catalog client operations.
pub type Result<T> = std::result::Result<T, Error>;
