use thiserror::Error;

/// Errors returned by [`ApiClient`](super::ApiClient) calls.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport failure or a body that could not be decoded.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("backend returned {status}: {detail}")]
    Status {
        status: reqwest::StatusCode,
        detail: String,
    },

    /// The configured base URL cannot be used to build request URLs.
    #[error("invalid API base URL: {0}")]
    InvalidBaseUrl(String),
}
