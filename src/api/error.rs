//! Error types for the shop API client.

use thiserror::Error;

/// Errors that can occur while talking to the shop API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Transport-level failure (DNS, connect, TLS, reset)
    #[error("Request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the configured timeout
    #[error("Request to '{url}' timed out")]
    Timeout { url: String },

    /// API answered with a non-success status
    #[error("API error: {status} - {message}")]
    Status { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("Failed to decode response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    pub(crate) fn from_send(url: &str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            ApiError::Timeout {
                url: url.to_string(),
            }
        } else {
            ApiError::Request {
                url: url.to_string(),
                source,
            }
        }
    }

    /// Short text suitable for showing inside a form.
    pub fn user_message(&self) -> &'static str {
        match self {
            ApiError::Client(_) | ApiError::Request { .. } => "Shop is unreachable",
            ApiError::Timeout { .. } => "Shop did not answer in time",
            ApiError::Status { .. } => "Shop rejected the request",
            ApiError::Decode { .. } => "Shop sent an unexpected response",
        }
    }
}
