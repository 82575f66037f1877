//! Error type shared by every client operation.

use thiserror::Error;

/// Errors returned by the Nova Poshta client.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport failure, non-JSON response body, or HTTP client construction failure.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// A JSON value could not be decoded into the requested shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The API rejected the API key (only raised when error checking is enabled).
    #[error("invalid API key: {0}")]
    InvalidApiKey(String),

    /// The API reported an unsuccessful request (only raised when error checking is enabled).
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The client was closed before the request was sent.
    #[error("client is closed")]
    Closed,

    /// The blocking client could not start its runtime.
    #[error("failed to start runtime: {0}")]
    Runtime(#[source] std::io::Error),

    /// A chain step expected an argument that was not provided.
    #[error("missing or invalid argument `{0}`")]
    MissingArgument(String),
}

impl Error {
    /// `true` for errors reported by the API itself rather than by the transport.
    pub fn is_api_error(&self) -> bool {
        matches!(self, Error::InvalidApiKey(_) | Error::ApiRequest(_))
    }
}
