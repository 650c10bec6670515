//! Error types for the pastebin client

use thiserror::Error;

/// Errors that can occur when using the pastebin client
#[derive(Error, Debug)]
pub enum PastebinError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Invalid HTTP status code received
    #[error("Invalid HTTP status: {status}")]
    InvalidStatus {
        /// The status code that was received
        status: reqwest::StatusCode,
    },

    /// Response body is not valid UTF-8
    #[error("Failed to decode response as UTF-8")]
    Encoding,

    /// Failed to decode a JSON response body
    #[error("Failed to decode JSON response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Failed to parse an XML or HTML response
    #[error("Failed to parse response: {0}")]
    Parse(&'static str),

    /// The API answered with a `Bad API request` message
    #[error("Pastebin API error: {0}")]
    Api(String),

    /// The operation needs a developer key and none was configured
    #[error("No developer key configured")]
    MissingDevKey,

    /// The operation needs a user key; call `authenticate` first
    #[error("No user key available, authenticate first")]
    MissingUserKey,

    /// Failed to read paste content from disk
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Client initialization failed
    #[error("Client initialization failed: {0}")]
    ClientInit(String),
}

impl PastebinError {
    /// The HTTP status behind this error, if there is one
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            PastebinError::InvalidStatus { status } => Some(*status),
            PastebinError::Request(err) => err.status(),
            _ => None,
        }
    }
}
