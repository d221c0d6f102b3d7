//! Remote client error types.

use thiserror::Error;

/// Errors that can occur while calling the Pylon API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The API answered with a non-success status code.
    #[error("Pylon API request failed with status {status}: {detail}")]
    Status { status: u16, detail: String },

    /// The request could not be sent or the response could not be read.
    #[error("Pylon API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not valid JSON.
    #[error("Failed to decode Pylon API response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured base URL cannot be used to build request URLs.
    #[error("Invalid Pylon API base URL: {0}")]
    InvalidBaseUrl(String),

    /// An argument could not be placed into the request.
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument { name: String, reason: String },
}

impl ApiError {
    /// Create a status error from a response body.
    ///
    /// The detail is taken from the body's `message` field, then `error`,
    /// falling back to the raw text.
    pub fn from_response(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| {
                ["message", "error"]
                    .iter()
                    .find_map(|key| v.get(*key).and_then(|d| d.as_str()).map(str::to_string))
            })
            .unwrap_or_else(|| body.trim().to_string());

        let detail = if detail.is_empty() {
            "no error detail returned".to_string()
        } else {
            detail
        };

        Self::Status { status, detail }
    }

    /// Create an "invalid argument" error.
    pub fn invalid_argument(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
