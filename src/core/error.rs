//! Error types and handling for the MCP server.
//!
//! Tool failures never reach this type: the dispatcher turns them into
//! error-flagged tool results. What remains are startup and transport
//! failures.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration-related errors, fatal at startup.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The Pylon API client could not be constructed.
    #[error("Pylon client error: {0}")]
    Api(#[from] crate::domains::pylon::ApiError),

    /// Error from the transport layer.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
