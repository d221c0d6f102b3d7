//! Tool-specific error types.

use thiserror::Error;

use crate::domains::pylon::ApiError;

/// Errors that can occur while dispatching a tool call.
///
/// The dispatcher renders every variant as `Error: <message>` inside an
/// error-flagged result.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool is not in the registry.
    #[error("Unknown tool: {0}")]
    NotFound(String),

    /// One or more required arguments were not supplied.
    #[error("Missing required argument(s): {}", .0.join(", "))]
    MissingArguments(Vec<String>),

    /// The remote call failed or the request could not be built.
    #[error(transparent)]
    Remote(#[from] ApiError),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
