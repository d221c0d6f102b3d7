//! Pylon domain module.
//!
//! This module owns everything that talks to the remote Pylon REST API:
//!
//! - `endpoint.rs` - Declarative `{verb, path, query, body}` descriptors and
//!   the request builder that turns an argument bag into an [`ApiRequest`]
//! - `client.rs` - The [`PylonApi`] seam and its reqwest-backed implementation
//! - `error.rs` - Remote call error types
//!
//! Every operation goes through the same generic `execute` routine; there is
//! no per-operation client method.

mod client;
mod endpoint;
mod error;

pub use client::{DEFAULT_BASE_URL, PylonApi, PylonClient};
pub use endpoint::{ApiRequest, Endpoint, Verb};
pub use error::ApiError;
