//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Each tool maps to exactly one Pylon API call.
//!
//! ## Architecture
//!
//! - `operation.rs` - Operation, parameter and reply descriptors
//! - `definitions/` - The Pylon operations, one file per resource
//! - `registry.rs` - Central tool catalog and lookup
//! - `dispatcher.rs` - Validates arguments, performs the call, builds the result
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Declare an `Operation` const in the matching `definitions/` file
//!    (parameters, endpoint, reply)
//! 2. Add it to `CATALOG` in `registry.rs`
//!
//! The input schema and the required-argument check are both derived from
//! the parameter list, so there is nothing else to keep in sync.

pub mod definitions;
mod dispatcher;
mod error;
pub mod operation;
mod registry;

pub use dispatcher::Dispatcher;
pub use error::ToolError;
pub use operation::{Operation, Param, ParamKind, Reply};
pub use registry::ToolRegistry;
