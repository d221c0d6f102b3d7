//! Domains module containing business logic organized by bounded contexts.
//!
//! - **tools**: The MCP tool catalog and dispatch
//! - **pylon**: The Pylon REST API client

pub mod pylon;
pub mod tools;
