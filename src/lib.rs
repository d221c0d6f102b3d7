//! Pylon MCP Server Library
//!
//! Exposes the Pylon customer support platform's REST API as Model Context
//! Protocol (MCP) tools. Every tool call maps to exactly one HTTP request.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the MCP server handler and transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: The tool catalog and the dispatcher
//!   - **pylon**: Endpoint descriptors and the HTTP client
//!
//! # Example
//!
//! ```rust,no_run
//! use pylon_mcp_server::{Config, McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     let result = server.invoke("get_me", None).await;
//!     println!("{:?}", result.content);
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
