//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol. Tool listing comes straight from the [`ToolRegistry`]; tool
//! calls go through the [`Dispatcher`], which always answers with a
//! `CallToolResult` (error-flagged on failure) rather than a protocol error.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::error::Result;
use crate::domains::pylon::{PylonApi, PylonClient};
use crate::domains::tools::{Dispatcher, ToolRegistry};

const INSTRUCTIONS: &str = "Tools for the Pylon customer support platform: users, contacts, \
     accounts, teams, issues and their messages, knowledge bases, tags, ticket forms and webhooks. \
     Each tool performs one Pylon API call and returns its JSON response.";

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp. It is cheap to
/// clone; clones share the same Pylon client.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Dispatcher for tool calls.
    dispatcher: Dispatcher,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Fails when no API token is configured or the base URL is unusable.
    pub fn new(config: Config) -> Result<Self> {
        let token = config.credentials.require_api_token()?;
        let client = PylonClient::new(token, &config.api.base_url)?;
        info!("Pylon client ready for {}", client.base_url());

        Ok(Self::with_api(config, Arc::new(client)))
    }

    /// Create a server backed by an arbitrary [`PylonApi`] implementation.
    pub fn with_api(config: Config, api: Arc<dyn PylonApi>) -> Self {
        Self {
            config: Arc::new(config),
            dispatcher: Dispatcher::new(api),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Server instructions reported to clients.
    pub fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }

    // ========================================================================
    // Transport-neutral entry points
    // ========================================================================

    /// List all available tools.
    pub fn tools(&self) -> Vec<Tool> {
        ToolRegistry::get_all_tools()
    }

    /// Call a tool by name.
    pub async fn invoke(&self, name: &str, arguments: Option<JsonObject>) -> CallToolResult {
        self.dispatcher.call(name, arguments).await
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: self.tools(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip_all, fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        info!("Calling tool: {}", request.name);
        Ok(self.invoke(&request.name, request.arguments).await)
    }
}
