//! Tool dispatcher.
//!
//! Turns a tool name and argument bag into exactly one Pylon API call and
//! wraps the outcome in a `CallToolResult`. Failures never propagate: they
//! become error-flagged results whose single text block reads
//! `Error: <message>`.

use std::sync::Arc;

use rmcp::model::{CallToolResult, Content, JsonObject};
use tracing::{info, instrument, warn};

use super::error::ToolError;
use super::registry::ToolRegistry;
use crate::domains::pylon::PylonApi;

/// Dispatches tool calls to the Pylon API.
#[derive(Clone)]
pub struct Dispatcher {
    api: Arc<dyn PylonApi>,
}

impl Dispatcher {
    /// Create a dispatcher backed by the given API implementation.
    pub fn new(api: Arc<dyn PylonApi>) -> Self {
        Self { api }
    }

    /// Invoke a tool by name.
    #[instrument(skip(self, arguments))]
    pub async fn call(&self, name: &str, arguments: Option<JsonObject>) -> CallToolResult {
        match self.try_call(name, arguments.unwrap_or_default()).await {
            Ok(text) => {
                info!("Tool {} completed", name);
                CallToolResult::success(vec![Content::text(text)])
            }
            Err(e) => {
                warn!("Tool {} failed: {}", name, e);
                CallToolResult::error(vec![Content::text(format!("Error: {e}"))])
            }
        }
    }

    async fn try_call(&self, name: &str, arguments: JsonObject) -> Result<String, ToolError> {
        let operation = ToolRegistry::find(name).ok_or_else(|| ToolError::not_found(name))?;
        operation.check_required(&arguments)?;

        let request = operation.endpoint.build(&arguments)?;
        info!("Calling {} {}", request.verb, request.path());

        let value = self.api.execute(request).await?;
        operation.reply.render(&value)
    }
}
