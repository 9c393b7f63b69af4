//! In-process tool execution
//!
//! [`EmbeddableMcp`] lets a host call a server's tools directly, without a
//! stdio transport in between. Servers built on rmcp's `ToolRouter` list
//! their tools from the router and dispatch `call_tool` by name.

use async_trait::async_trait;
use rmcp::model::{CallToolResult, Tool};
use serde_json::Value;

/// Errors from in-process tool calls
#[derive(Debug, thiserror::Error)]
pub enum EmbeddableError {
    /// No tool with this name is registered
    #[error("tool not found: {0}")]
    ToolNotFound(String),

    /// Arguments did not match the tool's parameter schema
    #[error("invalid parameters: {0}")]
    InvalidParams(#[from] serde_json::Error),

    /// The tool returned an MCP protocol error
    #[error("mcp error: {0}")]
    McpError(String),
}

impl From<rmcp::ErrorData> for EmbeddableError {
    fn from(err: rmcp::ErrorData) -> Self {
        EmbeddableError::McpError(err.message.to_string())
    }
}

pub type EmbeddableResult<T> = Result<T, EmbeddableError>;

/// An MCP server whose tools can be invoked in-process
///
/// Implementations are shared across tasks, hence `Send + Sync`.
#[async_trait]
pub trait EmbeddableMcp: Send + Sync {
    /// Name used to identify the server in MCP configuration
    fn server_name(&self) -> &str;

    /// All registered tools with their descriptions and input schemas
    fn list_tools(&self) -> Vec<Tool>;

    /// Run the tool `name` with JSON object arguments
    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult>;

    fn server_description(&self) -> Option<&str> {
        None
    }

    fn server_version(&self) -> Option<&str> {
        None
    }
}
