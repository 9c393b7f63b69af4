//! MCP Server implementation
//!
//! Defines the MCP server that exposes Twist inbox and thread operations as
//! tools. Handler implementations are in the handlers/ module.

use std::sync::Arc;

use mcp_common::{async_trait, EmbeddableError, EmbeddableMcp, EmbeddableResult};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, ServerCapabilities, ServerInfo, Tool},
    tool, tool_handler, tool_router, ErrorData as McpError,
};
use serde_json::{from_value, Value};

use crate::config::TwistConfig;
use crate::context::TwistContext;
use crate::handlers;
use crate::params::*;
use crate::twist::TwistResult;

/// The main Twist MCP Server
#[derive(Clone)]
pub struct TwistMcpServer {
    ctx: Arc<TwistContext>,
    tool_router: ToolRouter<Self>,
}

// ============================================================================
// Inbox Tools
// ============================================================================

#[tool_router(router = inbox_tool_router)]
impl TwistMcpServer {
    #[tool(description = "Get the authenticated user's inbox.")]
    async fn twist_inbox_get(
        &self,
        Parameters(params): Parameters<InboxGetParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::inbox_get(&self.ctx, params).await.into_call_result()
    }

    #[tool(description = "Gets the number of threads in the authenticated user's inbox.")]
    async fn twist_inbox_get_count(
        &self,
        Parameters(params): Parameters<WorkspaceParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::inbox_get_count(&self.ctx, params).await.into_call_result()
    }

    #[tool(description = "Archives a thread in the inbox.")]
    async fn twist_inbox_archive(
        &self,
        Parameters(params): Parameters<InboxThreadParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::inbox_archive(&self.ctx, params).await.into_call_result()
    }

    #[tool(description = "Unarchives a thread in the inbox.")]
    async fn twist_inbox_unarchive(
        &self,
        Parameters(params): Parameters<InboxThreadParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::inbox_unarchive(&self.ctx, params).await.into_call_result()
    }

    #[tool(description = "Archives all threads in the inbox.")]
    async fn twist_inbox_archive_all(
        &self,
        Parameters(params): Parameters<InboxArchiveAllParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::inbox_archive_all(&self.ctx, params).await.into_call_result()
    }

    #[tool(description = "Marks all inbox threads as read.")]
    async fn twist_inbox_mark_all_read(
        &self,
        Parameters(params): Parameters<WorkspaceParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::inbox_mark_all_read(&self.ctx, params).await.into_call_result()
    }
}

// ============================================================================
// Thread Tools
// ============================================================================

#[tool_router(router = threads_tool_router)]
impl TwistMcpServer {
    #[tool(description = "Gets a thread object by id.")]
    async fn twist_threads_getone(
        &self,
        Parameters(params): Parameters<ThreadIdParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::threads_getone(&self.ctx, params).await.into_call_result()
    }

    #[tool(description = "Gets all threads in a channel.")]
    async fn twist_threads_get(
        &self,
        Parameters(params): Parameters<ThreadsGetParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::threads_get(&self.ctx, params).await.into_call_result()
    }

    #[tool(description = "Adds a new thread to a channel.")]
    async fn twist_threads_add(
        &self,
        Parameters(params): Parameters<ThreadsAddParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::threads_add(&self.ctx, params).await.into_call_result()
    }

    #[tool(description = "Updates an existing thread.")]
    async fn twist_threads_update(
        &self,
        Parameters(params): Parameters<ThreadsUpdateParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::threads_update(&self.ctx, params).await.into_call_result()
    }

    #[tool(description = "Removes a thread.")]
    async fn twist_threads_remove(
        &self,
        Parameters(params): Parameters<ThreadIdParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::threads_remove(&self.ctx, params).await.into_call_result()
    }

    #[tool(description = "Stars a thread.")]
    async fn twist_threads_star(
        &self,
        Parameters(params): Parameters<ThreadIdParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::threads_star(&self.ctx, params).await.into_call_result()
    }

    #[tool(description = "Unstars a thread.")]
    async fn twist_threads_unstar(
        &self,
        Parameters(params): Parameters<ThreadIdParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::threads_unstar(&self.ctx, params).await.into_call_result()
    }

    #[tool(description = "Pins a thread.")]
    async fn twist_threads_pin(
        &self,
        Parameters(params): Parameters<ThreadIdParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::threads_pin(&self.ctx, params).await.into_call_result()
    }

    #[tool(description = "Unpins a thread.")]
    async fn twist_threads_unpin(
        &self,
        Parameters(params): Parameters<ThreadIdParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::threads_unpin(&self.ctx, params).await.into_call_result()
    }

    #[tool(description = "Moves the thread to a different channel.")]
    async fn twist_threads_move_to_channel(
        &self,
        Parameters(params): Parameters<MoveToChannelParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::threads_move_to_channel(&self.ctx, params)
            .await
            .into_call_result()
    }

    #[tool(description = "Gets unread threads in a workspace for the authenticated user.")]
    async fn twist_threads_get_unread(
        &self,
        Parameters(params): Parameters<WorkspaceParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::threads_get_unread(&self.ctx, params).await.into_call_result()
    }

    #[tool(description = "Marks the thread as being read.")]
    async fn twist_threads_mark_read(
        &self,
        Parameters(params): Parameters<MarkReadParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::threads_mark_read(&self.ctx, params).await.into_call_result()
    }

    #[tool(description = "Marks the thread as being unread.")]
    async fn twist_threads_mark_unread(
        &self,
        Parameters(params): Parameters<MarkUnreadParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::threads_mark_unread(&self.ctx, params).await.into_call_result()
    }

    #[tool(description = "Marks the thread as being unread for others.")]
    async fn twist_threads_mark_unread_for_others(
        &self,
        Parameters(params): Parameters<MarkUnreadParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::threads_mark_unread_for_others(&self.ctx, params)
            .await
            .into_call_result()
    }

    #[tool(description = "Marks all threads in the workspace or channel as read.")]
    async fn twist_threads_mark_all_read(
        &self,
        Parameters(params): Parameters<MarkAllReadParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::threads_mark_all_read(&self.ctx, params).await.into_call_result()
    }

    #[tool(description = "Clears unread threads in workspace.")]
    async fn twist_threads_clear_unread(
        &self,
        Parameters(params): Parameters<WorkspaceParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::threads_clear_unread(&self.ctx, params).await.into_call_result()
    }

    #[tool(description = "Mutes a thread for a number of minutes.")]
    async fn twist_threads_mute(
        &self,
        Parameters(params): Parameters<MuteParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::threads_mute(&self.ctx, params).await.into_call_result()
    }

    #[tool(description = "Unmutes a thread.")]
    async fn twist_threads_unmute(
        &self,
        Parameters(params): Parameters<ThreadIdParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::threads_unmute(&self.ctx, params).await.into_call_result()
    }
}

// ============================================================================
// Router Composition & Server Initialization
// ============================================================================

impl TwistMcpServer {
    pub fn new(ctx: TwistContext) -> Self {
        Self {
            ctx: Arc::new(ctx),
            tool_router: Self::inbox_tool_router() + Self::threads_tool_router(),
        }
    }

    /// Server talking to the real Twist API described by `config`
    pub fn from_config(config: TwistConfig) -> TwistResult<Self> {
        Ok(Self::new(TwistContext::from_config(config)?))
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
impl rmcp::ServerHandler for TwistMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Twist MCP Server - provides tools for reading and managing Twist \
                 threads and the inbox through the Twist v3 API. Requires \
                 TWIST_API_TOKEN; workspace-scoped tools fall back to \
                 TWIST_WORKSPACE_ID when no workspace_id is given."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

// ============================================================================
// In-process execution
// ============================================================================

#[async_trait]
impl EmbeddableMcp for TwistMcpServer {
    fn server_name(&self) -> &str {
        "twist"
    }

    fn server_description(&self) -> Option<&str> {
        Some("Twist MCP Server - inbox and thread management for Twist workspaces.")
    }

    fn server_version(&self) -> Option<&str> {
        Some(env!("CARGO_PKG_VERSION"))
    }

    fn list_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult> {
        let result = match name {
            "twist_inbox_get" => self.twist_inbox_get(Parameters(from_value(params)?)).await,
            "twist_inbox_get_count" => {
                self.twist_inbox_get_count(Parameters(from_value(params)?)).await
            }
            "twist_inbox_archive" => self.twist_inbox_archive(Parameters(from_value(params)?)).await,
            "twist_inbox_unarchive" => {
                self.twist_inbox_unarchive(Parameters(from_value(params)?)).await
            }
            "twist_inbox_archive_all" => {
                self.twist_inbox_archive_all(Parameters(from_value(params)?)).await
            }
            "twist_inbox_mark_all_read" => {
                self.twist_inbox_mark_all_read(Parameters(from_value(params)?)).await
            }
            "twist_threads_getone" => {
                self.twist_threads_getone(Parameters(from_value(params)?)).await
            }
            "twist_threads_get" => self.twist_threads_get(Parameters(from_value(params)?)).await,
            "twist_threads_add" => self.twist_threads_add(Parameters(from_value(params)?)).await,
            "twist_threads_update" => {
                self.twist_threads_update(Parameters(from_value(params)?)).await
            }
            "twist_threads_remove" => {
                self.twist_threads_remove(Parameters(from_value(params)?)).await
            }
            "twist_threads_star" => self.twist_threads_star(Parameters(from_value(params)?)).await,
            "twist_threads_unstar" => {
                self.twist_threads_unstar(Parameters(from_value(params)?)).await
            }
            "twist_threads_pin" => self.twist_threads_pin(Parameters(from_value(params)?)).await,
            "twist_threads_unpin" => self.twist_threads_unpin(Parameters(from_value(params)?)).await,
            "twist_threads_move_to_channel" => {
                self.twist_threads_move_to_channel(Parameters(from_value(params)?))
                    .await
            }
            "twist_threads_get_unread" => {
                self.twist_threads_get_unread(Parameters(from_value(params)?)).await
            }
            "twist_threads_mark_read" => {
                self.twist_threads_mark_read(Parameters(from_value(params)?)).await
            }
            "twist_threads_mark_unread" => {
                self.twist_threads_mark_unread(Parameters(from_value(params)?)).await
            }
            "twist_threads_mark_unread_for_others" => {
                self.twist_threads_mark_unread_for_others(Parameters(from_value(params)?))
                    .await
            }
            "twist_threads_mark_all_read" => {
                self.twist_threads_mark_all_read(Parameters(from_value(params)?)).await
            }
            "twist_threads_clear_unread" => {
                self.twist_threads_clear_unread(Parameters(from_value(params)?)).await
            }
            "twist_threads_mute" => self.twist_threads_mute(Parameters(from_value(params)?)).await,
            "twist_threads_unmute" => {
                self.twist_threads_unmute(Parameters(from_value(params)?)).await
            }
            _ => return Err(EmbeddableError::ToolNotFound(name.to_string())),
        };

        result.map_err(Into::into)
    }
}
