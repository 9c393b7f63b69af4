//! MCP Common - shared plumbing for the MCP servers in this workspace
//!
//! - **Startup**: [`init_tracing`] and the `serve_stdio!` macro
//! - **Results**: [`json_success`], [`text_success`], [`error_text`]
//! - **Embedding**: [`EmbeddableMcp`] for in-process tool calls
//!
//! ```rust,ignore
//! // main.rs
//! mcp_common::serve_stdio!("my_mcp", MyServer::from_env());
//! ```

pub mod embeddable;
pub mod init;
pub mod result;

pub use embeddable::{EmbeddableError, EmbeddableMcp, EmbeddableResult};
pub use init::init_tracing;
pub use result::{error_text, json_success, text_success};

pub use rmcp::{
    model::{CallToolResult, Content, Tool},
    ErrorData as McpError,
};

pub use async_trait::async_trait;
