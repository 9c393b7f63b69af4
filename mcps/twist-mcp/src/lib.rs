//! Twist MCP Library
//!
//! MCP tools for the Twist team-messaging API: inbox and thread
//! management over the Twist v3 HTTP API.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use twist_mcp::{TwistConfig, TwistMcpServer};
//!
//! let config = TwistConfig::new(token).with_default_workspace(42);
//! let server = TwistMcpServer::from_config(config)?;
//! // Serve via stdio, or call tools in-process through EmbeddableMcp
//! ```
//!
//! # Features
//! - Inbox: get, count, archive, unarchive, archive all, mark all read
//! - Threads: get one, list, add, update, remove, star/unstar, pin/unpin,
//!   move, unread listing, read/unread markers, mute/unmute

pub mod config;
pub mod context;
pub mod handlers;
pub mod outcome;
pub mod params;
pub mod server;
pub mod twist;

// Re-export main server type
pub use server::TwistMcpServer;

pub use config::{Cli, ConfigError, TwistConfig};
pub use context::TwistContext;
pub use outcome::ToolOutcome;

// Re-export parameter types for direct API usage
pub use params::*;
