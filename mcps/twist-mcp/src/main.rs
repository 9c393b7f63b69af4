//! Twist MCP Server
//!
//! Exposes Twist inbox and thread management as MCP tools over stdio.
//!
//! # Configuration
//! - `TWIST_API_TOKEN` (required): Twist API bearer token
//! - `TWIST_WORKSPACE_ID` (optional): default workspace for workspace-scoped tools
//!
//! Or configure in `.mcp.json`:
//! ```json
//! { "mcpServers": { "twist": { "command": "./twist-mcp", "env": { "TWIST_API_TOKEN": "..." } } } }
//! ```

use clap::Parser;
use twist_mcp::{Cli, TwistConfig, TwistMcpServer};

fn build_server() -> anyhow::Result<TwistMcpServer> {
    let config = TwistConfig::resolve(Cli::parse())?;

    tracing::info!(
        base_url = config.base_url(),
        default_workspace = ?config.default_workspace_id(),
        timeout_secs = config.timeout().as_secs(),
        "Twist API configured"
    );

    Ok(TwistMcpServer::from_config(config)?)
}

mcp_common::serve_stdio!("twist_mcp", build_server());
