//! Handler implementations for Twist MCP tools
//!
//! Organized by API area: inbox, threads. Every handler returns a
//! [`ToolOutcome`]; gateway errors never escape.

mod inbox;
mod threads;

pub use inbox::*;
pub use threads::*;

use serde::Serialize;
use tracing::info;

use crate::context::TwistContext;
use crate::outcome::ToolOutcome;

/// POST `args` to `endpoint` and answer with `success` on any 2xx JSON reply
async fn post_action<T: Serialize>(
    ctx: &TwistContext,
    endpoint: &str,
    args: &T,
    action: &str,
    success: String,
) -> ToolOutcome {
    match ctx.post(endpoint, args).await {
        Ok(_) => {
            info!("{}", success);
            ToolOutcome::Message(success)
        }
        Err(e) => ToolOutcome::failed(action, e),
    }
}
