//! Parameter types for Twist MCP tools
//!
//! Each struct is both the tool's input schema and, once serialized, the
//! outgoing request parameters: `None` fields are left out of the request.

mod inbox;
mod threads;

pub use inbox::*;
pub use threads::*;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Sort direction on `last_updated`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum OrderBy {
    Desc,
    Asc,
}

/// Parameters for tools that act on a single thread
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ThreadIdParams {
    #[schemars(description = "The id of the thread")]
    pub id: i64,
}

/// Parameters for workspace-scoped tools that take nothing else
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct WorkspaceParams {
    #[schemars(
        description = "The id of the workspace. Defaults to the TWIST_WORKSPACE_ID environment variable"
    )]
    pub workspace_id: Option<i64>,
}
