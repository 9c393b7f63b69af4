//! Inbox parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::OrderBy;

/// Which threads `inbox/get` returns, by their `is_archived` flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ArchiveFilter {
    All,
    Archived,
    Active,
}

/// Parameters for getting the inbox
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct InboxGetParams {
    #[schemars(
        description = "The id of the workspace. Defaults to the TWIST_WORKSPACE_ID environment variable"
    )]
    pub workspace_id: Option<i64>,

    #[schemars(description = "Limits the number of threads returned (default is 30, maximum is 500)")]
    pub limit: Option<u32>,

    #[schemars(description = "Limits threads to those newer when the specified Unix time")]
    pub newer_than_ts: Option<i64>,

    #[schemars(description = "Limits threads to those older when the specified Unix time")]
    pub older_than_ts: Option<i64>,

    #[schemars(
        description = "Filter threads based on their is_archived flag: 'all', 'archived', or 'active' (default)"
    )]
    pub archive_filter: Option<ArchiveFilter>,

    #[schemars(
        description = "Order of threads: 'desc' (default) or 'asc', based on last_updated attribute"
    )]
    pub order_by: Option<OrderBy>,

    #[schemars(description = "Thread IDs to exclude from results")]
    pub exclude_thread_ids: Option<Vec<i64>>,
}

/// Parameters for archiving every inbox thread
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct InboxArchiveAllParams {
    #[schemars(
        description = "The id of the workspace. Defaults to the TWIST_WORKSPACE_ID environment variable"
    )]
    pub workspace_id: Option<i64>,

    #[schemars(description = "Only archive threads older than the specified Unix time")]
    pub older_than_ts: Option<i64>,
}

/// Parameters for archiving or unarchiving one inbox thread
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct InboxThreadParams {
    #[schemars(description = "The id of the thread")]
    pub id: i64,

    #[schemars(
        description = "The id of the workspace. Defaults to the TWIST_WORKSPACE_ID environment variable"
    )]
    pub workspace_id: Option<i64>,
}
