//! Thread parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::OrderBy;

/// Whose threads `threads/get` returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ThreadFilter {
    AttachedToMe,
    Everyone,
}

/// Users attached to a new thread: explicit ids or the literal `"EVERYONE"`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Recipients {
    Users(Vec<i64>),
    Keyword(String),
}

/// Parameters for listing threads in a channel
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ThreadsGetParams {
    #[schemars(description = "The id of the channel")]
    pub channel_id: i64,

    #[schemars(description = "If enabled, only the ids of the threads are returned")]
    pub as_ids: Option<bool>,

    #[schemars(
        description = "A filter can be one of \"attached_to_me\" or \"everyone\". Default is \"everyone\""
    )]
    pub filter_by: Option<ThreadFilter>,

    #[schemars(description = "Limits the number of threads returned (default is 20, maximum is 500)")]
    pub limit: Option<u32>,

    #[schemars(description = "Limits threads to those newer when the specified Unix time")]
    pub newer_than_ts: Option<i64>,

    #[schemars(description = "Limits threads to those older when the specified Unix time")]
    pub older_than_ts: Option<i64>,

    #[schemars(description = "Limits threads to those with a lower than the specified id")]
    pub before_id: Option<i64>,

    #[schemars(description = "Limits threads to those with a higher than the specified id")]
    pub after_id: Option<i64>,

    #[schemars(description = "The id of the workspace")]
    pub workspace_id: Option<i64>,

    #[schemars(description = "If enabled, only pinned threads are returned")]
    pub is_pinned: Option<bool>,

    #[schemars(description = "If enabled, only starred threads are returned")]
    pub is_starred: Option<bool>,

    #[schemars(description = "The order of the threads returned. Either \"desc\" (default) or \"asc\"")]
    pub order_by: Option<OrderBy>,

    #[schemars(description = "The thread ids that should be excluded from the results")]
    pub exclude_thread_ids: Option<Vec<i64>>,
}

/// Parameters for adding a thread
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ThreadsAddParams {
    #[schemars(description = "The id of the channel")]
    pub channel_id: i64,

    #[schemars(description = "The title of the new thread")]
    pub title: String,

    #[schemars(description = "The content of the new thread")]
    pub content: String,

    #[schemars(description = "List of action buttons to the new thread")]
    pub actions: Option<Vec<Value>>,

    #[schemars(description = "List of attachments to the new thread")]
    pub attachments: Option<Vec<Value>>,

    #[schemars(description = "The groups that are directly mentioned")]
    pub direct_group_mentions: Option<Vec<i64>>,

    #[schemars(description = "The users that are directly mentioned")]
    pub direct_mentions: Option<Vec<i64>>,

    #[schemars(description = "The groups that will be notified")]
    pub groups: Option<Vec<i64>>,

    #[schemars(
        description = "An array of users that will be attached to the thread or \"EVERYONE\""
    )]
    pub recipients: Option<Recipients>,

    #[schemars(description = "Displays the integration as the thread creator")]
    pub send_as_integration: Option<bool>,

    #[schemars(description = "The temporary id of the thread")]
    pub temp_id: Option<i64>,
}

/// Parameters for updating a thread
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ThreadsUpdateParams {
    #[schemars(description = "The id of the thread")]
    pub id: i64,

    #[schemars(description = "List of action buttons to the thread")]
    pub actions: Option<Vec<Value>>,

    #[schemars(description = "List of attachments to the thread")]
    pub attachments: Option<Vec<Value>>,

    #[schemars(description = "The content of the thread")]
    pub content: Option<String>,

    #[schemars(description = "The groups that are directly mentioned")]
    pub direct_group_mentions: Option<Vec<i64>>,

    #[schemars(description = "The users that are directly mentioned")]
    pub direct_mentions: Option<Vec<i64>>,

    #[schemars(description = "The title of the thread")]
    pub title: Option<String>,
}

/// Parameters for moving a thread to another channel
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MoveToChannelParams {
    #[schemars(description = "The id of the thread")]
    pub id: i64,

    #[schemars(description = "The target channel's id")]
    pub to_channel: i64,
}

/// Parameters for marking a thread as read
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MarkReadParams {
    #[schemars(description = "The id of the thread")]
    pub id: i64,

    #[schemars(description = "The index of the last known read message")]
    pub obj_index: i64,
}

/// Parameters for marking a thread as unread, for yourself or for others
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MarkUnreadParams {
    #[schemars(description = "The id of the thread")]
    pub id: i64,

    #[schemars(
        description = "The index of the last unread message. A value of -1 marks the whole thread as unread"
    )]
    pub obj_index: i64,
}

/// Parameters for marking all threads in a workspace or channel as read
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct MarkAllReadParams {
    #[schemars(description = "The id of the workspace")]
    pub workspace_id: Option<i64>,

    #[schemars(description = "The id of the channel")]
    pub channel_id: Option<i64>,
}

/// Parameters for muting a thread
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MuteParams {
    #[schemars(description = "The id of the thread")]
    pub id: i64,

    #[schemars(description = "The number of minutes to mute the thread")]
    pub minutes: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::twist::RequestParams;
    use serde_json::json;

    #[test]
    fn test_threads_get_only_supplied_fields() {
        let params: ThreadsGetParams =
            serde_json::from_value(json!({ "channel_id": 3, "is_starred": true, "order_by": "asc" }))
                .unwrap();

        let request = RequestParams::from_args(&params).unwrap();
        assert_eq!(
            request.to_json(),
            json!({ "channel_id": 3, "is_starred": true, "order_by": "asc" })
        );
    }

    #[test]
    fn test_filter_by_wire_names() {
        let params: ThreadsGetParams =
            serde_json::from_value(json!({ "channel_id": 3, "filter_by": "attached_to_me" })).unwrap();
        assert_eq!(params.filter_by, Some(ThreadFilter::AttachedToMe));

        let request = RequestParams::from_args(&params).unwrap();
        assert_eq!(request.get("filter_by"), Some(&json!("attached_to_me")));
    }

    #[test]
    fn test_recipients_accepts_ids_or_keyword() {
        let ids: Recipients = serde_json::from_value(json!([1, 2])).unwrap();
        assert_eq!(ids, Recipients::Users(vec![1, 2]));

        let everyone: Recipients = serde_json::from_value(json!("EVERYONE")).unwrap();
        assert_eq!(everyone, Recipients::Keyword("EVERYONE".into()));
    }

    #[test]
    fn test_add_requires_title_and_content() {
        let result: Result<ThreadsAddParams, _> =
            serde_json::from_value(json!({ "channel_id": 3, "title": "t" }));
        assert!(result.is_err());
    }
}
