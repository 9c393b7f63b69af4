//! Inbox handler implementations

use tracing::info;

use crate::context::TwistContext;
use crate::outcome::{payload_len, ToolOutcome};
use crate::params::{InboxArchiveAllParams, InboxGetParams, InboxThreadParams, WorkspaceParams};

use super::post_action;

/// Get the authenticated user's inbox
pub async fn inbox_get(ctx: &TwistContext, mut params: InboxGetParams) -> ToolOutcome {
    let Some(workspace_id) = ctx.workspace_or_default(params.workspace_id) else {
        return ToolOutcome::missing_workspace();
    };
    params.workspace_id = Some(workspace_id);

    info!("Getting inbox for workspace ID: {}", workspace_id);

    match ctx.get("inbox/get", &params).await {
        Ok(data) => {
            let outcome = ToolOutcome::data_or_empty(data, "No inbox threads found");
            match &outcome {
                ToolOutcome::Data(d) => info!("Retrieved {} inbox threads", payload_len(d)),
                _ => info!("No inbox threads found"),
            }
            outcome
        }
        Err(e) => ToolOutcome::failed("getting inbox", e),
    }
}

/// Get the number of inbox threads in a workspace
pub async fn inbox_get_count(ctx: &TwistContext, mut params: WorkspaceParams) -> ToolOutcome {
    let Some(workspace_id) = ctx.workspace_or_default(params.workspace_id) else {
        return ToolOutcome::missing_workspace();
    };
    params.workspace_id = Some(workspace_id);

    info!("Getting inbox count for workspace ID: {}", workspace_id);

    match ctx.get("inbox/get_count", &params).await {
        Ok(data) => ToolOutcome::data_or_empty(data, "Failed to get inbox count"),
        Err(e) => ToolOutcome::failed("getting inbox count", e),
    }
}

/// Archive one inbox thread
pub async fn inbox_archive(ctx: &TwistContext, mut params: InboxThreadParams) -> ToolOutcome {
    let Some(workspace_id) = ctx.workspace_or_default(params.workspace_id) else {
        return ToolOutcome::missing_workspace();
    };
    params.workspace_id = Some(workspace_id);

    info!("Archiving thread with ID: {}", params.id);
    let success = format!("Successfully archived thread with ID: {}", params.id);
    post_action(ctx, "inbox/archive", &params, "archiving thread", success).await
}

/// Move one thread back into the active inbox
pub async fn inbox_unarchive(ctx: &TwistContext, mut params: InboxThreadParams) -> ToolOutcome {
    let Some(workspace_id) = ctx.workspace_or_default(params.workspace_id) else {
        return ToolOutcome::missing_workspace();
    };
    params.workspace_id = Some(workspace_id);

    info!("Unarchiving thread with ID: {}", params.id);
    let success = format!("Successfully unarchived thread with ID: {}", params.id);
    post_action(ctx, "inbox/unarchive", &params, "unarchiving thread", success).await
}

/// Archive every inbox thread, optionally only those older than a timestamp
pub async fn inbox_archive_all(ctx: &TwistContext, mut params: InboxArchiveAllParams) -> ToolOutcome {
    let Some(workspace_id) = ctx.workspace_or_default(params.workspace_id) else {
        return ToolOutcome::missing_workspace();
    };
    params.workspace_id = Some(workspace_id);

    info!("Archiving all inbox threads for workspace ID: {}", workspace_id);
    let success = format!(
        "Successfully archived all inbox threads in workspace ID: {}",
        workspace_id
    );
    post_action(
        ctx,
        "inbox/archive_all",
        &params,
        "archiving all inbox threads",
        success,
    )
    .await
}

/// Mark every inbox thread as read
pub async fn inbox_mark_all_read(ctx: &TwistContext, mut params: WorkspaceParams) -> ToolOutcome {
    let Some(workspace_id) = ctx.workspace_or_default(params.workspace_id) else {
        return ToolOutcome::missing_workspace();
    };
    params.workspace_id = Some(workspace_id);

    info!("Marking all inbox threads as read for workspace ID: {}", workspace_id);
    let success = format!(
        "Successfully marked all inbox threads as read in workspace ID: {}",
        workspace_id
    );
    post_action(
        ctx,
        "inbox/mark_all_read",
        &params,
        "marking all inbox threads as read",
        success,
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing::{context, ok_api, RecordingApi, TOKEN};
    use crate::params::ArchiveFilter;
    use reqwest::Method;
    use serde_json::json;

    fn thread(id: i64) -> InboxThreadParams {
        InboxThreadParams {
            id,
            workspace_id: None,
        }
    }

    #[tokio::test]
    async fn test_inbox_get_uses_default_workspace() {
        let api = RecordingApi::replying(json!([{ "id": 1 }, { "id": 2 }]));
        let ctx = context(&api, Some(42));

        let outcome = inbox_get(
            &ctx,
            InboxGetParams {
                limit: Some(10),
                archive_filter: Some(ArchiveFilter::Archived),
                ..Default::default()
            },
        )
        .await;

        assert_eq!(outcome, ToolOutcome::Data(json!([{ "id": 1 }, { "id": 2 }])));
        let call = api.single_call();
        assert_eq!(call.endpoint, "inbox/get");
        assert_eq!(call.method, Method::GET);
        assert_eq!(call.token, TOKEN);
        assert_eq!(
            call.params.to_json(),
            json!({ "workspace_id": 42, "limit": 10, "archive_filter": "archived" })
        );
    }

    #[tokio::test]
    async fn test_inbox_get_explicit_workspace_wins() {
        let api = RecordingApi::replying(json!([{ "id": 1 }]));
        let ctx = context(&api, Some(42));

        inbox_get(
            &ctx,
            InboxGetParams {
                workspace_id: Some(9),
                ..Default::default()
            },
        )
        .await;

        assert_eq!(api.single_call().params.to_json(), json!({ "workspace_id": 9 }));
    }

    #[tokio::test]
    async fn test_inbox_get_empty() {
        let api = RecordingApi::replying(json!([]));
        let ctx = context(&api, Some(42));

        let outcome = inbox_get(&ctx, InboxGetParams::default()).await;
        assert_eq!(outcome, ToolOutcome::Empty("No inbox threads found".into()));
    }

    #[tokio::test]
    async fn test_workspace_tools_without_workspace_make_no_calls() {
        let api = ok_api();
        let ctx = context(&api, None);
        let expected = "Error: TWIST_WORKSPACE_ID environment variable is required";

        let outcomes = [
            inbox_get(&ctx, InboxGetParams::default()).await,
            inbox_get_count(&ctx, WorkspaceParams::default()).await,
            inbox_archive(&ctx, thread(5)).await,
            inbox_unarchive(&ctx, thread(5)).await,
            inbox_archive_all(&ctx, InboxArchiveAllParams::default()).await,
            inbox_mark_all_read(&ctx, WorkspaceParams::default()).await,
        ];

        for outcome in outcomes {
            assert_eq!(outcome.text(), Some(expected));
        }
        assert_eq!(api.call_count(), 0);
    }

    #[tokio::test]
    async fn test_inbox_get_count_falsy() {
        let api = RecordingApi::replying(json!({}));
        let ctx = context(&api, Some(42));

        let outcome = inbox_get_count(&ctx, WorkspaceParams::default()).await;
        assert_eq!(outcome.text(), Some("Failed to get inbox count"));

        let call = api.single_call();
        assert_eq!(call.endpoint, "inbox/get_count");
        assert_eq!(call.method, Method::GET);
    }

    #[tokio::test]
    async fn test_inbox_get_count_data() {
        let api = RecordingApi::replying(json!({ "count": 3 }));
        let ctx = context(&api, Some(42));

        let outcome = inbox_get_count(&ctx, WorkspaceParams::default()).await;
        assert_eq!(outcome, ToolOutcome::Data(json!({ "count": 3 })));
    }

    #[tokio::test]
    async fn test_inbox_archive_all_params() {
        let api = ok_api();
        let ctx = context(&api, Some(42));

        let outcome = inbox_archive_all(
            &ctx,
            InboxArchiveAllParams {
                workspace_id: None,
                older_than_ts: Some(1000),
            },
        )
        .await;

        assert_eq!(
            outcome.text(),
            Some("Successfully archived all inbox threads in workspace ID: 42")
        );
        let call = api.single_call();
        assert_eq!(call.endpoint, "inbox/archive_all");
        assert_eq!(call.method, Method::POST);
        assert_eq!(
            call.params.to_json(),
            json!({ "workspace_id": 42, "older_than_ts": 1000 })
        );
    }

    #[tokio::test]
    async fn test_inbox_archive_uses_default_workspace() {
        let api = ok_api();
        let ctx = context(&api, Some(42));

        let outcome = inbox_archive(&ctx, thread(5)).await;
        assert_eq!(outcome.text(), Some("Successfully archived thread with ID: 5"));
        let call = api.single_call();
        assert_eq!(call.endpoint, "inbox/archive");
        assert_eq!(call.method, Method::POST);
        assert_eq!(call.params.to_json(), json!({ "id": 5, "workspace_id": 42 }));
    }

    #[tokio::test]
    async fn test_inbox_unarchive_explicit_workspace_wins() {
        let api = ok_api();
        let ctx = context(&api, Some(42));

        let outcome = inbox_unarchive(
            &ctx,
            InboxThreadParams {
                id: 5,
                workspace_id: Some(9),
            },
        )
        .await;
        assert_eq!(outcome.text(), Some("Successfully unarchived thread with ID: 5"));
        let call = api.single_call();
        assert_eq!(call.endpoint, "inbox/unarchive");
        assert_eq!(call.params.to_json(), json!({ "id": 5, "workspace_id": 9 }));
    }

    #[tokio::test]
    async fn test_inbox_mark_all_read_http_error() {
        let api = RecordingApi::failing(500, "boom");
        let ctx = context(&api, Some(42));

        let outcome = inbox_mark_all_read(&ctx, WorkspaceParams::default()).await;
        assert!(outcome.is_failure());
        let text = outcome.text().unwrap();
        assert!(text.starts_with("Error marking all inbox threads as read: HTTP 500"));
        assert!(text.contains("boom"));
    }
}
