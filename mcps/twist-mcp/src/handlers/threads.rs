//! Thread handler implementations

use tracing::{error, info};

use crate::context::TwistContext;
use crate::outcome::{payload_len, ToolOutcome};
use crate::params::{
    MarkAllReadParams, MarkReadParams, MarkUnreadParams, MoveToChannelParams, MuteParams,
    ThreadIdParams, ThreadsAddParams, ThreadsGetParams, ThreadsUpdateParams, WorkspaceParams,
};

use super::post_action;

/// Get a thread object by id
pub async fn threads_getone(ctx: &TwistContext, params: ThreadIdParams) -> ToolOutcome {
    info!("Getting thread with ID: {}", params.id);
    match ctx.get("threads/getone", &params).await {
        Ok(data) => {
            info!("Retrieved thread with ID: {}", params.id);
            ToolOutcome::Data(data)
        }
        Err(e) => ToolOutcome::failed("getting thread", e),
    }
}

/// List the threads of a channel
pub async fn threads_get(ctx: &TwistContext, params: ThreadsGetParams) -> ToolOutcome {
    info!("Getting threads for channel ID: {}", params.channel_id);
    match ctx.get("threads/get", &params).await {
        Ok(data) => {
            let outcome = ToolOutcome::data_or_empty(data, "No threads found");
            match &outcome {
                ToolOutcome::Data(d) => info!("Retrieved {} threads", payload_len(d)),
                _ => info!("No threads found"),
            }
            outcome
        }
        Err(e) => ToolOutcome::failed("getting threads", e),
    }
}

/// Create a thread in a channel
pub async fn threads_add(ctx: &TwistContext, params: ThreadsAddParams) -> ToolOutcome {
    info!("Adding thread to channel ID: {}", params.channel_id);
    match ctx.post("threads/add", &params).await {
        Ok(data) => {
            info!("Added thread with ID: {}", data.get("id").unwrap_or(&serde_json::Value::Null));
            ToolOutcome::Data(data)
        }
        Err(e) => ToolOutcome::failed("adding thread", e),
    }
}

pub async fn threads_update(ctx: &TwistContext, params: ThreadsUpdateParams) -> ToolOutcome {
    info!("Updating thread with ID: {}", params.id);
    match ctx.post("threads/update", &params).await {
        Ok(data) => {
            info!("Updated thread with ID: {}", params.id);
            ToolOutcome::Data(data)
        }
        Err(e) => ToolOutcome::failed("updating thread", e),
    }
}

pub async fn threads_remove(ctx: &TwistContext, params: ThreadIdParams) -> ToolOutcome {
    info!("Removing thread with ID: {}", params.id);
    let success = format!("Successfully removed thread with ID: {}", params.id);
    post_action(ctx, "threads/remove", &params, "removing thread", success).await
}

pub async fn threads_star(ctx: &TwistContext, params: ThreadIdParams) -> ToolOutcome {
    info!("Starring thread with ID: {}", params.id);
    let success = format!("Successfully starred thread with ID: {}", params.id);
    post_action(ctx, "threads/star", &params, "starring thread", success).await
}

pub async fn threads_unstar(ctx: &TwistContext, params: ThreadIdParams) -> ToolOutcome {
    info!("Unstarring thread with ID: {}", params.id);
    let success = format!("Successfully unstarred thread with ID: {}", params.id);
    post_action(ctx, "threads/unstar", &params, "unstarring thread", success).await
}

pub async fn threads_pin(ctx: &TwistContext, params: ThreadIdParams) -> ToolOutcome {
    info!("Pinning thread with ID: {}", params.id);
    let success = format!("Successfully pinned thread with ID: {}", params.id);
    post_action(ctx, "threads/pin", &params, "pinning thread", success).await
}

pub async fn threads_unpin(ctx: &TwistContext, params: ThreadIdParams) -> ToolOutcome {
    info!("Unpinning thread with ID: {}", params.id);
    let success = format!("Successfully unpinned thread with ID: {}", params.id);
    post_action(ctx, "threads/unpin", &params, "unpinning thread", success).await
}

pub async fn threads_move_to_channel(ctx: &TwistContext, params: MoveToChannelParams) -> ToolOutcome {
    info!("Moving thread with ID: {} to channel: {}", params.id, params.to_channel);
    let success = format!(
        "Successfully moved thread with ID: {} to channel: {}",
        params.id, params.to_channel
    );
    post_action(ctx, "threads/move_to_channel", &params, "moving thread", success).await
}

/// Unread threads of the authenticated user in a workspace
pub async fn threads_get_unread(ctx: &TwistContext, mut params: WorkspaceParams) -> ToolOutcome {
    let Some(workspace_id) = ctx.workspace_or_default(params.workspace_id) else {
        return ToolOutcome::missing_workspace();
    };
    params.workspace_id = Some(workspace_id);

    info!("Getting unread threads for workspace ID: {}", workspace_id);

    match ctx.get("threads/get_unread", &params).await {
        Ok(data) => {
            let outcome = ToolOutcome::data_or_empty(data, "No unread threads found");
            match &outcome {
                ToolOutcome::Data(d) => info!("Retrieved {} unread threads", payload_len(d)),
                _ => info!("No unread threads found"),
            }
            outcome
        }
        Err(e) => ToolOutcome::failed("getting unread threads", e),
    }
}

pub async fn threads_mark_read(ctx: &TwistContext, params: MarkReadParams) -> ToolOutcome {
    info!(
        "Marking thread with ID: {} as read up to comment index: {}",
        params.id, params.obj_index
    );
    let success = format!(
        "Successfully marked thread with ID: {} as read up to comment index: {}",
        params.id, params.obj_index
    );
    post_action(ctx, "threads/mark_read", &params, "marking thread as read", success).await
}

pub async fn threads_mark_unread(ctx: &TwistContext, params: MarkUnreadParams) -> ToolOutcome {
    info!(
        "Marking thread with ID: {} as unread from comment index: {}",
        params.id, params.obj_index
    );
    let success = format!(
        "Successfully marked thread with ID: {} as unread from comment index: {}",
        params.id, params.obj_index
    );
    post_action(ctx, "threads/mark_unread", &params, "marking thread as unread", success).await
}

pub async fn threads_mark_unread_for_others(
    ctx: &TwistContext,
    params: MarkUnreadParams,
) -> ToolOutcome {
    info!(
        "Marking thread with ID: {} as unread for others from comment index: {}",
        params.id, params.obj_index
    );
    let success = format!(
        "Successfully marked thread with ID: {} as unread for others from comment index: {}",
        params.id, params.obj_index
    );
    post_action(
        ctx,
        "threads/mark_unread_for_others",
        &params,
        "marking thread as unread for others",
        success,
    )
    .await
}

/// Mark everything in a channel or workspace as read
///
/// Explicit `channel_id`/`workspace_id` arguments are sent as given. The
/// configured default workspace is used only when both are absent.
pub async fn threads_mark_all_read(ctx: &TwistContext, mut params: MarkAllReadParams) -> ToolOutcome {
    let target = match (params.channel_id, params.workspace_id) {
        (Some(channel_id), _) => format!("channel ID: {}", channel_id),
        (None, Some(workspace_id)) => format!("workspace ID: {}", workspace_id),
        (None, None) => match ctx.config().default_workspace_id() {
            Some(workspace_id) => {
                params.workspace_id = Some(workspace_id);
                format!("workspace ID: {}", workspace_id)
            }
            None => {
                error!("Either workspace_id or channel_id is required");
                return ToolOutcome::Failed(
                    "Error: Either workspace_id or channel_id is required".to_string(),
                );
            }
        },
    };

    info!("Marking all threads in {} as read", target);
    let success = format!("Successfully marked all threads in {} as read", target);
    post_action(
        ctx,
        "threads/mark_all_read",
        &params,
        "marking all threads as read",
        success,
    )
    .await
}

pub async fn threads_clear_unread(ctx: &TwistContext, mut params: WorkspaceParams) -> ToolOutcome {
    let Some(workspace_id) = ctx.workspace_or_default(params.workspace_id) else {
        return ToolOutcome::missing_workspace();
    };
    params.workspace_id = Some(workspace_id);

    info!("Clearing unread threads for workspace ID: {}", workspace_id);
    post_action(
        ctx,
        "threads/clear_unread",
        &params,
        "clearing unread threads",
        "Successfully cleared unread threads".to_string(),
    )
    .await
}

/// Mute a thread; answers with the updated thread object
pub async fn threads_mute(ctx: &TwistContext, params: MuteParams) -> ToolOutcome {
    info!("Muting thread with ID: {} for {} minutes", params.id, params.minutes);
    match ctx.post("threads/mute", &params).await {
        Ok(data) => {
            info!("Successfully muted thread with ID: {}", params.id);
            ToolOutcome::Data(data)
        }
        Err(e) => ToolOutcome::failed("muting thread", e),
    }
}

/// Unmute a thread; answers with the updated thread object
pub async fn threads_unmute(ctx: &TwistContext, params: ThreadIdParams) -> ToolOutcome {
    info!("Unmuting thread with ID: {}", params.id);
    match ctx.post("threads/unmute", &params).await {
        Ok(data) => {
            info!("Successfully unmuted thread with ID: {}", params.id);
            ToolOutcome::Data(data)
        }
        Err(e) => ToolOutcome::failed("unmuting thread", e),
    }
}
