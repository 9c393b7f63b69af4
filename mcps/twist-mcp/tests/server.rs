//! End-to-end tests for the twist-mcp server
//!
//! Tools are invoked in-process through `EmbeddableMcp::call_tool`, and the
//! Twist API is replaced by a wiremock server.

use std::time::Duration;

use mcp_common::{CallToolResult, EmbeddableMcp};
use serde_json::{json, Value};
use twist_mcp::{TwistConfig, TwistMcpServer};
use wiremock::matchers::{body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "integration-token";

fn server_for(mock: &MockServer, default_workspace: Option<i64>) -> TwistMcpServer {
    let mut config = TwistConfig::new(TOKEN)
        .with_base_url(format!("{}/api/v3", mock.uri()))
        .with_timeout(Duration::from_secs(5));
    if let Some(ws) = default_workspace {
        config = config.with_default_workspace(ws);
    }
    TwistMcpServer::from_config(config).expect("server should build")
}

fn text_of(result: &CallToolResult) -> String {
    result
        .content
        .iter()
        .filter_map(|c| match &c.raw {
            rmcp::model::RawContent::Text(t) => Some(t.text.clone()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[tokio::test]
async fn archive_all_posts_workspace_and_timestamp() {
    let mock = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v3/inbox/archive_all"))
        .and(header("authorization", "Bearer integration-token"))
        .and(body_string("older_than_ts=1000&workspace_id=42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock)
        .await;

    let server = server_for(&mock, Some(42));
    let result = server
        .call_tool("twist_inbox_archive_all", json!({ "older_than_ts": 1000 }))
        .await
        .unwrap();

    assert_ne!(result.is_error, Some(true));
    assert_eq!(
        text_of(&result),
        "Successfully archived all inbox threads in workspace ID: 42"
    );
}

#[tokio::test]
async fn inbox_get_returns_json_payload() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/inbox/get"))
        .and(query_param("workspace_id", "42"))
        .and(query_param("limit", "2"))
        .and(query_param("exclude_thread_ids", "[5,6]"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{ "id": 1 }, { "id": 2 }])),
        )
        .expect(1)
        .mount(&mock)
        .await;

    let server = server_for(&mock, Some(42));
    let result = server
        .call_tool(
            "twist_inbox_get",
            json!({ "limit": 2, "exclude_thread_ids": [5, 6] }),
        )
        .await
        .unwrap();

    let payload: Value = serde_json::from_str(&text_of(&result)).unwrap();
    assert_eq!(payload, json!([{ "id": 1 }, { "id": 2 }]));
}

#[tokio::test]
async fn inbox_get_count_empty_payload() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/inbox/get_count"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&mock)
        .await;

    let server = server_for(&mock, Some(42));
    let result = server
        .call_tool("twist_inbox_get_count", json!({}))
        .await
        .unwrap();

    assert_eq!(text_of(&result), "Failed to get inbox count");
}

#[tokio::test]
async fn missing_workspace_makes_no_request() {
    let mock = MockServer::start().await;
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&mock)
        .await;

    let server = server_for(&mock, None);
    for tool in [
        "twist_inbox_get",
        "twist_inbox_get_count",
        "twist_inbox_archive",
        "twist_inbox_unarchive",
        "twist_inbox_archive_all",
        "twist_inbox_mark_all_read",
        "twist_threads_get_unread",
        "twist_threads_clear_unread",
    ] {
        let result = server.call_tool(tool, json!({ "id": 5 })).await.unwrap();
        assert_eq!(result.is_error, Some(true), "{tool} should report an error");
        assert!(
            text_of(&result).contains("TWIST_WORKSPACE_ID"),
            "{tool} should mention the missing variable"
        );
    }
}

#[tokio::test]
async fn mark_all_read_channel_ignores_default_workspace() {
    let mock = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v3/threads/mark_all_read"))
        .and(body_string("channel_id=5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock)
        .await;

    let server = server_for(&mock, Some(42));
    let result = server
        .call_tool("twist_threads_mark_all_read", json!({ "channel_id": 5 }))
        .await
        .unwrap();

    assert_eq!(
        text_of(&result),
        "Successfully marked all threads in channel ID: 5 as read"
    );
}

#[tokio::test]
async fn http_failure_is_reported_as_tool_error() {
    let mock = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v3/threads/remove"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid token"))
        .expect(1)
        .mount(&mock)
        .await;

    let server = server_for(&mock, None);
    let result = server
        .call_tool("twist_threads_remove", json!({ "id": 7 }))
        .await
        .unwrap();

    assert_eq!(result.is_error, Some(true));
    let text = text_of(&result);
    assert!(text.starts_with("Error removing thread: HTTP 401"), "{text}");
    assert!(text.contains("invalid token"));
}

#[tokio::test]
async fn add_thread_encodes_lists_as_json() {
    let mock = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v3/threads/add"))
        .and(body_string(
            "channel_id=3&content=Body&direct_mentions=%5B1%2C2%5D&title=Hello",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 99 })))
        .expect(1)
        .mount(&mock)
        .await;

    let server = server_for(&mock, None);
    let result = server
        .call_tool(
            "twist_threads_add",
            json!({ "channel_id": 3, "title": "Hello", "content": "Body", "direct_mentions": [1, 2] }),
        )
        .await
        .unwrap();

    let payload: Value = serde_json::from_str(&text_of(&result)).unwrap();
    assert_eq!(payload, json!({ "id": 99 }));
}
