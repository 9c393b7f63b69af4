//! `CallToolResult` constructors used by tool handlers

use rmcp::{
    model::{CallToolResult, Content},
    ErrorData as McpError,
};
use serde::Serialize;

/// Successful result carrying `data` as pretty-printed JSON text
///
/// Fails only if `data` cannot be serialized.
pub fn json_success<T: Serialize>(data: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| McpError::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

/// Successful plain text result
pub fn text_success(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

/// Tool-level failure reported as text
///
/// The call itself completes normally and the client sees `is_error = true`
/// with the message, as opposed to an MCP protocol error.
pub fn error_text(text: impl Into<String>) -> CallToolResult {
    CallToolResult::error(vec![Content::text(text.into())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn first_text(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            rmcp::model::RawContent::Text(t) => t.text.as_str(),
            _ => panic!("expected text content"),
        }
    }

    #[test]
    fn test_json_success_is_pretty() {
        let result = json_success(&json!({ "id": 7 })).unwrap();
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(first_text(&result), "{\n  \"id\": 7\n}");
    }

    #[test]
    fn test_text_success() {
        let result = text_success("hello world");
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(first_text(&result), "hello world");
    }

    #[test]
    fn test_error_text_sets_flag() {
        let result = error_text("Error starring thread: boom");
        assert_eq!(result.is_error, Some(true));
        assert_eq!(first_text(&result), "Error starring thread: boom");
    }
}
