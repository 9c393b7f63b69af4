//! Tool results before they are turned into MCP responses

use std::fmt::Display;

use mcp_common::{error_text, json_success, text_success, CallToolResult, McpError};
use serde_json::Value;
use tracing::error;

use crate::config::WORKSPACE_ENV;

/// What a tool handler produced
///
/// Get-style tools collapse an empty payload into a fixed message, and
/// action tools answer with fixed text instead of the API payload, so the
/// variants keep those shapes apart for callers and tests.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutcome {
    /// Payload returned by the API
    Data(Value),
    /// The API returned an empty/falsy payload
    Empty(String),
    /// Fixed success message of an action tool
    Message(String),
    /// `Error <doing X>: <reason>` or a local configuration error
    Failed(String),
}

impl ToolOutcome {
    /// `Data` unless the payload is falsy, in which case `Empty(empty_message)`
    pub fn data_or_empty(value: Value, empty_message: &str) -> Self {
        if is_falsy(&value) {
            ToolOutcome::Empty(empty_message.to_string())
        } else {
            ToolOutcome::Data(value)
        }
    }

    /// Log and wrap a failure that happened while `action` was in progress
    pub fn failed(action: &str, err: impl Display) -> Self {
        error!("Error {}: {}", action, err);
        ToolOutcome::Failed(format!("Error {}: {}", action, err))
    }

    pub(crate) fn missing_workspace() -> Self {
        error!("{} environment variable is required", WORKSPACE_ENV);
        ToolOutcome::Failed(format!(
            "Error: {} environment variable is required",
            WORKSPACE_ENV
        ))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ToolOutcome::Failed(_))
    }

    /// The text of a non-`Data` outcome
    pub fn text(&self) -> Option<&str> {
        match self {
            ToolOutcome::Data(_) => None,
            ToolOutcome::Empty(s) | ToolOutcome::Message(s) | ToolOutcome::Failed(s) => Some(s),
        }
    }

    pub fn into_call_result(self) -> Result<CallToolResult, McpError> {
        match self {
            ToolOutcome::Data(value) => json_success(&value),
            ToolOutcome::Empty(text) | ToolOutcome::Message(text) => Ok(text_success(text)),
            ToolOutcome::Failed(text) => Ok(error_text(text)),
        }
    }
}

/// Whether a payload counts as "no data": null, false, zero, or an empty
/// string, array or object
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// Number of items in a list/object payload, for logging
pub(crate) fn payload_len(value: &Value) -> usize {
    match value {
        Value::Array(a) => a.len(),
        Value::Object(o) => o.len(),
        _ => 1,
    }
}
