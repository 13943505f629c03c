//! Incremental generation updates produced by an agent.

use serde::{Deserialize, Serialize};

/// One incremental update from an agent's generation stream.
///
/// An update may carry zero or more content fragments (tool calls, tool
/// results) and an optional text delta. Fragments are processed before the
/// text, in the order the agent produced them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AgentUpdate {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contents: Vec<ContentFragment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl AgentUpdate {
    /// Create a text-only update.
    pub fn text(delta: impl Into<String>) -> Self {
        Self {
            contents: Vec::new(),
            text: Some(delta.into()),
        }
    }

    /// Create an update carrying a single tool call.
    pub fn tool_call(
        id: Option<String>,
        name: impl Into<String>,
        arguments: Option<serde_json::Value>,
    ) -> Self {
        Self {
            contents: vec![ContentFragment::ToolCall {
                id,
                name: name.into(),
                arguments,
            }],
            text: None,
        }
    }

    /// Create an update carrying a single tool result.
    pub fn tool_result(id: Option<String>, result: Option<serde_json::Value>) -> Self {
        Self {
            contents: vec![ContentFragment::ToolResult { id, result }],
            text: None,
        }
    }
}

/// A single generation fragment, matched exhaustively by the orchestrator.
///
/// Tool-call ids are optional: some providers omit them, in which case the
/// correlation layer synthesizes an id and carries it to the next id-less
/// result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentFragment {
    ToolCall {
        id: Option<String>,
        name: String,
        arguments: Option<serde_json::Value>,
    },
    ToolResult {
        id: Option<String>,
        result: Option<serde_json::Value>,
    },
}
