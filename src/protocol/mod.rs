//! Wire-level protocol types: inbound run requests and outbound events.

pub mod events;

pub use events::{EventRole, InterruptInfo, ProtocolEvent, RunOutcome};

use std::collections::HashSet;

use bon::Builder;
use serde::{Deserialize, Serialize};

/// A message as it appears on the wire (client <-> server).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WireMessage {
    pub role: WireRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<WireToolCall>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
}

impl WireMessage {
    /// Create a plain text message with the given role.
    pub fn text(role: WireRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: Some(content.into()),
            tool_calls: None,
            tool_call_id: None,
        }
    }
}

/// Role of a wire message.
///
/// Unknown roles deserialize as [`User`](Self::User).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WireRole {
    Assistant,
    System,
    Developer,
    Tool,
    // serde requires the catch-all variant to come last.
    #[serde(other)]
    User,
}

/// A tool call attached to an assistant wire message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WireToolCall {
    pub id: String,
    #[serde(rename = "type", default = "function_call_type")]
    pub call_type: String,
    pub function: WireFunctionCall,
}

fn function_call_type() -> String {
    "function".to_string()
}

/// The function invocation inside a [`WireToolCall`].
///
/// `arguments` is the JSON-serialized argument object, kept as text on the
/// wire exactly as providers emit it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WireFunctionCall {
    pub name: String,
    pub arguments: String,
}

/// Definition of a tool whose execution happens on the client.
///
/// The schema is forwarded to the language model; the server never executes
/// the tool or sees its result outside of a resume payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FrontendToolDefinition {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<serde_json::Value>,
}

/// Continuation info for a run that was previously interrupted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResumeInfo {
    pub interrupt_id: String,
    pub payload: serde_json::Value,
}

/// An inbound request to execute one streaming run.
#[derive(Debug, Clone, Builder, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RunAgentRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thread_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_id: Option<String>,
    #[serde(default)]
    pub messages: Vec<WireMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<FrontendToolDefinition>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume: Option<ResumeInfo>,
}

/// Case-insensitive set of frontend tool names.
///
/// Used only to classify tool calls as client-executed; names are stored
/// lowercased so lookups match regardless of provider casing.
#[derive(Debug, Clone, Default)]
pub struct FrontendToolSet {
    names: HashSet<String>,
}

impl FrontendToolSet {
    /// Build from an iterator of tool names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names
                .into_iter()
                .map(|n| n.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Build from the tool definitions of a run request.
    pub fn from_definitions(tools: &[FrontendToolDefinition]) -> Self {
        Self::from_names(tools.iter().map(|t| t.name.as_str()))
    }

    /// Whether `name` is a frontend tool (case-insensitive exact match).
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&name.to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }
}
