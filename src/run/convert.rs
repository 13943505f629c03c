//! Stateless mapping between wire messages and the agent runtime
//! representation.

use serde_json::{json, Value};

use crate::protocol::{WireFunctionCall, WireMessage, WireRole, WireToolCall};
use crate::types::{AgentToolCall, AgentToolResult, ContentPart, ModelMessage, Role};

/// Convert a slice of wire messages into runtime messages.
pub fn to_model_messages(messages: &[WireMessage]) -> Vec<ModelMessage> {
    messages.iter().map(to_model_message).collect()
}

/// Convert one wire message into the runtime representation.
///
/// An assistant message with tool calls expands into a text part (when
/// content is present) plus one tool-call part per call; its arguments text
/// is parsed as JSON, with parse failures degrading to an empty object. A
/// tool message with a call id becomes a single tool-result part.
pub fn to_model_message(message: &WireMessage) -> ModelMessage {
    let role = to_model_role(message.role);

    if role == Role::Tool {
        if let Some(call_id) = message.tool_call_id.as_deref().filter(|s| !s.is_empty()) {
            return ModelMessage::with_parts(
                Role::Tool,
                vec![ContentPart::ToolResult(AgentToolResult {
                    tool_call_id: call_id.to_string(),
                    result: parse_or_string(message.content.as_deref()),
                })],
            );
        }
    }

    let mut parts = Vec::new();
    if let Some(content) = &message.content {
        parts.push(ContentPart::Text {
            text: content.clone(),
        });
    }

    if let Some(calls) = &message.tool_calls {
        for call in calls {
            parts.push(ContentPart::ToolCall(AgentToolCall {
                id: call.id.clone(),
                name: call.function.name.clone(),
                arguments: parse_arguments(&call.function.arguments),
            }));
        }
    }

    if parts.is_empty() {
        // Content-less message; keep an empty text part so downstream
        // consumers always see at least one part.
        parts.push(ContentPart::Text {
            text: String::new(),
        });
    }

    ModelMessage::with_parts(role, parts)
}

/// Convert a runtime message back to the wire representation.
///
/// Tool-call parts collapse into the assistant message's `toolCalls` array
/// with arguments re-serialized to JSON text; a tool-result part becomes a
/// tool-role wire message carrying the original call id.
pub fn from_model_message(message: &ModelMessage) -> WireMessage {
    if let Some(result) = message.tool_results().first() {
        return WireMessage {
            role: WireRole::Tool,
            content: Some(value_to_content(&result.result)),
            tool_calls: None,
            tool_call_id: Some(result.tool_call_id.clone()),
        };
    }

    let text = message.text();
    let tool_calls: Vec<WireToolCall> = message
        .tool_calls()
        .into_iter()
        .map(|call| WireToolCall {
            id: call.id.clone(),
            call_type: "function".to_string(),
            function: WireFunctionCall {
                name: call.name.clone(),
                arguments: serde_json::to_string(&call.arguments)
                    .unwrap_or_else(|_| "{}".to_string()),
            },
        })
        .collect();

    WireMessage {
        role: from_model_role(message.role),
        content: Some(text),
        tool_calls: (!tool_calls.is_empty()).then_some(tool_calls),
        tool_call_id: None,
    }
}

fn to_model_role(role: WireRole) -> Role {
    match role {
        WireRole::User => Role::User,
        WireRole::Assistant => Role::Assistant,
        WireRole::System | WireRole::Developer => Role::System,
        WireRole::Tool => Role::Tool,
    }
}

fn from_model_role(role: Role) -> WireRole {
    match role {
        Role::User => WireRole::User,
        Role::Assistant => WireRole::Assistant,
        Role::System => WireRole::System,
        Role::Tool => WireRole::Tool,
    }
}

fn parse_arguments(arguments: &str) -> Value {
    serde_json::from_str(arguments).unwrap_or_else(|_| json!({}))
}

/// Tool result content is JSON when it parses, otherwise carried as a string.
fn parse_or_string(content: Option<&str>) -> Value {
    match content {
        Some(text) => serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.into())),
        None => Value::Null,
    }
}

fn value_to_content(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => serde_json::to_string(other).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn converts_plain_roles() {
        let messages = vec![
            WireMessage::text(WireRole::User, "Hello"),
            WireMessage::text(WireRole::Assistant, "Hi there!"),
            WireMessage::text(WireRole::System, "Be helpful"),
        ];
        let converted = to_model_messages(&messages);
        assert_eq!(converted.len(), 3);
        assert_eq!(converted[0].role, Role::User);
        assert_eq!(converted[0].text(), "Hello");
        assert_eq!(converted[1].role, Role::Assistant);
        assert_eq!(converted[1].text(), "Hi there!");
        assert_eq!(converted[2].role, Role::System);
    }

    #[test]
    fn developer_role_maps_to_system() {
        let message = WireMessage::text(WireRole::Developer, "Dev message");
        assert_eq!(to_model_message(&message).role, Role::System);
    }

    #[test]
    fn assistant_with_tool_calls_expands_to_parts() {
        let message = WireMessage {
            role: WireRole::Assistant,
            content: Some("Let me help with that".into()),
            tool_calls: Some(vec![WireToolCall {
                id: "call-123".into(),
                call_type: "function".into(),
                function: WireFunctionCall {
                    name: "get_weather".into(),
                    arguments: "{\"city\":\"London\"}".into(),
                },
            }]),
            tool_call_id: None,
        };

        let converted = to_model_message(&message);
        assert_eq!(converted.role, Role::Assistant);
        assert_eq!(converted.text(), "Let me help with that");

        let calls = converted.tool_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].id, "call-123");
        assert_eq!(calls[0].name, "get_weather");
        assert_eq!(calls[0].arguments, json!({"city": "London"}));
    }

    #[test]
    fn malformed_arguments_degrade_to_empty_object() {
        let message = WireMessage {
            role: WireRole::Assistant,
            content: None,
            tool_calls: Some(vec![WireToolCall {
                id: "call-1".into(),
                call_type: "function".into(),
                function: WireFunctionCall {
                    name: "search".into(),
                    arguments: "{not json".into(),
                },
            }]),
            tool_call_id: None,
        };
        let converted = to_model_message(&message);
        assert_eq!(converted.tool_calls()[0].arguments, json!({}));
    }

    #[test]
    fn tool_message_becomes_tool_result_part() {
        let message = WireMessage {
            role: WireRole::Tool,
            content: Some("{\"temperature\": 20}".into()),
            tool_calls: None,
            tool_call_id: Some("call-123".into()),
        };
        let converted = to_model_message(&message);
        assert_eq!(converted.role, Role::Tool);
        let results = converted.tool_results();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].tool_call_id, "call-123");
        assert_eq!(results[0].result, json!({"temperature": 20}));
    }

    #[test]
    fn missing_content_becomes_empty_text() {
        let message = WireMessage {
            role: WireRole::User,
            content: None,
            tool_calls: None,
            tool_call_id: None,
        };
        assert_eq!(to_model_message(&message).text(), "");
    }

    #[test]
    fn round_trips_simple_user_message() {
        let wire = from_model_message(&ModelMessage::user("Hello world"));
        assert_eq!(wire.role, WireRole::User);
        assert_eq!(wire.content.as_deref(), Some("Hello world"));
        assert!(wire.tool_calls.is_none());
    }

    #[test]
    fn system_message_round_trips() {
        let wire = from_model_message(&ModelMessage::system("You are helpful"));
        assert_eq!(wire.role, WireRole::System);
    }

    #[test]
    fn tool_call_parts_collapse_into_tool_calls_array() {
        let message = ModelMessage::with_parts(
            Role::Assistant,
            vec![
                ContentPart::Text {
                    text: "I'll help with that".into(),
                },
                ContentPart::ToolCall(AgentToolCall {
                    id: "call-abc".into(),
                    name: "search".into(),
                    arguments: json!({"query": "test"}),
                }),
            ],
        );

        let wire = from_model_message(&message);
        assert_eq!(wire.role, WireRole::Assistant);
        let calls = wire.tool_calls.unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].id, "call-abc");
        assert_eq!(calls[0].function.name, "search");
        assert_eq!(calls[0].function.arguments, "{\"query\":\"test\"}");
    }

    #[test]
    fn tool_result_part_sets_tool_call_id() {
        let message = ModelMessage::tool_result("call-xyz", json!("result data"));
        let wire = from_model_message(&message);
        assert_eq!(wire.role, WireRole::Tool);
        assert_eq!(wire.tool_call_id.as_deref(), Some("call-xyz"));
        assert_eq!(wire.content.as_deref(), Some("result data"));
    }
}
