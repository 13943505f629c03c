//! Extraction of tool results from a resume payload.

use serde_json::Value;
use tracing::{debug, warn};

use crate::types::ModelMessage;

/// Convert a resume payload into tool-result messages to append to history.
///
/// Expected payload shape:
///
/// ```json
/// {
///   "toolResults": [
///     { "toolCallId": "call-1", "result": { "color": "#fff" } }
///   ]
/// }
/// ```
///
/// Entries missing either field are skipped individually; a payload without a
/// `toolResults` array, or that is not an object, yields no messages. This
/// never fails — a malformed payload degrades to an empty list so the run
/// proceeds on the original history. `interrupt_id` is used only for logging.
pub fn extract_tool_results(payload: &Value, interrupt_id: &str) -> Vec<ModelMessage> {
    let Some(entries) = payload.get("toolResults").and_then(Value::as_array) else {
        warn!(
            interrupt_id,
            "resume payload has no toolResults array, resuming without tool results"
        );
        return Vec::new();
    };

    let mut messages = Vec::new();
    for entry in entries {
        let Some(call_id) = entry
            .get("toolCallId")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
        else {
            warn!(interrupt_id, "skipping resume entry without toolCallId");
            continue;
        };
        let Some(result) = entry.get("result") else {
            warn!(
                interrupt_id,
                tool_call_id = call_id,
                "skipping resume entry without result"
            );
            continue;
        };
        messages.push(ModelMessage::tool_result(call_id, result.clone()));
    }

    debug!(
        interrupt_id,
        count = messages.len(),
        "extracted tool results from resume payload"
    );
    messages
}
