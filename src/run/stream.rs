//! The streaming orchestrator.
//!
//! Drives one run end to end: converts the inbound messages, splices in
//! resume results, consumes the agent's update stream, and translates
//! everything into a strictly ordered protocol event sequence. Mid-stream
//! failures become terminal events instead of propagating; the sequence
//! always ends with exactly one `RUN_FINISHED` (cancellation excepted, which
//! simply ends the stream).

use std::sync::Arc;

use futures::stream::BoxStream;
use futures::StreamExt;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};

use crate::agent::StreamingAgent;
use crate::error::AgentWireError;
use crate::protocol::{FrontendToolSet, ProtocolEvent, RunAgentRequest};
use crate::types::ContentFragment;

use super::convert;
use super::emitter::EventEmitter;
use super::resume;

/// Error code attached to `RUN_ERROR` events for mid-stream failures.
const STREAMING_ERROR: &str = "STREAMING_ERROR";

/// Execute one streaming run, producing the run's protocol event sequence.
///
/// Event production is strictly sequential; the stream suspends while
/// awaiting the next agent update. For every non-cancelled run the sequence
/// opens with `RUN_STARTED` and closes with exactly one `RUN_FINISHED`, with
/// a `RUN_ERROR` immediately before it when the agent stream failed.
/// Cancelling `cancel` stops consumption promptly and ends the stream
/// without synthesizing an error.
pub fn stream_run(
    agent: Arc<dyn StreamingAgent>,
    request: RunAgentRequest,
    frontend_tools: FrontendToolSet,
    cancel: CancellationToken,
) -> BoxStream<'static, ProtocolEvent> {
    let events = async_stream::stream! {
        let mut emitter = EventEmitter::new(request.thread_id.clone(), request.run_id.clone());
        yield emitter.run_started();

        let mut messages = convert::to_model_messages(&request.messages);

        if let Some(resume_info) = &request.resume {
            let resumed = resume::extract_tool_results(&resume_info.payload, &resume_info.interrupt_id);
            debug!(
                interrupt_id = %resume_info.interrupt_id,
                result_count = resumed.len(),
                "resuming run from interrupt"
            );
            messages.extend(resumed);
        }

        debug!(
            thread_id = emitter.correlation().thread_id(),
            run_id = emitter.correlation().run_id(),
            message_count = messages.len(),
            frontend_tool_count = frontend_tools.len(),
            "starting agent streaming"
        );

        let mut stream_error: Option<AgentWireError> = None;

        match agent.run_streaming(messages, cancel.clone()).await {
            Err(err) => {
                error!(error = %err, "agent failed to start streaming");
                stream_error = Some(err);
            }
            Ok(updates) => {
                let mut updates = std::pin::pin!(updates);
                loop {
                    let item = tokio::select! {
                        _ = cancel.cancelled() => {
                            debug!("run cancelled, ending event stream");
                            return;
                        }
                        item = updates.next() => item,
                    };

                    let update = match item {
                        None => break,
                        Some(Ok(update)) => update,
                        Some(Err(err)) => {
                            error!(error = %err, "error during agent streaming");
                            stream_error = Some(err);
                            break;
                        }
                    };

                    // Content fragments first, then text, in produced order.
                    for fragment in update.contents {
                        match fragment {
                            ContentFragment::ToolCall { id, name, arguments } => {
                                let is_frontend = frontend_tools.contains(&name);
                                if let Some(event) =
                                    emitter.tool_call(id.as_deref(), &name, arguments, is_frontend)
                                {
                                    yield event;
                                }
                            }
                            ContentFragment::ToolResult { id, result } => {
                                if let Some(event) = emitter.tool_result(id.as_deref(), result) {
                                    yield event;
                                }
                            }
                        }
                    }

                    if let Some(text) = update.text {
                        if !text.is_empty() {
                            yield emitter.text_chunk(text);
                        }
                    }
                }
            }
        }

        if let Some(ref err) = stream_error {
            yield emitter.run_error(err.to_string(), Some(STREAMING_ERROR));
        }

        yield emitter.run_finished(stream_error.as_ref());
    };

    Box::pin(events)
}
