//! Per-run identifier lifecycle and tool-call correlation.

use std::collections::HashSet;

use uuid::Uuid;

/// Outcome of recording a tool call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolCallRecord {
    /// First sighting; emit an event with this effective id.
    Emitted { call_id: String },
    /// The same id was already recorded; suppress the event.
    AlreadySeen,
}

/// Outcome of recording a tool result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolResultRecord {
    /// Emit an event. `message_id` is freshly generated for this one result.
    Emit { call_id: String, message_id: String },
    /// No id was provided and no generated id is outstanding; suppress.
    Uncorrelated,
    /// The call executes on the client; suppress the result echo.
    Frontend,
}

/// Run-scoped identity and dedup state.
///
/// Owned exclusively by one orchestrator invocation for the run's lifetime.
/// Tracks which tool-call ids have been emitted (providers may re-emit the
/// same call across stream chunks), which of those belong to frontend tools,
/// and carries at most one synthesized id for providers that omit call ids.
/// None of the operations fail; absence is modeled in the record enums.
#[derive(Debug)]
pub struct RunCorrelation {
    thread_id: String,
    run_id: String,
    current_message_id: String,
    emitted_tool_call_ids: HashSet<String>,
    frontend_tool_call_ids: HashSet<String>,
    last_generated_call_id: Option<String>,
}

impl RunCorrelation {
    /// Start a new run, generating any missing identifiers.
    pub fn new(thread_id: Option<String>, run_id: Option<String>) -> Self {
        Self {
            thread_id: non_empty_or_generated(thread_id),
            run_id: non_empty_or_generated(run_id),
            current_message_id: Uuid::new_v4().to_string(),
            emitted_tool_call_ids: HashSet::new(),
            frontend_tool_call_ids: HashSet::new(),
            last_generated_call_id: None,
        }
    }

    pub fn thread_id(&self) -> &str {
        &self.thread_id
    }

    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    pub fn current_message_id(&self) -> &str {
        &self.current_message_id
    }

    /// Whether any frontend tool calls have been emitted this run.
    pub fn has_frontend_calls(&self) -> bool {
        !self.frontend_tool_call_ids.is_empty()
    }

    /// Whether a tool-call id has already produced an event.
    pub fn has_emitted_tool_call(&self, call_id: &str) -> bool {
        self.emitted_tool_call_ids.contains(call_id)
    }

    /// Whether a tool-call id belongs to a frontend tool.
    pub fn is_frontend_tool_call(&self, call_id: &str) -> bool {
        self.frontend_tool_call_ids.contains(call_id)
    }

    /// Record a tool call, resolving or synthesizing its id.
    ///
    /// When the provider supplies no id, a synthetic one is generated and
    /// held so the next id-less result can correlate to it. Re-recording an
    /// id returns [`ToolCallRecord::AlreadySeen`].
    pub fn record_tool_call(
        &mut self,
        provided_id: Option<&str>,
        is_frontend: bool,
    ) -> ToolCallRecord {
        let effective_id = match non_empty(provided_id) {
            Some(id) => id.to_string(),
            None => {
                let generated = format!("generated-{}", Uuid::new_v4());
                self.last_generated_call_id = Some(generated.clone());
                generated
            }
        };

        if !self.emitted_tool_call_ids.insert(effective_id.clone()) {
            return ToolCallRecord::AlreadySeen;
        }

        if is_frontend {
            self.frontend_tool_call_ids.insert(effective_id.clone());
        }

        ToolCallRecord::Emitted {
            call_id: effective_id,
        }
    }

    /// Record a tool result, resolving its id against the carry slot.
    ///
    /// An id-less result consumes the last generated call id. Frontend
    /// results are suppressed (the client already has them). A non-suppressed
    /// result regenerates the current message id so the next assistant text
    /// renders as a separate block.
    pub fn record_tool_result(&mut self, provided_id: Option<&str>) -> ToolResultRecord {
        let effective_id = match non_empty(provided_id) {
            Some(id) => id.to_string(),
            None => match self.last_generated_call_id.take() {
                Some(id) => id,
                None => return ToolResultRecord::Uncorrelated,
            },
        };

        if self.frontend_tool_call_ids.contains(&effective_id) {
            return ToolResultRecord::Frontend;
        }

        let message_id = Uuid::new_v4().to_string();
        self.regenerate_message_id();

        ToolResultRecord::Emit {
            call_id: effective_id,
            message_id,
        }
    }

    /// Force a new message block boundary without an accompanying result.
    pub fn regenerate_message_id(&mut self) {
        self.current_message_id = Uuid::new_v4().to_string();
    }
}

fn non_empty_or_generated(id: Option<String>) -> String {
    match id {
        Some(id) if !id.is_empty() => id,
        _ => Uuid::new_v4().to_string(),
    }
}

fn non_empty(id: Option<&str>) -> Option<&str> {
    id.filter(|s| !s.is_empty())
}
