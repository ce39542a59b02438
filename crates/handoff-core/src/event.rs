use serde_json::Value;

/// Classified top-level progress event.
///
/// Events arrive as opaque JSON objects; [`classify_event`] maps them onto
/// this exhaustive sum type so downstream handling is a compile-checked
/// match. Unknown and malformed shapes resolve to [`SessionEvent::Other`]
/// rather than an error: partial or forward-incompatible events must degrade
/// silently instead of aborting the whole session.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionEvent {
    /// One unit of completed work embedded in the turn.
    ItemCompleted { item: ThreadItem },
    /// A turn finished; carries token usage when the session reports it.
    TurnCompleted { usage: Option<TokenUsage> },
    /// Terminal failure reported by the turn.
    TurnFailed { message: Option<String> },
    /// Terminal failure reported by the stream itself.
    StreamError { message: Option<String> },
    /// Any other or missing event tag.
    Other,
}

/// Completed item payload carried by an `item.completed` event.
///
/// A tag/field mismatch (for example `command_execution` whose `command` is
/// not a string) classifies as `Other`, identically to an unrecognized tag.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ThreadItem {
    /// Assistant text; the last one observed becomes the final response.
    AgentMessage { text: String },
    /// Shell command executed by the agent.
    CommandExecution { command: String },
    /// One or more file edits applied in a single item.
    FileChange { changes: Vec<FileUpdate> },
    /// MCP tool invocation.
    McpToolCall { server: String, tool: String },
    /// Web search performed by the agent.
    WebSearch { query: String },
    /// Unrecognized or malformed item payload.
    Other,
}

impl ThreadItem {
    /// Classifies an item payload, degrading to `Other` on any mismatch.
    pub fn from_value(value: &Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or(Self::Other)
    }
}

/// Single file edit inside a [`ThreadItem::FileChange`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct FileUpdate {
    /// Change kind as reported by the session (for example `update`).
    pub kind: String,
    /// Path the change applies to.
    pub path: String,
}

/// Token counts attached to a `turn.completed` event.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    /// Renders the one-line usage summary stored on the report.
    pub fn summary(&self) -> String {
        format!(
            "input {}, output {} tokens",
            self.input_tokens, self.output_tokens
        )
    }
}

/// Classifies one raw progress event.
///
/// Total function: every input maps to a variant, never an error. Field
/// extraction is lenient; a `turn.completed` whose usage payload does not
/// parse is treated as carrying no usage at all.
pub fn classify_event(event: &Value) -> SessionEvent {
    match event.get("type").and_then(Value::as_str) {
        Some("item.completed") => SessionEvent::ItemCompleted {
            item: event
                .get("item")
                .map(ThreadItem::from_value)
                .unwrap_or(ThreadItem::Other),
        },
        Some("turn.completed") => SessionEvent::TurnCompleted {
            usage: event
                .get("usage")
                .and_then(|usage| serde_json::from_value(usage.clone()).ok()),
        },
        Some("turn.failed") => SessionEvent::TurnFailed {
            message: event
                .pointer("/error/message")
                .and_then(Value::as_str)
                .map(str::to_owned),
        },
        Some("error") => SessionEvent::StreamError {
            message: event
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_owned),
        },
        _ => SessionEvent::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn item_completed_carries_classified_item() {
        let event = json!({
            "type": "item.completed",
            "item": { "type": "command_execution", "command": "ls", "exit_code": 0 }
        });
        assert_eq!(
            classify_event(&event),
            SessionEvent::ItemCompleted {
                item: ThreadItem::CommandExecution {
                    command: "ls".into()
                }
            }
        );
    }

    #[test]
    fn unknown_item_tag_classifies_as_other() {
        let event = json!({
            "type": "item.completed",
            "item": { "type": "unknown", "foo": "bar" }
        });
        assert_eq!(
            classify_event(&event),
            SessionEvent::ItemCompleted {
                item: ThreadItem::Other
            }
        );
    }

    #[test]
    fn malformed_item_fields_classify_as_other() {
        let event = json!({
            "type": "item.completed",
            "item": { "type": "command_execution", "command": 42 }
        });
        assert_eq!(
            classify_event(&event),
            SessionEvent::ItemCompleted {
                item: ThreadItem::Other
            }
        );
    }

    #[test]
    fn missing_item_payload_classifies_as_other() {
        let event = json!({ "type": "item.completed" });
        assert_eq!(
            classify_event(&event),
            SessionEvent::ItemCompleted {
                item: ThreadItem::Other
            }
        );
    }

    #[test]
    fn turn_completed_parses_usage_and_ignores_extra_fields() {
        let event = json!({
            "type": "turn.completed",
            "usage": { "input_tokens": 1, "output_tokens": 2, "cached_input_tokens": 9 }
        });
        assert_eq!(
            classify_event(&event),
            SessionEvent::TurnCompleted {
                usage: Some(TokenUsage {
                    input_tokens: 1,
                    output_tokens: 2
                })
            }
        );
    }

    #[test]
    fn turn_completed_without_usage_carries_none() {
        assert_eq!(
            classify_event(&json!({ "type": "turn.completed" })),
            SessionEvent::TurnCompleted { usage: None }
        );
        let malformed = json!({ "type": "turn.completed", "usage": { "input_tokens": "one" } });
        assert_eq!(
            classify_event(&malformed),
            SessionEvent::TurnCompleted { usage: None }
        );
    }

    #[test]
    fn turn_failed_reads_nested_error_message() {
        let event = json!({ "type": "turn.failed", "error": { "message": "boom" } });
        assert_eq!(
            classify_event(&event),
            SessionEvent::TurnFailed {
                message: Some("boom".into())
            }
        );
        assert_eq!(
            classify_event(&json!({ "type": "turn.failed" })),
            SessionEvent::TurnFailed { message: None }
        );
    }

    #[test]
    fn stream_error_reads_top_level_message() {
        let event = json!({ "type": "error", "message": "stream broke" });
        assert_eq!(
            classify_event(&event),
            SessionEvent::StreamError {
                message: Some("stream broke".into())
            }
        );
    }

    #[test]
    fn unknown_event_types_classify_as_other() {
        assert_eq!(
            classify_event(&json!({ "type": "thread.started", "thread_id": "t1" })),
            SessionEvent::Other
        );
        assert_eq!(classify_event(&json!({ "items": [] })), SessionEvent::Other);
        assert_eq!(classify_event(&json!("not an object")), SessionEvent::Other);
    }

    #[test]
    fn file_change_parses_ordered_changes() {
        let item = json!({
            "type": "file_change",
            "changes": [
                { "kind": "add", "path": "src/a.rs" },
                { "kind": "delete", "path": "src/b.rs" }
            ]
        });
        assert_eq!(
            ThreadItem::from_value(&item),
            ThreadItem::FileChange {
                changes: vec![
                    FileUpdate {
                        kind: "add".into(),
                        path: "src/a.rs".into()
                    },
                    FileUpdate {
                        kind: "delete".into(),
                        path: "src/b.rs".into()
                    },
                ]
            }
        );
    }

    #[test]
    fn usage_summary_names_both_counts() {
        let usage = TokenUsage {
            input_tokens: 1,
            output_tokens: 2,
        };
        let summary = usage.summary();
        assert!(summary.contains("input 1"));
        assert!(summary.contains("output 2"));
    }
}
