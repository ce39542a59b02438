/// Fallback text for a `turn.failed` event that omits its message.
pub const TURN_FAILED_FALLBACK: &str = "Turn failed without an error message.";

/// Fallback text for a stream `error` event that omits its message.
pub const STREAM_ERROR_FALLBACK: &str = "Agent stream reported an error without a message.";

/// Errors raised by an event source while pulling the next event.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    /// Transport or stream I/O failed.
    #[error("transport error: {0}")]
    Transport(String),
    /// The source produced output that violates its own framing.
    #[error("protocol error: {0}")]
    Protocol(String),
}

/// Terminal outcome of a coordinator run that did not produce a report.
///
/// Malformed and unrecognized event shapes are deliberately absent here:
/// they are dropped during classification and are never fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RunError {
    /// Invalid run configuration.
    #[error("config error: {0}")]
    Config(String),
    /// No upstream event arrived within the configured deadline.
    #[error("Agent timed out after {minutes} minutes.")]
    Timeout { minutes: u64 },
    /// The session reported a failed turn.
    #[error("{message}")]
    TurnFailed { message: String },
    /// The stream itself reported a terminal error event.
    #[error("{message}")]
    Stream { message: String },
    /// The source failed while being pulled; propagated unchanged.
    #[error(transparent)]
    Source(#[from] SourceError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_message_states_the_minute_count() {
        let err = RunError::Timeout { minutes: 10 };
        let message = err.to_string();
        assert!(message.contains("timed out"));
        assert!(message.contains("10 minutes"));
    }

    #[test]
    fn turn_failed_message_is_the_event_message_verbatim() {
        let err = RunError::TurnFailed {
            message: "boom".into(),
        };
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn source_errors_propagate_unchanged() {
        let err = RunError::from(SourceError::Transport("read failed".into()));
        assert_eq!(err.to_string(), "transport error: read failed");
    }
}
