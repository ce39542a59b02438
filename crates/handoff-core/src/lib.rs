//! Core event-stream coordination for delegating a task to a remote agent
//! session.
//!
//! The crate consumes an asynchronous sequence of loosely-typed progress
//! events, classifies them into a structured [`TaskReport`], surfaces
//! liveness during long silences, enforces an overall deadline, and
//! guarantees that the upstream source is released on every exit path.
//!
//! # Usage
//!
//! ```no_run
//! use handoff_core::prelude::*;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), RunError> {
//! let source = StreamSource::from_events(Vec::new());
//! let mut out = StdoutSink;
//! let report = run(source, RunConfig::default(), &mut out, None).await?;
//! println!("{}", report.final_response);
//! # Ok(())
//! # }
//! ```

/// Item dispatch applying classified items to the report.
pub mod classify;
/// The coordinator pull loop and its run configuration.
pub mod coordinator;
/// Error taxonomy for sources and runs.
pub mod errors;
/// Wire-level progress event classification.
pub mod event;
/// Silence tracking and the liveness notice.
pub mod liveness;
/// Common imports for typical usage.
pub mod prelude;
/// Structured result accumulated over one run.
pub mod report;
/// Append-only text sinks for operator output and raw logs.
pub mod sink;
/// Pull-based event source contract and stream adapter.
pub mod source;

pub use classify::apply_item;
pub use coordinator::{RunConfig, run};
pub use errors::{RunError, SourceError, STREAM_ERROR_FALLBACK, TURN_FAILED_FALLBACK};
pub use event::{FileUpdate, SessionEvent, ThreadItem, TokenUsage, classify_event};
pub use liveness::{DEFAULT_LIVENESS_INTERVAL, LivenessMonitor, STILL_WORKING_NOTICE};
pub use report::TaskReport;
pub use sink::{OutputSink, StdoutSink};
pub use source::{BoxedEventStream, EventSource, StreamSource};
