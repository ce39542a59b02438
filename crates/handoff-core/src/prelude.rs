//! Common imports for typical usage.

pub use crate::coordinator::{RunConfig, run};
pub use crate::errors::{RunError, SourceError};
pub use crate::event::{SessionEvent, ThreadItem, TokenUsage};
pub use crate::report::TaskReport;
pub use crate::sink::{OutputSink, StdoutSink};
pub use crate::source::{EventSource, StreamSource};
