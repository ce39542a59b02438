use std::pin::Pin;

use futures::StreamExt as _;
use serde_json::Value;

use crate::errors::SourceError;

/// Boxed stream of raw progress events.
pub type BoxedEventStream =
    Pin<Box<dyn futures::Stream<Item = Result<Value, SourceError>> + Send + 'static>>;

/// Pull-based contract the coordinator depends on.
///
/// The coordinator is the only consumer: it pulls one event at a time and
/// invokes [`close`](Self::close) exactly once when the run ends, on every
/// exit path.
#[async_trait::async_trait]
pub trait EventSource: Send {
    /// Waits for and returns the next raw event.
    ///
    /// `None` means the sequence finished normally; an error is fatal to
    /// the run and propagated unchanged. Each pull is awaited to completion
    /// before the next one starts, so implementations need not be
    /// cancel-safe.
    async fn next_event(&mut self) -> Option<Result<Value, SourceError>>;

    /// Releases upstream resources held by the source.
    ///
    /// Default is a no-op for sources with nothing to release.
    async fn close(&mut self) {}
}

/// Adapts any event stream to the pull-based [`EventSource`] contract.
pub struct StreamSource {
    stream: BoxedEventStream,
}

impl StreamSource {
    /// Wraps an already-boxed or unboxed event stream.
    pub fn new(
        stream: impl futures::Stream<Item = Result<Value, SourceError>> + Send + 'static,
    ) -> Self {
        Self {
            stream: Box::pin(stream),
        }
    }

    /// Builds a source that yields the given events in order, then ends.
    pub fn from_events(events: Vec<Result<Value, SourceError>>) -> Self {
        Self::new(futures::stream::iter(events))
    }
}

#[async_trait::async_trait]
impl EventSource for StreamSource {
    async fn next_event(&mut self) -> Option<Result<Value, SourceError>> {
        self.stream.next().await
    }
}
