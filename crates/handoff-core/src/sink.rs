/// Append-only line sink for operator output and raw event logs.
///
/// Writes are synchronous and never suspend; the coordinator only writes
/// lines and never closes a sink, so sink lifecycle stays with the caller.
pub trait OutputSink: Send {
    /// Appends one line of text.
    fn line(&mut self, text: &str);
}

/// Sink backed by the operator's console.
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn line(&mut self, text: &str) {
        println!("{text}");
    }
}

/// Capture sink used by tests and callers that post-process output.
impl OutputSink for Vec<String> {
    fn line(&mut self, text: &str) {
        self.push(text.to_owned());
    }
}
