/// Structured result accumulated over one run.
///
/// Created empty when a run starts, mutated only by the coordinator while
/// the run is in flight, and handed to the caller once the stream ends.
/// The four list fields are append-only and preserve insertion order; the
/// two string fields are last-write-wins.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct TaskReport {
    /// Command text for every command the agent executed, in order.
    pub commands: Vec<String>,
    /// One `"<kind>: <path>"` entry per file change, in order.
    pub file_changes: Vec<String>,
    /// One `"<server>:<tool>"` entry per tool call, in order.
    pub tool_calls: Vec<String>,
    /// Search query text for every web search, in order.
    pub web_searches: Vec<String>,
    /// The last agent message observed; the session's final answer.
    pub final_response: String,
    /// The last reported token usage summary.
    pub usage_summary: String,
}
