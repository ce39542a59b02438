use crate::event::ThreadItem;
use crate::report::TaskReport;

/// Applies one completed item to the report and returns the progress echo
/// lines the operator should see for it.
///
/// Pure dispatch over the item's classified kind; never fails. Agent
/// messages and unrecognized items produce no echo. Multi-change file items
/// produce one line per change, in the order the session listed them.
pub fn apply_item(report: &mut TaskReport, item: &ThreadItem) -> Vec<String> {
    match item {
        ThreadItem::AgentMessage { text } => {
            report.final_response = text.clone();
            Vec::new()
        }
        ThreadItem::CommandExecution { command } => {
            report.commands.push(command.clone());
            vec![format!("$ {command}")]
        }
        ThreadItem::FileChange { changes } => changes
            .iter()
            .map(|change| {
                let entry = format!("{}: {}", change.kind, change.path);
                report.file_changes.push(entry.clone());
                format!("file {entry}")
            })
            .collect(),
        ThreadItem::McpToolCall { server, tool } => {
            let entry = format!("{server}:{tool}");
            report.tool_calls.push(entry.clone());
            vec![format!("tool {entry}")]
        }
        ThreadItem::WebSearch { query } => {
            report.web_searches.push(query.clone());
            vec![format!("search {query}")]
        }
        ThreadItem::Other => Vec::new(),
    }
}
