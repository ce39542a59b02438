use handoff_core::TaskReport;
use serde_json::Value;

/// Renders the completed run for the operator.
///
/// When the run requested structured output, the final response is re-parsed
/// as JSON and pretty-printed, falling back to the raw text when it does not
/// parse.
pub fn render_report(report: &TaskReport, structured: bool) -> String {
    let mut out = String::new();
    out.push_str("Result\n======\n\n");
    if report.final_response.is_empty() {
        out.push_str("(no response)\n");
    } else if structured {
        out.push_str(&pretty_response(&report.final_response));
        out.push('\n');
    } else {
        out.push_str(&report.final_response);
        out.push('\n');
    }

    section(&mut out, "Commands run", &report.commands);
    section(&mut out, "Files changed", &report.file_changes);
    section(&mut out, "Tool calls", &report.tool_calls);
    section(&mut out, "Web searches", &report.web_searches);

    if !report.usage_summary.is_empty() {
        out.push('\n');
        out.push_str("Tokens: ");
        out.push_str(&report.usage_summary);
        out.push('\n');
    }
    out
}

fn pretty_response(response: &str) -> String {
    serde_json::from_str::<Value>(response)
        .ok()
        .and_then(|value| serde_json::to_string_pretty(&value).ok())
        .unwrap_or_else(|| response.to_owned())
}

fn section(out: &mut String, title: &str, entries: &[String]) {
    if entries.is_empty() {
        return;
    }
    out.push('\n');
    out.push_str(title);
    out.push_str(":\n");
    for entry in entries {
        out.push_str("  ");
        out.push_str(entry);
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_renders_placeholder_only() {
        let rendered = render_report(&TaskReport::default(), false);
        assert!(rendered.contains("(no response)"));
        assert!(!rendered.contains("Commands run"));
        assert!(!rendered.contains("Tokens:"));
    }

    #[test]
    fn sections_appear_only_when_populated() {
        let report = TaskReport {
            commands: vec!["ls".into()],
            file_changes: vec!["update: src/a.rs".into()],
            final_response: "Done".into(),
            usage_summary: "input 1, output 2 tokens".into(),
            ..TaskReport::default()
        };
        let rendered = render_report(&report, false);
        assert!(rendered.contains("Done"));
        assert!(rendered.contains("Commands run:\n  ls"));
        assert!(rendered.contains("Files changed:\n  update: src/a.rs"));
        assert!(!rendered.contains("Tool calls"));
        assert!(!rendered.contains("Web searches"));
        assert!(rendered.contains("Tokens: input 1, output 2 tokens"));
    }

    #[test]
    fn structured_response_is_pretty_printed() {
        let report = TaskReport {
            final_response: r#"{"answer":"yes","confidence":0.9}"#.into(),
            ..TaskReport::default()
        };
        let rendered = render_report(&report, true);
        assert!(rendered.contains("\"answer\": \"yes\""));
    }

    #[test]
    fn structured_rendering_falls_back_to_raw_text() {
        let report = TaskReport {
            final_response: "not json at all".into(),
            ..TaskReport::default()
        };
        let rendered = render_report(&report, true);
        assert!(rendered.contains("not json at all"));
    }
}
