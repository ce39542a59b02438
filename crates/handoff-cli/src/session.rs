use std::io;
use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use handoff_core::{EventSource, SourceError};
use serde_json::Value;
use tokio::io::{AsyncBufReadExt as _, AsyncWriteExt as _, BufReader, Lines};
use tokio::process::{Child, ChildStdout, Command};
use tracing::debug;

/// Invocation of the agent program that produces the event stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AgentCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl AgentCommand {
    /// Builds the canonical non-interactive invocation: JSON events on
    /// stdout, prompt on stdin, optional model and output-schema overrides.
    pub fn canonical(
        program: String,
        model: Option<String>,
        output_schema: Option<PathBuf>,
    ) -> Self {
        let mut args = vec!["exec".to_owned(), "--json".to_owned()];
        if let Some(model) = model {
            args.push("--model".to_owned());
            args.push(model);
        }
        if let Some(schema) = output_schema {
            args.push("--output-schema".to_owned());
            args.push(schema.to_string_lossy().into_owned());
        }
        args.push("-".to_owned());
        Self { program, args }
    }
}

/// Errors raised while opening the agent session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("failed to spawn agent program '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("agent process is missing a stdio pipe")]
    Pipe,
    #[error("failed to send the prompt to the agent process: {0}")]
    Prompt(#[source] io::Error),
}

/// Agent session backed by a spawned subprocess.
///
/// Stdout lines are parsed as JSON events; lines that are not JSON are
/// skipped as non-event noise. [`close`](EventSource::close) kills and reaps
/// the child, which is the early-termination hook the coordinator invokes on
/// every exit path.
#[derive(Debug)]
pub struct ProcessSession {
    child: Child,
    lines: Lines<BufReader<ChildStdout>>,
}

impl ProcessSession {
    /// Spawns the agent process and hands it the composed prompt on stdin.
    pub async fn spawn(command: &AgentCommand, prompt: &str) -> Result<Self, SessionError> {
        debug!(program = %command.program, "spawning agent session");
        let mut child = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| SessionError::Spawn {
                program: command.program.clone(),
                source,
            })?;

        let mut stdin = child.stdin.take().ok_or(SessionError::Pipe)?;
        stdin
            .write_all(prompt.as_bytes())
            .await
            .map_err(SessionError::Prompt)?;
        stdin.shutdown().await.map_err(SessionError::Prompt)?;
        drop(stdin);

        let stdout = child.stdout.take().ok_or(SessionError::Pipe)?;
        Ok(Self {
            child,
            lines: BufReader::new(stdout).lines(),
        })
    }
}

#[async_trait]
impl EventSource for ProcessSession {
    async fn next_event(&mut self) -> Option<Result<Value, SourceError>> {
        loop {
            match self.lines.next_line().await {
                Ok(Some(line)) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    match serde_json::from_str(line) {
                        Ok(value) => return Some(Ok(value)),
                        Err(err) => {
                            debug!(error = %err, "skipping non-event line from agent stdout");
                            continue;
                        }
                    }
                }
                Ok(None) => return None,
                Err(err) => {
                    return Some(Err(SourceError::Transport(format!(
                        "failed to read agent output: {err}"
                    ))));
                }
            }
        }
    }

    async fn close(&mut self) {
        let _ = self.child.start_kill();
        let _ = self.child.wait().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn canonical_invocation_orders_flags_before_the_stdin_marker() {
        let command = AgentCommand::canonical(
            "codex".into(),
            Some("gpt-5".into()),
            Some(PathBuf::from("answer.schema.json")),
        );
        assert_eq!(command.program, "codex");
        assert_eq!(
            command.args,
            vec![
                "exec",
                "--json",
                "--model",
                "gpt-5",
                "--output-schema",
                "answer.schema.json",
                "-",
            ]
        );
    }

    #[tokio::test]
    async fn session_yields_json_lines_and_skips_noise() {
        let command = AgentCommand {
            program: "sh".into(),
            args: vec![
                "-c".into(),
                concat!(
                    "cat >/dev/null; ",
                    "echo '{\"type\":\"turn.completed\"}'; ",
                    "echo 'plain progress text'; ",
                    "echo '{\"type\":\"item.completed\",\"item\":{\"type\":\"agent_message\",\"text\":\"hi\"}}'",
                )
                .into(),
            ],
        };
        let mut session = ProcessSession::spawn(&command, "the prompt")
            .await
            .expect("spawn");
        assert_eq!(
            session.next_event().await,
            Some(Ok(json!({ "type": "turn.completed" })))
        );
        let second = session.next_event().await.expect("event").expect("ok");
        assert_eq!(second["item"]["text"], "hi");
        assert_eq!(session.next_event().await, None);
        session.close().await;
    }

    #[tokio::test]
    async fn missing_program_is_a_spawn_error() {
        let command = AgentCommand {
            program: "/nonexistent/agent-binary".into(),
            args: Vec::new(),
        };
        let err = ProcessSession::spawn(&command, "prompt")
            .await
            .expect_err("must fail");
        assert!(matches!(err, SessionError::Spawn { .. }));
    }

    #[tokio::test]
    async fn close_kills_a_long_running_child() {
        let command = AgentCommand {
            program: "sh".into(),
            args: vec!["-c".into(), "cat >/dev/null; sleep 30".into()],
        };
        let mut session = ProcessSession::spawn(&command, "prompt")
            .await
            .expect("spawn");
        session.close().await;
    }
}
