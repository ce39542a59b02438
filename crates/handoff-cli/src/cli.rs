use std::path::PathBuf;

use clap::Parser;

/// Hand a task off to a long-running agent session and report its work.
#[derive(Debug, Parser)]
#[command(name = "handoff", version, about)]
pub struct Cli {
    /// Role template the task runs under.
    #[arg(required_unless_present = "list_roles")]
    pub role: Option<String>,

    /// Task description; everything after the role is task text, so put
    /// options before the role.
    #[arg(trailing_var_arg = true)]
    pub task: Vec<String>,

    /// Overall time budget in minutes.
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// Mirror every raw session event to the console.
    #[arg(short, long)]
    pub verbose: bool,

    /// Append one serialized line per session event to this file.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// JSON schema file the final answer must conform to.
    #[arg(long, value_name = "PATH")]
    pub output_schema: Option<PathBuf>,

    /// Directory holding role template files.
    #[arg(long, value_name = "DIR")]
    pub roles_dir: Option<PathBuf>,

    /// Model override passed to the agent; defaults to the role's choice.
    #[arg(long)]
    pub model: Option<String>,

    /// Agent program to spawn.
    #[arg(long, value_name = "PROGRAM")]
    pub agent_cmd: Option<String>,

    /// List available roles and exit.
    #[arg(long)]
    pub list_roles: bool,
}
