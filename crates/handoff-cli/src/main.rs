//! `handoff`: delegate a task to a remote agent session and report its work.

mod cli;
mod config;
mod front_matter;
mod logfile;
mod prompt;
mod report;
mod roles;
mod schema;
mod session;

use anyhow::{Context as _, bail};
use clap::Parser as _;
use handoff_core::{OutputSink, RunConfig, StdoutSink, run};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("handoff=info".parse()?),
        )
        .init();

    let args = cli::Cli::parse();
    let settings = config::Settings::resolve(args.agent_cmd.clone(), args.roles_dir.clone());

    if args.list_roles {
        for name in roles::list_roles(settings.roles_dir.as_deref()) {
            println!("{name}");
        }
        return Ok(());
    }

    let Some(role_name) = args.role.as_deref() else {
        bail!("a role is required unless --list-roles is given");
    };
    if args.task.is_empty() {
        bail!("a task description is required");
    }
    let task = args.task.join(" ");

    let role = roles::load_role(settings.roles_dir.as_deref(), role_name)?;
    let output_schema = match &args.output_schema {
        Some(path) => Some(schema::load_output_schema(path)?),
        None => None,
    };
    let structured = output_schema.is_some();
    let prompt = prompt::compose_prompt(&role, &task);

    // The staged file must outlive the agent process, which reads it at
    // startup; the handle is held until the run resolves.
    let staged_schema = match &output_schema {
        Some(value) => Some(schema::stage_for_session(value)?),
        None => None,
    };
    let model = args.model.clone().or_else(|| role.model.clone());
    let command = session::AgentCommand::canonical(
        settings.agent_program.clone(),
        model,
        staged_schema.as_ref().map(|file| file.path().to_path_buf()),
    );
    info!(role = %role.name, program = %command.program, "opening agent session");
    let source = session::ProcessSession::spawn(&command, &prompt).await?;

    let mut log_sink = match &args.log_file {
        Some(path) => Some(
            logfile::FileSink::open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?,
        ),
        None => None,
    };

    let run_config = RunConfig {
        timeout_minutes: args.timeout,
        verbose: args.verbose,
        ..RunConfig::default()
    };
    let mut out = StdoutSink;
    let outcome = run(
        source,
        run_config,
        &mut out,
        log_sink.as_mut().map(|sink| sink as &mut dyn OutputSink),
    )
    .await;
    drop(staged_schema);
    match outcome {
        Ok(task_report) => {
            print!("{}", report::render_report(&task_report, structured));
            Ok(())
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
