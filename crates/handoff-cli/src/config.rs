use std::env;
use std::path::PathBuf;

/// Environment override for the agent program.
pub const AGENT_CMD_ENV: &str = "HANDOFF_AGENT_CMD";
/// Environment override for the role template directory.
pub const ROLES_DIR_ENV: &str = "HANDOFF_ROLES_DIR";
/// Agent program spawned when nothing else is configured.
pub const DEFAULT_AGENT_PROGRAM: &str = "codex";

/// Resolved runtime settings: flag over environment over default.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub agent_program: String,
    pub roles_dir: Option<PathBuf>,
}

impl Settings {
    /// Resolves settings from CLI flags and the process environment.
    pub fn resolve(cli_agent: Option<String>, cli_roles_dir: Option<PathBuf>) -> Self {
        Self::resolve_from(
            cli_agent,
            env::var(AGENT_CMD_ENV).ok(),
            cli_roles_dir,
            env::var_os(ROLES_DIR_ENV).map(PathBuf::from),
            dirs::config_dir().map(|dir| dir.join("handoff").join("roles")),
        )
    }

    fn resolve_from(
        cli_agent: Option<String>,
        env_agent: Option<String>,
        cli_roles_dir: Option<PathBuf>,
        env_roles_dir: Option<PathBuf>,
        default_roles_dir: Option<PathBuf>,
    ) -> Self {
        let agent_program = cli_agent
            .or(env_agent)
            .filter(|program| !program.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_AGENT_PROGRAM.to_owned());
        let roles_dir = cli_roles_dir.or(env_roles_dir).or(default_roles_dir);
        Self {
            agent_program,
            roles_dir,
        }
    }
}
