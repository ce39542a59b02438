use crate::roles::RoleTemplate;

/// Composes the prompt handed to the agent session: the role body followed
/// by the operator's task under a fixed heading.
pub fn compose_prompt(role: &RoleTemplate, task: &str) -> String {
    format!("{}\n\n# Task\n\n{}\n", role.body.trim(), task.trim())
}
