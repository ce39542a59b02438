use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::front_matter;

/// Role template resolved from a file or a built-in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleTemplate {
    pub name: String,
    pub description: Option<String>,
    /// Model the role prefers; overridden by `--model`.
    pub model: Option<String>,
    /// Role prompt body handed to prompt composition.
    pub body: String,
}

/// Errors raised while resolving a role template.
#[derive(Debug, thiserror::Error)]
pub enum RoleError {
    #[error("role '{0}' not found (no template file and no built-in)")]
    NotFound(String),
    #[error("failed to read role template {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

const BUILTIN_ROLES: &[(&str, &str, &str)] = &[
    (
        "assistant",
        "General-purpose task execution",
        "You are a careful software assistant. Complete the task exactly as \
         described, make the smallest change that satisfies it, and finish \
         with a concise summary of what you did.",
    ),
    (
        "reviewer",
        "Read-only code review",
        "You are a meticulous code reviewer. Inspect the code the task points \
         at without modifying it, and report concrete findings with file and \
         line references.",
    ),
];

/// Loads a role template by name.
///
/// A `<name>.md` file in the roles directory wins over the built-in with the
/// same name; a missing file falls through to the built-ins.
pub fn load_role(roles_dir: Option<&Path>, name: &str) -> Result<RoleTemplate, RoleError> {
    if let Some(dir) = roles_dir {
        let path = dir.join(format!("{name}.md"));
        match fs::read_to_string(&path) {
            Ok(text) => return Ok(parse_template(name, &text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => return Err(RoleError::Io { path, source: err }),
        }
    }
    builtin(name).ok_or_else(|| RoleError::NotFound(name.to_owned()))
}

/// Lists role names available from the roles directory and the built-ins.
pub fn list_roles(roles_dir: Option<&Path>) -> Vec<String> {
    let mut names: BTreeSet<String> = BUILTIN_ROLES
        .iter()
        .map(|(name, _, _)| (*name).to_owned())
        .collect();
    if let Some(dir) = roles_dir
        && let Ok(entries) = fs::read_dir(dir)
    {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) == Some("md")
                && let Some(stem) = path.file_stem().and_then(|stem| stem.to_str())
            {
                names.insert(stem.to_owned());
            }
        }
    }
    names.into_iter().collect()
}

fn builtin(name: &str) -> Option<RoleTemplate> {
    BUILTIN_ROLES
        .iter()
        .find(|(builtin_name, _, _)| *builtin_name == name)
        .map(|(builtin_name, description, body)| RoleTemplate {
            name: (*builtin_name).to_owned(),
            description: Some((*description).to_owned()),
            model: None,
            body: (*body).to_owned(),
        })
}

fn parse_template(name: &str, text: &str) -> RoleTemplate {
    let (meta, body) = front_matter::parse(text);
    RoleTemplate {
        name: name.to_owned(),
        description: meta.get("description").cloned(),
        model: meta.get("model").cloned(),
        body: body.trim().to_owned(),
    }
}
