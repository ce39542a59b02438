use std::fs;
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::NamedTempFile;

/// Errors raised while loading the structured-output schema.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("failed to read output schema {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("output schema {path} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("output schema {path} must be a JSON object")]
    NotAnObject { path: PathBuf },
    #[error("failed to stage output schema for the agent: {0}")]
    Stage(#[source] io::Error),
}

/// Loads and validates the JSON schema the final answer must conform to.
///
/// Validation here only catches files that cannot possibly be a schema
/// before a session is opened; the resolved value is then handed to the
/// invocation via [`stage_for_session`].
pub fn load_output_schema(path: &Path) -> Result<Value, SchemaError> {
    let text = fs::read_to_string(path).map_err(|source| SchemaError::Io {
        path: path.to_owned(),
        source,
    })?;
    let value: Value = serde_json::from_str(&text).map_err(|source| SchemaError::Parse {
        path: path.to_owned(),
        source,
    })?;
    if !value.is_object() {
        return Err(SchemaError::NotAnObject {
            path: path.to_owned(),
        });
    }
    Ok(value)
}

/// Writes the resolved schema to a temporary file for the agent invocation.
///
/// The agent program takes the schema as a file path, so the resolved value
/// is re-serialized rather than pointing the agent at the operator's file.
/// The file lives as long as the returned handle; the caller keeps it alive
/// until the session ends.
pub fn stage_for_session(schema: &Value) -> Result<NamedTempFile, SchemaError> {
    let text = serde_json::to_string_pretty(schema)
        .map_err(io::Error::other)
        .map_err(SchemaError::Stage)?;
    let mut file = NamedTempFile::new().map_err(SchemaError::Stage)?;
    file.write_all(text.as_bytes()).map_err(SchemaError::Stage)?;
    Ok(file)
}
