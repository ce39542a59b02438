use std::fs::{File, OpenOptions};
use std::io::{self, Write as _};
use std::path::Path;

use handoff_core::OutputSink;
use tracing::warn;

/// Append-only file sink for the raw event log.
///
/// The file belongs to the operator; the coordinator only writes lines to
/// it, so write failures are logged and never abort the run.
pub struct FileSink {
    file: File,
}

impl FileSink {
    /// Opens (or creates) the log file for appending.
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self { file })
    }
}

impl OutputSink for FileSink {
    fn line(&mut self, text: &str) {
        if let Err(err) = writeln!(self.file, "{text}") {
            warn!(error = %err, "failed to append to the event log file");
        }
    }
}
