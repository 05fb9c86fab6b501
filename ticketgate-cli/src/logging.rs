//! # Log File Output
//!
//! Optional persistent log: every tracing event is also appended to a file
//! through a background writer.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};

/// Open `path` for appending and wrap it in a non-blocking writer.
///
/// The file and its parent directory are created if missing. Buffered lines
/// are flushed when the returned guard is dropped, so it must outlive the
/// subscriber.
pub fn log_file_writer(path: &Path) -> Result<(NonBlocking, WorkerGuard)> {
  let file_name = path
    .file_name()
    .with_context(|| format!("Log file path has no file name: {}", path.display()))?;
  let directory = match path.parent() {
    Some(parent) if !parent.as_os_str().is_empty() => parent,
    _ => Path::new("."),
  };

  let appender = RollingFileAppender::builder()
    .rotation(Rotation::NEVER)
    .filename_prefix(file_name.to_string_lossy())
    .build(directory)
    .with_context(|| format!("Failed to open log file {}", path.display()))?;

  Ok(tracing_appender::non_blocking(appender))
}
