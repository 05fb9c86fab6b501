//! # Ticketgate CLI Entry Point
//!
//! The `ticketgate` binary: reads ticket labels, exports query results to
//! CSV, inspects and updates fields, and adds labels on a Jira instance.

use anyhow::Result;
use clap::Parser;
use cli::handle_cli;
use tracing::debug;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

mod cli;
mod clients;
mod logging;

fn main() -> Result<()> {
  let cmd = cli::Cli::parse();

  let level = match cmd.verbose {
    0 => tracing::Level::WARN,  // Default: warnings and errors
    1 => tracing::Level::INFO,  // -v: info, warnings, and errors
    2 => tracing::Level::DEBUG, // -vv: debug and above
    _ => tracing::Level::TRACE, // -vvv or more: everything
  };

  // The guard flushes the file writer on drop and must outlive handle_cli
  let (file_writer, _guard) = match cmd.log_file.as_deref() {
    Some(path) => {
      let (writer, guard) = logging::log_file_writer(path)?;
      (Some(writer), Some(guard))
    }
    None => (None, None),
  };

  tracing_subscriber::registry()
    .with(fmt::layer().with_writer(std::io::stderr))
    .with(file_writer.map(|writer| fmt::layer().with_ansi(false).with_writer(writer)))
    .with(EnvFilter::from_default_env().add_directive(level.into()))
    .init();

  debug!("Tracing initialized with level: {}", level);

  handle_cli(cmd)
}
