//! # Command Line Interface
//!
//! Defines the CLI structure and dispatches each subcommand to its handler.

mod check;
mod config;
mod fields;
mod issues;

use std::path::PathBuf;

use anyhow::Result;
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Parser, Subcommand};

/// Top-level CLI command for ticketgate
#[derive(Parser)]
#[command(name = "ticketgate")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(about = "Read labels, export issues, and manage fields on a Jira instance")]
#[command(
  long_about = "Ticketgate talks to the Jira instance named by $JIRA_HOST (or jira.toml)\n\
        using credentials from ~/.netrc.\n\n\
        It reads ticket labels, exports query results to CSV, looks up field\n\
        metadata and allowed values, and updates fields on tickets."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
#[command(subcommand_required(true))]
#[command(disable_help_subcommand = true)]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::BrightGreen.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    global = true,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Also append log output to this file
  #[arg(
    long = "log-file",
    global = true,
    value_name = "PATH",
    long_help = "Also append log output to this file, creating it if needed.\n\n\
             The file receives the same events as stderr, without colors."
  )]
  pub log_file: Option<PathBuf>,

  /// Subcommands
  #[command(subcommand)]
  pub command: Commands,
}

/// Subcommands for ticketgate
#[derive(Subcommand)]
pub enum Commands {
  /// Test the Jira connection and credentials
  Check,

  /// Show or change the stored configuration
  Config(config::ConfigArgs),

  /// Export issues matching a JQL query to CSV
  #[command(long_about = "Export every issue matching a JQL query to a CSV file.\n\n\
            Each record holds the ticket key and its description. The file has no\n\
            header row and is overwritten if it already exists.")]
  Export(issues::ExportArgs),

  /// Show the metadata of a field
  #[command(name = "field-meta")]
  FieldMeta(fields::FieldArgs),

  /// List the allowed values of a field
  #[command(name = "field-values")]
  #[command(long_about = "List the values a field may be set to, one per line.\n\n\
            Option objects are reduced to their value or name. Fields without a\n\
            closed set of values print nothing.")]
  FieldValues(fields::FieldArgs),

  /// Print the labels of one or more tickets
  #[command(long_about = "Print the labels of each ticket, in the order given.\n\n\
            Tickets that cannot be read are shown with no labels.")]
  Labels(issues::LabelsArgs),

  /// Set a field on a ticket
  #[command(name = "update-field")]
  #[command(long_about = "Set one field on a ticket, naming the field by its display name.\n\n\
            The value is sent as a string unless --json is given, in which case it\n\
            is parsed as JSON first (e.g. '{\"value\":\"DevOps\"}').")]
  UpdateField(fields::UpdateFieldArgs),
}

pub fn handle_cli(cli: Cli) -> Result<()> {
  match cli.command {
    Commands::Check => check::handle_check_command(),
    Commands::Config(config) => config::handle_config_command(config),
    Commands::Export(export) => issues::handle_export_command(export),
    Commands::FieldMeta(field) => fields::handle_field_meta_command(field),
    Commands::FieldValues(field) => fields::handle_field_values_command(field),
    Commands::Labels(labels) => issues::handle_labels_command(labels),
    Commands::UpdateField(update) => fields::handle_update_field_command(update),
  }
}
