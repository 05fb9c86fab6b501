//! # Issue Commands
//!
//! `labels`, `labels add`, and `export`.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};
use ticketgate_core::output::{format_ticket_key, print_success};
use ticketgate_gateway::Gateway;

use crate::clients::create_runtime_and_client;

/// Arguments for the labels command
#[derive(Args)]
#[command(args_conflicts_with_subcommands = true)]
#[command(subcommand_negates_reqs = true)]
pub struct LabelsArgs {
  /// Label changes; without one, the labels of each key are printed
  #[command(subcommand)]
  pub subcommand: Option<LabelsSubcommands>,

  /// Ticket keys (e.g., OPS-123)
  #[arg(required = true)]
  pub ticket_keys: Vec<String>,
}

/// Subcommands for the labels command
#[derive(Subcommand)]
pub enum LabelsSubcommands {
  /// Add a label to a ticket
  #[command(long_about = "Add a label to a ticket, keeping its existing labels.\n\n\
            Adding a label the ticket already has changes nothing.")]
  Add {
    /// Ticket key (e.g., OPS-123)
    ticket_key: String,

    /// Label to add
    label: String,
  },
}

/// Arguments for the export command
#[derive(Args)]
pub struct ExportArgs {
  /// JQL query selecting the issues to export
  pub jql: String,

  /// Destination CSV file
  pub output: PathBuf,
}

pub(crate) fn handle_labels_command(args: LabelsArgs) -> Result<()> {
  match args.subcommand {
    Some(LabelsSubcommands::Add { ticket_key, label }) => handle_add_label_command(&ticket_key, &label),
    None => handle_show_labels_command(&args.ticket_keys),
  }
}

fn handle_show_labels_command(ticket_keys: &[String]) -> Result<()> {
  let (rt, client) = create_runtime_and_client()?;
  let gateway = Gateway::new(&client);

  let labels_by_ticket = rt.block_on(gateway.get_labels_for_tickets(ticket_keys));

  for (key, labels) in &labels_by_ticket {
    println!("{}: {}", format_ticket_key(key), labels.join(", "));
  }

  Ok(())
}

fn handle_add_label_command(ticket_key: &str, label: &str) -> Result<()> {
  let (rt, client) = create_runtime_and_client()?;
  let gateway = Gateway::new(&client);

  rt.block_on(gateway.add_ticket_label(ticket_key, label))?;

  print_success(&format!("Added label {label} to {}", format_ticket_key(ticket_key)));
  Ok(())
}

pub(crate) fn handle_export_command(args: ExportArgs) -> Result<()> {
  let (rt, client) = create_runtime_and_client()?;
  let gateway = Gateway::new(&client);

  let count = rt.block_on(gateway.export_issues_to_csv(&args.jql, &args.output))?;

  print_success(&format!("Exported {count} issues to {}", args.output.display()));
  Ok(())
}
