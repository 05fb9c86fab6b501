//! # Field Commands
//!
//! `field-meta`, `field-values`, and `update-field`.

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;
use ticketgate_core::output::{format_field_name, format_ticket_key, print_info, print_success};
use ticketgate_gateway::Gateway;

use crate::clients::create_runtime_and_client;

/// Arguments for commands that take a single field name
#[derive(Args)]
pub struct FieldArgs {
  /// Field display name (matched case-insensitively)
  pub field_name: String,
}

/// Arguments for the update-field command
#[derive(Args)]
pub struct UpdateFieldArgs {
  /// Ticket key (e.g., OPS-123)
  pub ticket_key: String,

  /// Field display name (matched case-insensitively)
  pub field_name: String,

  /// New value for the field
  pub value: String,

  /// Parse the value as JSON instead of sending it as a string
  #[arg(long)]
  pub json: bool,
}

pub(crate) fn handle_field_meta_command(args: FieldArgs) -> Result<()> {
  let (rt, client) = create_runtime_and_client()?;
  let gateway = Gateway::new(&client);

  let metadata = rt.block_on(gateway.get_field_metadata(&args.field_name))?;

  println!("{}", serde_json::to_string_pretty(&metadata)?);
  Ok(())
}

pub(crate) fn handle_field_values_command(args: FieldArgs) -> Result<()> {
  let (rt, client) = create_runtime_and_client()?;
  let gateway = Gateway::new(&client);

  let values = rt.block_on(gateway.get_field_allowed_values(&args.field_name))?;

  if values.is_empty() {
    print_info(&format!("{} has no allowed values", format_field_name(&args.field_name)));
  }
  for value in &values {
    println!("{}", display_value(value));
  }

  Ok(())
}

pub(crate) fn handle_update_field_command(args: UpdateFieldArgs) -> Result<()> {
  let new_value = parse_value(&args.value, args.json)?;

  let (rt, client) = create_runtime_and_client()?;
  let gateway = Gateway::new(&client);

  rt.block_on(gateway.update_field_value(&args.ticket_key, &args.field_name, new_value))?;

  print_success(&format!(
    "Updated {} on {}",
    format_field_name(&args.field_name),
    format_ticket_key(&args.ticket_key)
  ));
  Ok(())
}

fn parse_value(raw: &str, as_json: bool) -> Result<Value> {
  if as_json {
    serde_json::from_str(raw).with_context(|| format!("Invalid JSON value: {raw}"))
  } else {
    Ok(Value::String(raw.to_string()))
  }
}

/// Strings print bare, everything else as compact JSON
fn display_value(value: &Value) -> String {
  match value {
    Value::String(s) => s.clone(),
    other => other.to_string(),
  }
}
