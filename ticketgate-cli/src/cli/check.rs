//! # Check Command
//!
//! Verifies that the configured Jira host is reachable with the credentials
//! found in `.netrc`.

use anyhow::{Result, bail};
use owo_colors::OwoColorize;
use ticketgate_core::creds::has_jira_credentials;
use ticketgate_core::output::{print_error, print_info, print_success, print_warning};
use ticketgate_jira::auth::create_jira_runtime_and_client;

use crate::clients::resolve_target;

pub(crate) fn handle_check_command() -> Result<()> {
  let target = resolve_target()?;
  print_info(&format!("Jira host: {}", target.host.cyan()));

  if !has_jira_credentials(&target.home, &target.host) {
    print_warning("No Jira credentials found in .netrc.");
    println!("Add credentials for machine 'atlassian.net' or your Jira host to your .netrc file.");
    bail!("Missing Jira credentials");
  }

  let (rt, client) = create_jira_runtime_and_client(&target.home, &target.host)?;

  let connected = rt.block_on(client.test_connection())?;
  if !connected {
    print_error(&format!("Could not authenticate against {}", client.base_url()));
    bail!("Jira connection check failed");
  }

  print_success("Jira credentials are valid.");
  Ok(())
}
