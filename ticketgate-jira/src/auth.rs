//! Authentication helpers for the Jira client.
//!
//! Centralizes host resolution, credential lookup, and runtime construction
//! so the CLI builds its client the same way every time.

use std::path::Path;

use anyhow::{Context, Result};
use ticketgate_core::config::JiraConfig;
use ticketgate_core::creds::get_jira_credentials;
use ticketgate_core::url::resolve_jira_base_url;
use tokio::runtime::Runtime;
use tracing::debug;

use crate::{JiraClient, create_jira_client};

/// Resolve the Jira base URL from `$JIRA_HOST` or the loaded config.
pub fn get_jira_host(config: &JiraConfig) -> Result<String> {
  resolve_jira_base_url(config)
}

/// Creates an authenticated Jira client using credentials from .netrc.
pub fn create_jira_client_from_netrc(home: &Path, jira_host: &str) -> Result<JiraClient> {
  let credentials = get_jira_credentials(home, jira_host).context("Failed to get credentials")?;
  debug!("Using Jira credentials for {} at {}", credentials.username, jira_host);

  Ok(create_jira_client(
    jira_host,
    &credentials.username,
    &credentials.password,
  ))
}

/// Creates a tokio runtime and an authenticated Jira client.
pub fn create_jira_runtime_and_client(home: &Path, jira_host: &str) -> Result<(Runtime, JiraClient)> {
  let rt = Runtime::new().context("Failed to create async runtime")?;
  let client = create_jira_client_from_netrc(home, jira_host)?;
  Ok((rt, client))
}
