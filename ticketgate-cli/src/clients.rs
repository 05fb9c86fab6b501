//! # Client Creation
//!
//! Builds the runtime and authenticated Jira client every command needs,
//! from `$JIRA_HOST` or `jira.toml` plus `~/.netrc`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::BaseDirs;
use ticketgate_core::get_config_dirs;
use ticketgate_jira::JiraClient;
use ticketgate_jira::auth::{create_jira_runtime_and_client, get_jira_host};
use tokio::runtime::Runtime;

/// Home directory and Jira base URL the commands run against
pub struct JiraTarget {
  pub home: PathBuf,
  pub host: String,
}

/// Resolve the home directory and the configured Jira host
pub fn resolve_target() -> Result<JiraTarget> {
  let base_dirs = BaseDirs::new().context("Failed to get $HOME directory")?;
  let config = get_config_dirs()?.load_jira_config()?;
  let host = get_jira_host(&config)?;

  Ok(JiraTarget {
    home: base_dirs.home_dir().to_path_buf(),
    host,
  })
}

/// Creates a tokio runtime and a Jira client for the configured host
pub fn create_runtime_and_client() -> Result<(Runtime, JiraClient)> {
  let target = resolve_target()?;
  create_jira_runtime_and_client(&target.home, &target.host)
}
