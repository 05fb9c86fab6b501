//! # Credential Management
//!
//! Retrieval of Jira credentials from the user's `.netrc` file.

pub mod netrc;

use std::path::Path;

use anyhow::{Context, Result};

use crate::consts::ATLASSIAN_NETRC_MACHINE;
use crate::creds::netrc::{get_netrc_path, normalize_host, parse_netrc_file};

/// Represents credentials for a service
#[derive(Debug, Clone)]
pub struct Credentials {
  pub username: String,
  pub password: String,
}

/// Look up Jira credentials for the given host.
///
/// The `.netrc` entry for the normalized host is preferred; an
/// `atlassian.net` entry is used as a fallback.
pub fn get_jira_credentials(home: &Path, jira_host: &str) -> Result<Credentials> {
  let netrc_path = get_netrc_path(home);
  let normalized_host = normalize_host(jira_host);

  if netrc_path.exists() {
    for machine in [normalized_host.as_str(), ATLASSIAN_NETRC_MACHINE] {
      let creds = parse_netrc_file(&netrc_path, machine)
        .with_context(|| format!("Failed to read credentials from {}", netrc_path.display()))?;
      if let Some(creds) = creds {
        return Ok(creds);
      }
    }
  }

  Err(anyhow::anyhow!(
    "Jira credentials not found in .netrc file. Please add credentials for machine '{normalized_host}' or '{ATLASSIAN_NETRC_MACHINE}'."
  ))
}

/// Check if Jira credentials are available for the provided host.
pub fn has_jira_credentials(home: &Path, jira_host: &str) -> bool {
  get_jira_credentials(home, jira_host).is_ok()
}
