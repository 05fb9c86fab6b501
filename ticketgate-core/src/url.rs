//! URL helpers for resolving the Jira base URL.
//!
//! The host can come from the `JIRA_HOST` environment variable or from
//! `jira.toml`; either may omit the scheme, in which case `https://` is used.

use anyhow::{Context, Result};
use url::Url;

use crate::config::JiraConfig;
use crate::consts::{ENV_JIRA_HOST, JIRA_CONFIG_FILE};

/// Resolve the Jira base URL with a proper scheme.
///
/// `$JIRA_HOST` takes precedence over the `host` entry of `jira.toml`.
/// Returns an error if neither is set.
pub fn resolve_jira_base_url(config: &JiraConfig) -> Result<String> {
  if let Ok(host) = std::env::var(ENV_JIRA_HOST) {
    return ensure_url_scheme(&host);
  }

  match config.host.as_deref() {
    Some(host) => ensure_url_scheme(host),
    None => Err(anyhow::anyhow!(
      "Jira host not configured. Set '{ENV_JIRA_HOST}' or add 'host' to {JIRA_CONFIG_FILE}"
    )),
  }
}

/// Ensure a URL has a proper scheme (http:// or https://).
///
/// If the input doesn't include a scheme, assumes https://. A trailing slash
/// is removed so endpoint paths can be appended directly.
pub fn ensure_url_scheme(input: &str) -> Result<String> {
  let trimmed = input.trim();
  if trimmed.is_empty() {
    return Err(anyhow::anyhow!("Host cannot be empty"));
  }

  let url = match Url::parse(trimmed) {
    // `localhost:8080` parses with `localhost` as the scheme and no host
    Ok(url) if url.has_host() && matches!(url.scheme(), "http" | "https") => url,
    _ => Url::parse(&format!("https://{trimmed}"))
      .with_context(|| format!("Failed to parse URL: '{input}'. Ensure it has a valid scheme."))?,
  };

  Ok(url.as_str().trim_end_matches('/').to_string())
}
