//! # Configuration Management
//!
//! Locates the ticketgate configuration directory and loads the optional
//! `jira.toml` file that can provide a default Jira host.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::consts::JIRA_CONFIG_FILE;

/// Jira connection settings read from `jira.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct JiraConfig {
  /// Jira host URL (e.g., https://company.atlassian.net)
  #[serde(default)]
  pub host: Option<String>,
}

/// Represents the configuration directory for the ticketgate application
#[derive(Debug, Clone)]
pub struct ConfigDirs {
  pub config_dir: PathBuf,
}

impl ConfigDirs {
  /// Create a new ConfigDirs instance from the platform's project directories
  pub fn new() -> Result<Self> {
    let proj_dirs = ProjectDirs::from("", "", "ticketgate").context("Failed to determine project directories")?;

    Ok(Self {
      config_dir: proj_dirs.config_dir().to_path_buf(),
    })
  }

  /// Create a ConfigDirs rooted at an explicit directory
  pub fn from_dir(config_dir: impl Into<PathBuf>) -> Self {
    Self {
      config_dir: config_dir.into(),
    }
  }

  /// Get the config directory
  pub fn config_dir(&self) -> &Path {
    &self.config_dir
  }

  /// Get the path to the Jira configuration file
  pub fn jira_config_path(&self) -> PathBuf {
    self.config_dir.join(JIRA_CONFIG_FILE)
  }

  /// Load Jira configuration from file or return default
  pub fn load_jira_config(&self) -> Result<JiraConfig> {
    let config_path = self.jira_config_path();

    if !config_path.exists() {
      return Ok(JiraConfig::default());
    }

    let content = fs::read_to_string(&config_path)
      .with_context(|| format!("Failed to read Jira config from {}", config_path.display()))?;

    toml::from_str(&content).with_context(|| format!("Failed to parse Jira config from {}", config_path.display()))
  }

  /// Save Jira configuration to file
  pub fn save_jira_config(&self, config: &JiraConfig) -> Result<()> {
    let config_path = self.jira_config_path();

    if let Some(parent) = config_path.parent() {
      fs::create_dir_all(parent).with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }

    let content = toml::to_string_pretty(config).context("Failed to serialize Jira config")?;
    fs::write(&config_path, content)
      .with_context(|| format!("Failed to write Jira config to {}", config_path.display()))?;

    Ok(())
  }
}

/// Get the configuration directories for ticketgate
pub fn get_config_dirs() -> Result<ConfigDirs> {
  ConfigDirs::new()
}
