//! # Config Command
//!
//! Shows and edits `jira.toml` in the ticketgate configuration directory.

use anyhow::Result;
use clap::{Args, Subcommand};
use owo_colors::OwoColorize;
use ticketgate_core::output::{print_info, print_success, print_warning};
use ticketgate_core::url::{ensure_url_scheme, resolve_jira_base_url};
use ticketgate_core::{ConfigDirs, JiraConfig, get_config_dirs};

/// Command for configuration management
#[derive(Args)]
pub struct ConfigArgs {
  /// The subcommand to execute
  #[command(subcommand)]
  pub subcommand: ConfigSubcommands,
}

/// Subcommands for the config command
#[derive(Subcommand)]
pub enum ConfigSubcommands {
  /// Store the default Jira host in jira.toml
  #[command(name = "set-host")]
  #[command(long_about = "Store the default Jira host in jira.toml.\n\n\
            A host without a scheme is stored with https://. The JIRA_HOST\n\
            environment variable still takes precedence when set.")]
  SetHost {
    /// Jira host (e.g., company.atlassian.net)
    host: String,
  },

  /// Show where configuration is read from and the host in effect
  Show,
}

pub(crate) fn handle_config_command(config: ConfigArgs) -> Result<()> {
  let config_dirs = get_config_dirs()?;

  match config.subcommand {
    ConfigSubcommands::SetHost { host } => {
      let saved = set_host(&config_dirs, &host)?;
      print_success(&format!(
        "Jira host set to {} in {}",
        saved.host.as_deref().unwrap_or_default().cyan(),
        config_dirs.jira_config_path().display()
      ));
      Ok(())
    }
    ConfigSubcommands::Show => show_config(&config_dirs),
  }
}

/// Normalize `host` and write it to `jira.toml`, keeping other settings
fn set_host(config_dirs: &ConfigDirs, host: &str) -> Result<JiraConfig> {
  let mut config = config_dirs.load_jira_config()?;
  config.host = Some(ensure_url_scheme(host)?);
  config_dirs.save_jira_config(&config)?;
  Ok(config)
}

fn show_config(config_dirs: &ConfigDirs) -> Result<()> {
  let config = config_dirs.load_jira_config()?;

  print_info(&format!("Config directory: {}", config_dirs.config_dir().display()));
  match config.host.as_deref() {
    Some(host) => println!("jira.toml host: {host}"),
    None => println!("jira.toml host: (not set)"),
  }

  match resolve_jira_base_url(&config) {
    Ok(host) => println!("Host in effect: {}", host.cyan()),
    Err(err) => print_warning(&err.to_string()),
  }

  Ok(())
}
