//! # Ticketgate Core Library
//!
//! Shared building blocks for the ticketgate crates: where configuration
//! lives, how the Jira host is resolved, how credentials are read from
//! `.netrc`, and how user-facing messages are printed.

pub mod config;
pub mod consts;
pub mod creds;
pub mod output;
pub mod url;

pub use config::{ConfigDirs, JiraConfig, get_config_dirs};
pub use output::{print_error, print_info, print_success, print_warning};
