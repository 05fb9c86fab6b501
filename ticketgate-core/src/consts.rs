//! Core constants shared across ticketgate components.

/// Environment variable for the Jira host URL.
pub const ENV_JIRA_HOST: &str = "JIRA_HOST";

/// Fallback `.netrc` machine consulted when no entry matches the Jira host.
pub const ATLASSIAN_NETRC_MACHINE: &str = "atlassian.net";

/// Name of the Jira configuration file inside the config directory.
pub const JIRA_CONFIG_FILE: &str = "jira.toml";
