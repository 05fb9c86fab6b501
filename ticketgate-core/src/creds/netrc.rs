//! Helpers for reading credentials stored in `.netrc` files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::creds::Credentials;

/// Returns the path to the `.netrc` file for the provided home directory.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use ticketgate_core::creds::netrc::get_netrc_path;
///
/// let path = get_netrc_path(Path::new("/home/user"));
/// assert_eq!(path, Path::new("/home/user/.netrc"));
/// ```
pub fn get_netrc_path(home: &Path) -> PathBuf {
  home.join(".netrc")
}

/// Parses a `.netrc` file and returns credentials for the requested machine.
///
/// Both single-line (`machine host login user password pass`) and multi-line
/// entries are accepted, and `#` starts a comment. If the machine is absent or
/// its entry lacks a `login` or `password`, `Ok(None)` is returned.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn parse_netrc_file(path: &Path, target_machine: &str) -> Result<Option<Credentials>> {
  let content = fs::read_to_string(path).context("Failed to read .netrc file")?;
  Ok(parse_netrc(&content, target_machine))
}

fn parse_netrc(content: &str, target_machine: &str) -> Option<Credentials> {
  let mut tokens = content
    .lines()
    .map(|line| line.split('#').next().unwrap_or_default())
    .flat_map(str::split_whitespace);

  let mut in_target = false;
  let mut username: Option<&str> = None;
  let mut password: Option<&str> = None;

  while let Some(token) = tokens.next() {
    match token {
      "machine" => {
        if in_target {
          break;
        }
        in_target = tokens.next() == Some(target_machine);
      }
      "login" if in_target => username = tokens.next(),
      "password" if in_target => password = tokens.next(),
      _ => {}
    }
  }

  match (in_target, username, password) {
    (true, Some(username), Some(password)) => Some(Credentials {
      username: username.to_string(),
      password: password.to_string(),
    }),
    _ => None,
  }
}

/// Normalizes a Jira host URL by removing protocol prefixes and trailing
/// slashes.
///
/// ```
/// use ticketgate_core::creds::netrc::normalize_host;
///
/// assert_eq!(normalize_host("https://company.atlassian.net/"), "company.atlassian.net");
/// assert_eq!(normalize_host("jira.example.com"), "jira.example.com");
/// ```
pub fn normalize_host(raw_host: &str) -> String {
  raw_host
    .trim()
    .trim_start_matches("https://")
    .trim_start_matches("http://")
    .trim_end_matches('/')
    .to_string()
}
