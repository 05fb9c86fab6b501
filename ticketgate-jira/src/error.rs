//! Typed errors returned by the Jira client.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while talking to Jira
#[derive(Debug, Error)]
pub enum TrackerError {
  #[error("Authentication failed. Please check your Jira credentials.")]
  Unauthorized,
  #[error("{0} not found")]
  NotFound(String),
  #[error("Jira rejected the request: {0}")]
  BadRequest(String),
  #[error("Unexpected error: HTTP {status} - {body}")]
  UnexpectedStatus { status: StatusCode, body: String },
  #[error("Failed to send request to Jira")]
  Request(#[source] reqwest::Error),
  #[error("Failed to parse Jira response")]
  Decode(#[source] reqwest::Error),
}

impl TrackerError {
  /// Whether the tracker reported the requested resource as missing
  pub const fn is_not_found(&self) -> bool {
    matches!(self, Self::NotFound(_))
  }
}

/// Result alias for Jira client calls
pub type TrackerResult<T> = Result<T, TrackerError>;
