//! Error types for gateway operations.

use std::path::PathBuf;

use thiserror::Error;
use ticketgate_jira::TrackerError;

/// Closed set of failure kinds a caller can branch on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
  /// A ticket, field, or field metadata was not found
  NotFound,
  /// The tracker could not be reached or rejected the request
  Transport,
  /// The output file could not be written
  Io,
}

/// Errors returned by gateway operations
#[derive(Debug, Error)]
pub enum GatewayError {
  #[error("{what} not found")]
  NotFound { what: String },
  #[error(transparent)]
  Transport(TrackerError),
  #[error("Failed to write {}: {source}", path.display())]
  Io { path: PathBuf, source: csv::Error },
}

impl GatewayError {
  pub(crate) fn not_found(what: impl Into<String>) -> Self {
    Self::NotFound { what: what.into() }
  }

  /// The failure kind of this error
  pub const fn kind(&self) -> FailureKind {
    match self {
      Self::NotFound { .. } => FailureKind::NotFound,
      Self::Transport(_) => FailureKind::Transport,
      Self::Io { .. } => FailureKind::Io,
    }
  }
}

impl From<TrackerError> for GatewayError {
  fn from(err: TrackerError) -> Self {
    match err {
      TrackerError::NotFound(what) => Self::NotFound { what },
      other => Self::Transport(other),
    }
  }
}

/// Result alias for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;
