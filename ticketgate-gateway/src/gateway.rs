use std::sync::{PoisonError, RwLock};

use ticketgate_jira::{IssueTracker, JiraField, TrackerError};
use tracing::{debug, warn};

use crate::error::{GatewayError, GatewayResult};

/// Entry point for the gateway operations.
///
/// Borrows a pre-authenticated tracker handle and never mutates it. The
/// operations themselves live in the `labels`, `export`, and `fields`
/// modules.
pub struct Gateway<'a, T> {
  pub(crate) tracker: &'a T,
  field_index: Option<RwLock<Option<Vec<JiraField>>>>,
}

impl<'a, T: IssueTracker> Gateway<'a, T> {
  /// Gateway that re-fetches the full field list on every name lookup
  pub const fn new(tracker: &'a T) -> Self {
    Self {
      tracker,
      field_index: None,
    }
  }

  /// Gateway that keeps the first fetched field list for later lookups
  /// until [`Gateway::invalidate_field_index`] is called
  pub const fn with_field_index(tracker: &'a T) -> Self {
    Self {
      tracker,
      field_index: Some(RwLock::new(None)),
    }
  }

  /// Drop the memoized field list, if any
  pub fn invalidate_field_index(&self) {
    if let Some(index) = &self.field_index {
      *index.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
  }

  /// Resolve a field's display name to its identifier.
  ///
  /// Matching is case-insensitive and the first match in field-list order
  /// wins.
  pub async fn resolve_field_id(&self, field_name: &str) -> GatewayResult<String> {
    self
      .lookup_field_id(field_name)
      .await
      .inspect_err(|err| warn!("Error resolving field '{field_name}': {err}"))
  }

  /// Same as [`Gateway::resolve_field_id`] without logging, for callers that
  /// log under their own operation name
  pub(crate) async fn lookup_field_id(&self, field_name: &str) -> GatewayResult<String> {
    let fields = self.load_fields().await?;

    fields
      .into_iter()
      .find(|field| names_match(&field.name, field_name))
      .map(|field| field.id)
      .ok_or_else(|| GatewayError::not_found(format!("Field '{field_name}'")))
  }

  async fn load_fields(&self) -> Result<Vec<JiraField>, TrackerError> {
    if let Some(index) = &self.field_index {
      let cached = index.read().unwrap_or_else(PoisonError::into_inner).clone();
      if let Some(fields) = cached {
        debug!("Using {} cached fields", fields.len());
        return Ok(fields);
      }
    }

    let fields = self.tracker.list_fields().await?;
    debug!("Fetched {} fields", fields.len());

    if let Some(index) = &self.field_index {
      *index.write().unwrap_or_else(PoisonError::into_inner) = Some(fields.clone());
    }

    Ok(fields)
  }
}

/// Case-insensitive comparison of field display names
pub(crate) fn names_match(candidate: &str, wanted: &str) -> bool {
  candidate.to_lowercase() == wanted.to_lowercase()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::FailureKind;
  use crate::testing::FakeTracker;

  fn tracker() -> FakeTracker {
    FakeTracker::default()
      .with_field("summary", "Summary")
      .with_field("customfield_10100", "primaryTeam")
      .with_field("customfield_10200", "PRIMARYTEAM")
  }

  #[tokio::test]
  async fn test_resolve_field_id_case_insensitive_first_match() {
    let tracker = tracker();
    let gateway = Gateway::new(&tracker);

    assert_eq!(gateway.resolve_field_id("PrimaryTeam").await.unwrap(), "customfield_10100");
    assert_eq!(gateway.resolve_field_id("summary").await.unwrap(), "summary");
  }

  #[tokio::test]
  async fn test_resolve_field_id_unknown_field() {
    let tracker = tracker();
    let gateway = Gateway::new(&tracker);

    let err = gateway.resolve_field_id("Nope").await.unwrap_err();
    assert_eq!(err.kind(), FailureKind::NotFound);
    assert_eq!(err.to_string(), "Field 'Nope' not found");
  }

  #[tokio::test]
  async fn test_resolve_field_id_transport_fault() {
    let tracker = tracker().failing_fields();
    let gateway = Gateway::new(&tracker);

    let err = gateway.resolve_field_id("Summary").await.unwrap_err();
    assert_eq!(err.kind(), FailureKind::Transport);
  }

  #[tokio::test]
  async fn test_without_index_every_lookup_fetches_fields() {
    let tracker = tracker();
    let gateway = Gateway::new(&tracker);

    gateway.resolve_field_id("Summary").await.unwrap();
    gateway.resolve_field_id("Summary").await.unwrap();

    assert_eq!(tracker.call_count("list_fields"), 2);
  }

  #[tokio::test]
  async fn test_field_index_reuses_list_until_invalidated() {
    let tracker = tracker();
    let gateway = Gateway::with_field_index(&tracker);

    gateway.resolve_field_id("Summary").await.unwrap();
    gateway.resolve_field_id("primaryTeam").await.unwrap();
    assert_eq!(tracker.call_count("list_fields"), 1);

    gateway.invalidate_field_index();
    gateway.resolve_field_id("Summary").await.unwrap();
    assert_eq!(tracker.call_count("list_fields"), 2);
  }

  #[test]
  fn test_names_match() {
    assert!(names_match("Primary Team", "primary team"));
    assert!(names_match("ÉQUIPE", "équipe"));
    assert!(!names_match("Primary Team", "PrimaryTeam"));
  }
}
