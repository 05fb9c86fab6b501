//! The client handle contract used by the gateway operations.
//!
//! Operations are written against [`IssueTracker`] rather than a concrete
//! client so they can be driven by [`JiraClient`] in production and by an
//! in-memory tracker in tests.

use std::future::Future;

use serde_json::{Map, Value};

use crate::client::JiraClient;
use crate::error::TrackerResult;
use crate::models::{EditMeta, FieldMetadata, JiraField, JiraIssue};

/// Read and update access to an issue tracker.
pub trait IssueTracker {
  /// Fetch one issue by key
  fn get_issue(&self, issue_key: &str) -> impl Future<Output = TrackerResult<JiraIssue>> + Send;

  /// Run a query; `None` means no result cap
  fn search_issues(
    &self,
    jql: &str,
    max_results: Option<usize>,
  ) -> impl Future<Output = TrackerResult<Vec<JiraIssue>>> + Send;

  /// List every field with its name and identifier
  fn list_fields(&self) -> impl Future<Output = TrackerResult<Vec<JiraField>>> + Send;

  /// Fetch edit metadata, optionally scoped to one issue
  fn get_edit_meta(&self, issue_key: Option<&str>) -> impl Future<Output = TrackerResult<EditMeta>> + Send;

  /// Fetch one field's descriptor by identifier
  fn get_field(&self, field_id: &str) -> impl Future<Output = TrackerResult<FieldMetadata>> + Send;

  /// Apply a partial field-id-to-value update to an issue
  fn update_issue_fields(
    &self,
    issue_key: &str,
    fields: Map<String, Value>,
  ) -> impl Future<Output = TrackerResult<()>> + Send;

  /// Add one label to an issue, keeping its existing labels
  fn add_issue_label(&self, issue_key: &str, label: &str) -> impl Future<Output = TrackerResult<()>> + Send;
}

impl IssueTracker for JiraClient {
  async fn get_issue(&self, issue_key: &str) -> TrackerResult<JiraIssue> {
    JiraClient::get_issue(self, issue_key).await
  }

  async fn search_issues(&self, jql: &str, max_results: Option<usize>) -> TrackerResult<Vec<JiraIssue>> {
    JiraClient::search_issues(self, jql, max_results).await
  }

  async fn list_fields(&self) -> TrackerResult<Vec<JiraField>> {
    JiraClient::list_fields(self).await
  }

  async fn get_edit_meta(&self, issue_key: Option<&str>) -> TrackerResult<EditMeta> {
    JiraClient::get_edit_meta(self, issue_key).await
  }

  async fn get_field(&self, field_id: &str) -> TrackerResult<FieldMetadata> {
    JiraClient::get_field(self, field_id).await
  }

  async fn update_issue_fields(&self, issue_key: &str, fields: Map<String, Value>) -> TrackerResult<()> {
    JiraClient::update_issue_fields(self, issue_key, fields).await
  }

  async fn add_issue_label(&self, issue_key: &str, label: &str) -> TrackerResult<()> {
    JiraClient::add_issue_label(self, issue_key, label).await
  }
}
