//! In-memory [`IssueTracker`] for unit tests.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::{Mutex, PoisonError};

use serde_json::{Map, Value};
use ticketgate_jira::{EditMeta, FieldMetadata, IssueTracker, JiraField, JiraIssue, TrackerError, TrackerResult};

/// Tracker backed by canned data that records every call it receives.
///
/// Faults are reported as [`TrackerError::Unauthorized`]; unknown issues and
/// fields as [`TrackerError::NotFound`].
#[derive(Default)]
pub struct FakeTracker {
  fields: Vec<JiraField>,
  issues: HashMap<String, JiraIssue>,
  search_results: Vec<JiraIssue>,
  generic_meta: BTreeMap<String, FieldMetadata>,
  issue_meta: HashMap<String, BTreeMap<String, FieldMetadata>>,
  descriptors: HashMap<String, FieldMetadata>,
  failing_issues: BTreeSet<String>,
  fail_fields: bool,
  fail_search: bool,
  fail_edit_meta: bool,
  calls: Mutex<Vec<String>>,
  updates: Mutex<Vec<(String, Map<String, Value>)>>,
  added_labels: Mutex<Vec<(String, String)>>,
}

impl FakeTracker {
  pub fn with_field(mut self, id: &str, name: &str) -> Self {
    self.fields.push(JiraField {
      id: id.to_string(),
      name: name.to_string(),
      custom: id.starts_with("customfield_"),
      schema: None,
    });
    self
  }

  pub fn with_issue(mut self, issue: Value) -> Self {
    let issue: JiraIssue = serde_json::from_value(issue).unwrap();
    self.issues.insert(issue.key.clone(), issue);
    self
  }

  pub fn failing_issue(mut self, key: &str) -> Self {
    self.failing_issues.insert(key.to_string());
    self
  }

  pub fn failing_fields(mut self) -> Self {
    self.fail_fields = true;
    self
  }

  pub fn with_search_result(mut self, issue: Value) -> Self {
    self.search_results.push(serde_json::from_value(issue).unwrap());
    self
  }

  pub fn failing_search(mut self) -> Self {
    self.fail_search = true;
    self
  }

  pub fn failing_edit_meta(mut self) -> Self {
    self.fail_edit_meta = true;
    self
  }

  pub fn with_generic_meta(mut self, field_id: &str, meta: Value) -> Self {
    self
      .generic_meta
      .insert(field_id.to_string(), serde_json::from_value(meta).unwrap());
    self
  }

  pub fn with_issue_meta(mut self, issue_key: &str, field_id: &str, meta: Value) -> Self {
    self
      .issue_meta
      .entry(issue_key.to_string())
      .or_default()
      .insert(field_id.to_string(), serde_json::from_value(meta).unwrap());
    self
  }

  pub fn with_descriptor(mut self, field_id: &str, meta: Value) -> Self {
    self
      .descriptors
      .insert(field_id.to_string(), serde_json::from_value(meta).unwrap());
    self
  }

  /// Every call received so far, in order
  pub fn calls(&self) -> Vec<String> {
    self.calls.lock().unwrap_or_else(PoisonError::into_inner).clone()
  }

  /// Number of recorded calls starting with `prefix`
  pub fn call_count(&self, prefix: &str) -> usize {
    self.calls().iter().filter(|call| call.starts_with(prefix)).count()
  }

  /// Successfully applied updates, in order
  pub fn updates(&self) -> Vec<(String, Map<String, Value>)> {
    self.updates.lock().unwrap_or_else(PoisonError::into_inner).clone()
  }

  /// Successfully added labels as `(ticket, label)`, in order
  pub fn added_labels(&self) -> Vec<(String, String)> {
    self.added_labels.lock().unwrap_or_else(PoisonError::into_inner).clone()
  }

  fn record(&self, call: String) {
    self.calls.lock().unwrap_or_else(PoisonError::into_inner).push(call);
  }

  fn known_issue(&self, key: &str) -> TrackerResult<&JiraIssue> {
    if self.failing_issues.contains(key) {
      return Err(TrackerError::Unauthorized);
    }
    self
      .issues
      .get(key)
      .ok_or_else(|| TrackerError::NotFound(format!("Issue {key}")))
  }
}

impl IssueTracker for FakeTracker {
  async fn get_issue(&self, issue_key: &str) -> TrackerResult<JiraIssue> {
    self.record(format!("get_issue {issue_key}"));
    self.known_issue(issue_key).cloned()
  }

  async fn search_issues(&self, jql: &str, max_results: Option<usize>) -> TrackerResult<Vec<JiraIssue>> {
    self.record(format!("search_issues {jql} max={max_results:?}"));
    if self.fail_search {
      return Err(TrackerError::Unauthorized);
    }
    let limit = max_results.unwrap_or(usize::MAX);
    Ok(self.search_results.iter().take(limit).cloned().collect())
  }

  async fn list_fields(&self) -> TrackerResult<Vec<JiraField>> {
    self.record("list_fields".to_string());
    if self.fail_fields {
      return Err(TrackerError::Unauthorized);
    }
    Ok(self.fields.clone())
  }

  async fn get_edit_meta(&self, issue_key: Option<&str>) -> TrackerResult<EditMeta> {
    self.record(format!("get_edit_meta {issue_key:?}"));
    if self.fail_edit_meta {
      return Err(TrackerError::Unauthorized);
    }
    let fields = match issue_key {
      Some(key) => self.issue_meta.get(key).cloned().unwrap_or_default(),
      None => self.generic_meta.clone(),
    };
    Ok(EditMeta { fields })
  }

  async fn get_field(&self, field_id: &str) -> TrackerResult<FieldMetadata> {
    self.record(format!("get_field {field_id}"));
    self
      .descriptors
      .get(field_id)
      .cloned()
      .ok_or_else(|| TrackerError::NotFound(format!("Field {field_id}")))
  }

  async fn update_issue_fields(&self, issue_key: &str, fields: Map<String, Value>) -> TrackerResult<()> {
    self.record(format!("update_issue_fields {issue_key}"));
    self.known_issue(issue_key)?;
    self
      .updates
      .lock()
      .unwrap_or_else(PoisonError::into_inner)
      .push((issue_key.to_string(), fields));
    Ok(())
  }

  async fn add_issue_label(&self, issue_key: &str, label: &str) -> TrackerResult<()> {
    self.record(format!("add_issue_label {issue_key} {label}"));
    self.known_issue(issue_key)?;
    self
      .added_labels
      .lock()
      .unwrap_or_else(PoisonError::into_inner)
      .push((issue_key.to_string(), label.to_string()));
    Ok(())
  }
}
