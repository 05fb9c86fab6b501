//! # Jira Issue Endpoints
//!
//! Jira API endpoint implementations for issue operations: fetching a single
//! issue and updating a subset of its fields.

use reqwest::Method;
use serde_json::{Map, Value};

use crate::client::{JiraClient, check_response};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{IssueUpdateOperations, JiraIssue, UpdateIssueRequest};

impl JiraClient {
  /// Get a Jira issue by key
  pub async fn get_issue(&self, issue_key: &str) -> TrackerResult<JiraIssue> {
    let response = self
      .request(Method::GET, &format!("/rest/api/2/issue/{issue_key}"))
      .send()
      .await
      .map_err(TrackerError::Request)?;

    let response = check_response(response, &format!("Issue {issue_key}")).await?;
    response.json::<JiraIssue>().await.map_err(TrackerError::Decode)
  }

  /// Update the given fields of an issue, leaving all other fields untouched
  pub async fn update_issue_fields(&self, issue_key: &str, fields: Map<String, Value>) -> TrackerResult<()> {
    let payload = UpdateIssueRequest { fields };

    let response = self
      .request(Method::PUT, &format!("/rest/api/2/issue/{issue_key}"))
      .json(&payload)
      .send()
      .await
      .map_err(TrackerError::Request)?;

    check_response(response, &format!("Issue {issue_key}")).await?;
    Ok(())
  }

  /// Add a label to an issue without touching its other labels.
  ///
  /// Jira treats adding a label the issue already has as a no-op.
  pub async fn add_issue_label(&self, issue_key: &str, label: &str) -> TrackerResult<()> {
    let payload = IssueUpdateOperations::add_label(label);

    let response = self
      .request(Method::PUT, &format!("/rest/api/2/issue/{issue_key}"))
      .json(&payload)
      .send()
      .await
      .map_err(TrackerError::Request)?;

    check_response(response, &format!("Issue {issue_key}")).await?;
    Ok(())
  }
}
