//! # Jira Metadata Endpoints
//!
//! Edit metadata describes which fields can be set and, for enumerated
//! fields, their allowed values. Scoped to an issue it comes from the issue's
//! `editmeta`; without an issue the create metadata of every project and
//! issue type is flattened into the same shape.

use reqwest::Method;

use crate::client::{JiraClient, check_response};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{CreateMeta, EditMeta};

impl JiraClient {
  /// Fetch edit metadata, optionally scoped to a specific issue
  pub async fn get_edit_meta(&self, issue_key: Option<&str>) -> TrackerResult<EditMeta> {
    match issue_key {
      Some(key) => self.get_issue_edit_meta(key).await,
      None => self.get_create_meta().await.map(CreateMeta::into_edit_meta),
    }
  }

  async fn get_issue_edit_meta(&self, issue_key: &str) -> TrackerResult<EditMeta> {
    let response = self
      .request(Method::GET, &format!("/rest/api/2/issue/{issue_key}/editmeta"))
      .send()
      .await
      .map_err(TrackerError::Request)?;

    let response = check_response(response, &format!("Edit metadata for {issue_key}")).await?;
    response.json::<EditMeta>().await.map_err(TrackerError::Decode)
  }

  async fn get_create_meta(&self) -> TrackerResult<CreateMeta> {
    let response = self
      .request(Method::GET, "/rest/api/2/issue/createmeta")
      .query(&[("expand", "projects.issuetypes.fields")])
      .send()
      .await
      .map_err(TrackerError::Request)?;

    let response = check_response(response, "Create metadata").await?;
    response.json::<CreateMeta>().await.map_err(TrackerError::Decode)
  }
}
