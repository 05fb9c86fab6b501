//! # Jira Field Endpoints
//!
//! The field catalogue: listing every field and fetching one field's
//! descriptor by identifier.

use reqwest::Method;

use crate::client::{JiraClient, check_response};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{FieldMetadata, FieldSearchPage, JiraField};

impl JiraClient {
  /// List every system and custom field visible to the user
  pub async fn list_fields(&self) -> TrackerResult<Vec<JiraField>> {
    let response = self
      .request(Method::GET, "/rest/api/2/field")
      .send()
      .await
      .map_err(TrackerError::Request)?;

    let response = check_response(response, "Field list").await?;
    response.json::<Vec<JiraField>>().await.map_err(TrackerError::Decode)
  }

  /// Fetch the descriptor of a single field by its identifier
  pub async fn get_field(&self, field_id: &str) -> TrackerResult<FieldMetadata> {
    let response = self
      .request(Method::GET, "/rest/api/2/field/search")
      .query(&[("id", field_id)])
      .send()
      .await
      .map_err(TrackerError::Request)?;

    let resource = format!("Field {field_id}");
    let response = check_response(response, &resource).await?;
    let page = response.json::<FieldSearchPage>().await.map_err(TrackerError::Decode)?;

    page.values.into_iter().next().ok_or(TrackerError::NotFound(resource))
  }
}
