use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Represents Jira authentication credentials
#[derive(Clone)]
pub struct JiraAuth {
  pub username: String,
  pub api_token: String,
}

/// Represents a Jira issue
#[derive(Debug, Clone, Deserialize)]
pub struct JiraIssue {
  #[serde(default)]
  pub id: String,
  pub key: String,
  #[serde(default)]
  pub fields: JiraIssueFields,
}

/// The issue fields ticketgate reads; anything else in the response is ignored
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JiraIssueFields {
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default, deserialize_with = "null_as_empty")]
  pub labels: Vec<String>,
}

/// One page of a JQL search
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
  #[serde(default)]
  pub start_at: usize,
  #[serde(default)]
  pub max_results: usize,
  #[serde(default)]
  pub total: usize,
  #[serde(default)]
  pub issues: Vec<JiraIssue>,
}

/// Entry of the full field list (`GET /rest/api/2/field`)
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct JiraField {
  pub id: String,
  pub name: String,
  #[serde(default)]
  pub custom: bool,
  #[serde(default)]
  pub schema: Option<FieldSchema>,
}

/// Type information attached to a field
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct FieldSchema {
  #[serde(rename = "type", default)]
  pub kind: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub items: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub custom: Option<String>,
}

/// Metadata describing one field, as found in edit metadata or the field
/// search endpoint.
///
/// Properties this type does not name are kept in `extra` so the descriptor
/// can be echoed back unchanged.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FieldMetadata {
  #[serde(default)]
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub key: Option<String>,
  #[serde(default)]
  pub required: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub schema: Option<FieldSchema>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub operations: Vec<String>,
  #[serde(default, deserialize_with = "null_as_empty")]
  pub allowed_values: Vec<Value>,
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

/// Edit metadata: field id to field metadata
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EditMeta {
  #[serde(default)]
  pub fields: BTreeMap<String, FieldMetadata>,
}

impl EditMeta {
  /// Whether the metadata set carries no fields at all
  pub fn is_empty(&self) -> bool {
    self.fields.is_empty()
  }
}

/// Create metadata, expanded down to issue type fields
#[derive(Debug, Default, Deserialize)]
pub(crate) struct CreateMeta {
  #[serde(default)]
  pub projects: Vec<CreateMetaProject>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CreateMetaProject {
  #[serde(default)]
  pub issuetypes: Vec<CreateMetaIssueType>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CreateMetaIssueType {
  #[serde(default)]
  pub fields: BTreeMap<String, FieldMetadata>,
}

impl CreateMeta {
  /// Flatten every project and issue type into one map; the first
  /// occurrence of a field id wins.
  pub(crate) fn into_edit_meta(self) -> EditMeta {
    let mut fields = BTreeMap::new();
    for issue_type in self.projects.into_iter().flat_map(|project| project.issuetypes) {
      for (id, field) in issue_type.fields {
        fields.entry(id).or_insert(field);
      }
    }
    EditMeta { fields }
  }
}

/// Page returned by `GET /rest/api/2/field/search`
#[derive(Debug, Default, Deserialize)]
pub(crate) struct FieldSearchPage {
  #[serde(default)]
  pub values: Vec<FieldMetadata>,
}

/// Payload for `PUT /rest/api/2/issue/{key}`
#[derive(Debug, Serialize)]
pub struct UpdateIssueRequest {
  pub fields: Map<String, Value>,
}

/// One verb-style edit of a field, serialized as `{"add": value}` and so on
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum UpdateOperation {
  Add(Value),
  Remove(Value),
}

/// Payload for `PUT /rest/api/2/issue/{key}` using the `update` verbs
/// instead of replacing whole field values
#[derive(Debug, Default, Serialize)]
pub struct IssueUpdateOperations {
  pub update: BTreeMap<String, Vec<UpdateOperation>>,
}

impl IssueUpdateOperations {
  /// Add one label, keeping the labels already on the issue
  pub fn add_label(label: &str) -> Self {
    let mut update = BTreeMap::new();
    update.insert(
      "labels".to_string(),
      vec![UpdateOperation::Add(Value::String(label.to_string()))],
    );
    Self { update }
  }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
  D: serde::Deserializer<'de>,
  T: Deserialize<'de>,
{
  Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
