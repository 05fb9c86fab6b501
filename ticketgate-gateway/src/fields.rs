//! Field metadata discovery, allowed values, and field updates.
//!
//! Jira does not expose field metadata consistently: generic metadata may be
//! empty, and per-issue metadata depends on the issue's project and type. The
//! lookup therefore walks an ordered list of [`MetadataStrategy`] values and
//! stops at the first one that finds the field.

use serde_json::{Map, Value};
use ticketgate_jira::{EditMeta, FieldMetadata, IssueTracker};
use tracing::{debug, info, warn};

use crate::error::{GatewayError, GatewayResult};
use crate::gateway::{Gateway, names_match};

/// Query used to pick an arbitrary issue whose edit metadata can stand in
/// for missing generic metadata. Which issue comes back is up to Jira, so
/// the metadata found this way can differ between runs and issue types.
pub const SAMPLE_ISSUE_JQL: &str = "project is not EMPTY";

/// One way of finding a field's metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataStrategy {
  /// Edit metadata that is not tied to any issue
  GenericEditMeta,
  /// Edit metadata of one sample issue; only tried when the generic
  /// metadata came back empty
  SampleIssueEditMeta,
  /// The field's own descriptor, fetched by identifier
  FieldDescriptor,
}

impl MetadataStrategy {
  /// Order in which strategies are attempted
  pub const ORDER: [Self; 3] = [
    Self::GenericEditMeta,
    Self::SampleIssueEditMeta,
    Self::FieldDescriptor,
  ];

  /// Short name used in diagnostics
  pub const fn name(self) -> &'static str {
    match self {
      Self::GenericEditMeta => "generic edit metadata",
      Self::SampleIssueEditMeta => "sample issue edit metadata",
      Self::FieldDescriptor => "field descriptor",
    }
  }

  /// Whether this strategy should run given the previous strategy's outcome
  pub const fn applies_after(self, previous: Option<&StrategyOutcome>) -> bool {
    match self {
      Self::SampleIssueEditMeta => matches!(previous, Some(StrategyOutcome::Empty)),
      Self::GenericEditMeta | Self::FieldDescriptor => true,
    }
  }
}

/// Result of running one [`MetadataStrategy`]
#[derive(Debug, Clone, PartialEq)]
pub enum StrategyOutcome {
  /// The field's metadata was found
  Found(FieldMetadata),
  /// The metadata set had no entries at all
  Empty,
  /// The metadata set had entries, none of them for this field
  NotInSet,
}

impl StrategyOutcome {
  fn scan(meta: EditMeta, field_name: &str) -> Self {
    if meta.is_empty() {
      return Self::Empty;
    }

    meta
      .fields
      .into_values()
      .find(|field| names_match(&field.name, field_name))
      .map_or(Self::NotInSet, Self::Found)
  }
}

impl<T: IssueTracker> Gateway<'_, T> {
  /// Metadata for a field, looked up by display name.
  ///
  /// An unknown field name fails before any metadata is fetched. Otherwise
  /// the strategies in [`MetadataStrategy::ORDER`] are tried in turn; any
  /// tracker fault aborts the lookup.
  pub async fn get_field_metadata(&self, field_name: &str) -> GatewayResult<FieldMetadata> {
    self
      .find_field_metadata(field_name)
      .await
      .inspect_err(|err| warn!("Error retrieving metadata for field {field_name}: {err}"))
  }

  async fn find_field_metadata(&self, field_name: &str) -> GatewayResult<FieldMetadata> {
    let field_id = self.lookup_field_id(field_name).await?;

    let mut previous = None;
    for strategy in MetadataStrategy::ORDER {
      if !strategy.applies_after(previous.as_ref()) {
        continue;
      }

      let outcome = self.run_strategy(strategy, &field_id, field_name).await?;
      debug!("{} for field '{field_name}': {}", strategy.name(), outcome_label(&outcome));

      match outcome {
        StrategyOutcome::Found(meta) => return Ok(meta),
        other => previous = Some(other),
      }
    }

    Err(GatewayError::not_found(format!("Metadata for field '{field_name}'")))
  }

  async fn run_strategy(
    &self,
    strategy: MetadataStrategy,
    field_id: &str,
    field_name: &str,
  ) -> GatewayResult<StrategyOutcome> {
    match strategy {
      MetadataStrategy::GenericEditMeta => {
        let meta = self.tracker.get_edit_meta(None).await?;
        Ok(StrategyOutcome::scan(meta, field_name))
      }
      MetadataStrategy::SampleIssueEditMeta => {
        let sample = self.tracker.search_issues(SAMPLE_ISSUE_JQL, Some(1)).await?;
        let Some(issue) = sample.first() else {
          return Ok(StrategyOutcome::Empty);
        };
        let meta = self.tracker.get_edit_meta(Some(&issue.key)).await?;
        Ok(StrategyOutcome::scan(meta, field_name))
      }
      MetadataStrategy::FieldDescriptor => {
        let meta = self.tracker.get_field(field_id).await?;
        Ok(StrategyOutcome::Found(meta))
      }
    }
  }

  /// Allowed values of a field, normalized with [`normalize_allowed_value`].
  ///
  /// Fields without an `allowedValues` list yield an empty vec. Failures come
  /// from [`Gateway::get_field_metadata`], which has already logged them.
  pub async fn get_field_allowed_values(&self, field_name: &str) -> GatewayResult<Vec<Value>> {
    let metadata = self.get_field_metadata(field_name).await?;

    Ok(
      metadata
        .allowed_values
        .into_iter()
        .map(normalize_allowed_value)
        .collect(),
    )
  }

  /// Set one field on a ticket.
  ///
  /// The field name is resolved case-insensitively; an unknown name fails
  /// without sending an update. `new_value` is sent as-is and is not checked
  /// against the field's allowed values.
  pub async fn update_field_value(&self, ticket_key: &str, field_name: &str, new_value: Value) -> GatewayResult<()> {
    let result = self.send_field_update(ticket_key, field_name, new_value).await;

    match &result {
      Ok(()) => info!("Successfully updated {field_name} for ticket {ticket_key}"),
      Err(err) => warn!("Error updating {field_name} for ticket {ticket_key}: {err}"),
    }

    result
  }

  async fn send_field_update(&self, ticket_key: &str, field_name: &str, new_value: Value) -> GatewayResult<()> {
    let field_id = self.lookup_field_id(field_name).await?;

    let mut fields = Map::new();
    fields.insert(field_id, new_value);

    self.tracker.update_issue_fields(ticket_key, fields).await?;
    Ok(())
  }
}

/// Reduce an allowed-value entry to its display value.
///
/// Objects yield their `value` property, else their `name`, else the object
/// itself. Scalars pass through.
pub fn normalize_allowed_value(value: Value) -> Value {
  match value {
    Value::Object(mut object) => {
      if let Some(display) = object.remove("value") {
        display
      } else if let Some(name) = object.remove("name") {
        name
      } else {
        Value::Object(object)
      }
    }
    scalar => scalar,
  }
}

const fn outcome_label(outcome: &StrategyOutcome) -> &'static str {
  match outcome {
    StrategyOutcome::Found(_) => "found",
    StrategyOutcome::Empty => "empty",
    StrategyOutcome::NotInSet => "not in set",
  }
}
