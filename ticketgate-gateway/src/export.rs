//! CSV export of query results.

use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;
use ticketgate_jira::{IssueTracker, JiraIssue};
use tracing::{info, warn};

use crate::error::{GatewayError, GatewayResult};
use crate::gateway::Gateway;

impl<T: IssueTracker> Gateway<'_, T> {
  /// Export every issue matching `jql` to a headerless two-column CSV of
  /// ticket key and description, one CRLF-terminated record per issue.
  ///
  /// The file at `output_path` is created or truncated. Returns the number of
  /// records written. On failure the file may be missing or partially
  /// written.
  pub async fn export_issues_to_csv(&self, jql: &str, output_path: impl AsRef<Path>) -> GatewayResult<usize> {
    let output_path = output_path.as_ref();

    let result = match self.tracker.search_issues(jql, None).await {
      Ok(issues) => write_issues_csv(&issues, output_path),
      Err(err) => Err(GatewayError::from(err)),
    };

    match result {
      Ok(count) => {
        info!("Successfully exported {count} issues to {}", output_path.display());
        Ok(count)
      }
      Err(err) => {
        warn!("Error exporting issues for '{jql}' to CSV: {err}");
        Err(err)
      }
    }
  }
}

fn write_issues_csv(issues: &[JiraIssue], output_path: &Path) -> GatewayResult<usize> {
  let io_error = |source: csv::Error| GatewayError::Io {
    path: output_path.to_path_buf(),
    source,
  };

  let mut writer = WriterBuilder::new()
    .has_headers(false)
    .from_path(output_path)
    .map_err(io_error)?;

  write_records(&mut writer, issues).map_err(io_error)?;
  Ok(issues.len())
}

fn write_records<W: Write>(writer: &mut csv::Writer<W>, issues: &[JiraIssue]) -> Result<(), csv::Error> {
  for issue in issues {
    let description = issue.fields.description.as_deref().unwrap_or_default();
    writer.write_record([issue.key.as_str(), description])?;
  }
  writer.flush()?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use std::fs;

  use serde_json::json;
  use tempfile::TempDir;

  use super::*;
  use crate::error::FailureKind;
  use crate::testing::FakeTracker;

  #[tokio::test]
  async fn test_export_issues_to_csv() {
    let tracker = FakeTracker::default()
      .with_search_result(json!({ "key": "OPS-1", "fields": { "description": "fix bug" } }))
      .with_search_result(json!({ "key": "OPS-2", "fields": { "description": null } }));
    let gateway = Gateway::new(&tracker);
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("issues.csv");

    let count = gateway.export_issues_to_csv("project = OPS", &output).await.unwrap();

    assert_eq!(count, 2);
    assert_eq!(fs::read_to_string(&output).unwrap(), "OPS-1,fix bug\r\nOPS-2,\r\n");
    assert_eq!(tracker.calls(), vec!["search_issues project = OPS max=None"]);
  }

  #[tokio::test]
  async fn test_export_quotes_embedded_delimiters() {
    let tracker = FakeTracker::default().with_search_result(json!({
        "key": "OPS-3",
        "fields": { "description": "line one, with comma\nline \"two\"" }
    }));
    let gateway = Gateway::new(&tracker);
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("issues.csv");

    gateway.export_issues_to_csv("project = OPS", &output).await.unwrap();

    assert_eq!(
      fs::read_to_string(&output).unwrap(),
      "OPS-3,\"line one, with comma\nline \"\"two\"\"\"\r\n"
    );
  }

  #[tokio::test]
  async fn test_export_overwrites_existing_file() {
    let tracker = FakeTracker::default().with_search_result(json!({ "key": "OPS-1", "fields": {} }));
    let gateway = Gateway::new(&tracker);
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("issues.csv");
    fs::write(&output, "stale,row\nmore,stale\n").unwrap();

    gateway.export_issues_to_csv("project = OPS", &output).await.unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "OPS-1,\r\n");
  }

  #[tokio::test]
  async fn test_export_empty_result_creates_empty_file() {
    let tracker = FakeTracker::default();
    let gateway = Gateway::new(&tracker);
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("issues.csv");

    assert_eq!(gateway.export_issues_to_csv("project = NONE", &output).await.unwrap(), 0);
    assert_eq!(fs::read_to_string(&output).unwrap(), "");
  }

  #[tokio::test]
  async fn test_export_query_failure_writes_nothing() {
    let tracker = FakeTracker::default().failing_search();
    let gateway = Gateway::new(&tracker);
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("issues.csv");

    let result = gateway.export_issues_to_csv("project = OPS", &output).await;

    assert_eq!(result.as_ref().unwrap_err().kind(), FailureKind::Transport);
    assert!(!output.exists());
  }

  #[tokio::test]
  async fn test_export_unwritable_path_is_io_failure() {
    let tracker = FakeTracker::default().with_search_result(json!({ "key": "OPS-1", "fields": {} }));
    let gateway = Gateway::new(&tracker);
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("missing-dir").join("issues.csv");

    let err = gateway.export_issues_to_csv("project = OPS", &output).await.unwrap_err();

    assert_eq!(err.kind(), FailureKind::Io);
    assert!(err.to_string().contains("missing-dir"));
  }
}
