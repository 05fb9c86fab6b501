//! # Jira Search Endpoint
//!
//! JQL search with transparent paging.

use reqwest::Method;
use tracing::debug;

use crate::client::{JiraClient, check_response};
use crate::consts::{SEARCH_FIELDS, SEARCH_PAGE_SIZE};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{JiraIssue, SearchResults};

impl JiraClient {
  /// Run a JQL query and collect matching issues.
  ///
  /// With `max_results` of `None` every page is fetched until Jira's reported
  /// total is reached; otherwise at most `max_results` issues are returned.
  pub async fn search_issues(&self, jql: &str, max_results: Option<usize>) -> TrackerResult<Vec<JiraIssue>> {
    let mut issues = Vec::new();

    loop {
      let remaining = max_results.map_or(SEARCH_PAGE_SIZE, |limit| limit.saturating_sub(issues.len()));
      let page_size = remaining.min(SEARCH_PAGE_SIZE);
      if page_size == 0 {
        break;
      }

      let page = self.search_page(jql, issues.len(), page_size).await?;
      let fetched = page.issues.len();
      issues.extend(page.issues);

      debug!("Fetched {} of {} issues for '{}'", issues.len(), page.total, jql);

      if fetched == 0 || issues.len() >= page.total {
        break;
      }
    }

    if let Some(limit) = max_results {
      issues.truncate(limit);
    }

    Ok(issues)
  }

  async fn search_page(&self, jql: &str, start_at: usize, page_size: usize) -> TrackerResult<SearchResults> {
    let params = [
      ("jql", jql.to_string()),
      ("startAt", start_at.to_string()),
      ("maxResults", page_size.to_string()),
      ("fields", SEARCH_FIELDS.to_string()),
    ];

    let response = self
      .request(Method::GET, "/rest/api/2/search")
      .query(&params)
      .send()
      .await
      .map_err(TrackerError::Request)?;

    let response = check_response(response, "Search results").await?;
    response.json::<SearchResults>().await.map_err(TrackerError::Decode)
  }
}

#[cfg(test)]
mod tests {
  use serde_json::{Value, json};
  use wiremock::matchers::{method, path, query_param};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use crate::client::create_jira_client;
  use crate::error::TrackerError;

  fn issue(key: &str) -> Value {
    json!({ "id": "1", "key": key, "fields": { "description": format!("desc {key}") } })
  }

  #[tokio::test]
  async fn test_search_issues_single_page() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "test_user", "test_token");

    Mock::given(method("GET"))
      .and(path("/rest/api/2/search"))
      .and(query_param("jql", "project = OPS"))
      .and(query_param("startAt", "0"))
      .and(query_param("maxResults", "100"))
      .and(query_param("fields", "description,labels"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "startAt": 0,
          "maxResults": 100,
          "total": 2,
          "issues": [issue("OPS-1"), issue("OPS-2")]
      })))
      .expect(1)
      .mount(&mock_server)
      .await;

    let issues = client.search_issues("project = OPS", None).await?;
    let keys: Vec<_> = issues.iter().map(|i| i.key.as_str()).collect();
    assert_eq!(keys, vec!["OPS-1", "OPS-2"]);

    Ok(())
  }

  #[tokio::test]
  async fn test_search_issues_follows_pages_until_total() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "test_user", "test_token");

    let first_page: Vec<Value> = (1..=100).map(|n| issue(&format!("OPS-{n}"))).collect();

    Mock::given(method("GET"))
      .and(path("/rest/api/2/search"))
      .and(query_param("startAt", "0"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "startAt": 0, "maxResults": 100, "total": 101, "issues": first_page
      })))
      .expect(1)
      .mount(&mock_server)
      .await;

    Mock::given(method("GET"))
      .and(path("/rest/api/2/search"))
      .and(query_param("startAt", "100"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "startAt": 100, "maxResults": 100, "total": 101, "issues": [issue("OPS-101")]
      })))
      .expect(1)
      .mount(&mock_server)
      .await;

    let issues = client.search_issues("project = OPS", None).await?;
    assert_eq!(issues.len(), 101);
    assert_eq!(issues[100].key, "OPS-101");

    Ok(())
  }

  #[tokio::test]
  async fn test_search_issues_respects_cap() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "test_user", "test_token");

    Mock::given(method("GET"))
      .and(path("/rest/api/2/search"))
      .and(query_param("jql", "project is not EMPTY"))
      .and(query_param("maxResults", "1"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "startAt": 0, "maxResults": 1, "total": 5000, "issues": [issue("OPS-9")]
      })))
      .expect(1)
      .mount(&mock_server)
      .await;

    let issues = client.search_issues("project is not EMPTY", Some(1)).await?;
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].key, "OPS-9");

    Ok(())
  }

  #[tokio::test]
  async fn test_search_issues_empty_result() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "test_user", "test_token");

    Mock::given(method("GET"))
      .and(path("/rest/api/2/search"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "startAt": 0, "maxResults": 100, "total": 0, "issues": []
      })))
      .mount(&mock_server)
      .await;

    assert!(client.search_issues("project = NONE", None).await?.is_empty());
    Ok(())
  }

  #[tokio::test]
  async fn test_search_issues_invalid_jql() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "test_user", "test_token");

    Mock::given(method("GET"))
      .and(path("/rest/api/2/search"))
      .respond_with(ResponseTemplate::new(400).set_body_json(json!({
          "errorMessages": ["Error in the JQL Query: Expecting operator but got 'OPS'."],
          "errors": {}
      })))
      .mount(&mock_server)
      .await;

    let err = client.search_issues("project OPS", None).await.unwrap_err();
    assert!(matches!(err, TrackerError::BadRequest(_)));
    assert!(err.to_string().contains("Error in the JQL Query"));

    Ok(())
  }
}
