use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, header};
use tracing::debug;

use crate::consts::USER_AGENT;
use crate::error::{TrackerError, TrackerResult};
use crate::models::JiraAuth;

/// Represents a Jira API client
pub struct JiraClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
  pub(crate) auth: JiraAuth,
}

impl JiraClient {
  /// Create a new Jira client
  pub fn new(base_url: &str, auth: JiraAuth) -> Self {
    let client = Client::new();
    Self {
      client,
      base_url: base_url.trim_end_matches('/').to_string(),
      auth,
    }
  }

  /// Base URL this client sends requests to
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Build an authenticated request for a REST path such as `/rest/api/2/field`
  pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
    let url = format!("{}{}", self.base_url, path);
    debug!("{method} {url}");

    self
      .client
      .request(method, url)
      .basic_auth(&self.auth.username, Some(&self.auth.api_token))
      .header(header::USER_AGENT, USER_AGENT)
      .header(header::ACCEPT, "application/json")
  }

  /// Test the Jira connection by fetching the current user
  pub async fn test_connection(&self) -> TrackerResult<bool> {
    let response = self
      .request(Method::GET, "/rest/api/2/myself")
      .send()
      .await
      .map_err(TrackerError::Request)?;

    Ok(response.status().is_success())
  }
}

/// Map a Jira response status onto [`TrackerError`].
///
/// `resource` names what was requested (e.g. "Issue OPS-1") and is only used
/// for the not-found message.
pub(crate) async fn check_response(response: Response, resource: &str) -> TrackerResult<Response> {
  match response.status() {
    status if status.is_success() => Ok(response),
    StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(TrackerError::Unauthorized),
    StatusCode::NOT_FOUND => Err(TrackerError::NotFound(resource.to_string())),
    StatusCode::BAD_REQUEST => Err(TrackerError::BadRequest(response.text().await.unwrap_or_default())),
    status => Err(TrackerError::UnexpectedStatus {
      status,
      body: response.text().await.unwrap_or_default(),
    }),
  }
}

/// Create a Jira client from credentials
pub fn create_jira_client(base_url: &str, username: &str, api_token: &str) -> JiraClient {
  let auth = JiraAuth {
    username: username.to_string(),
    api_token: api_token.to_string(),
  };

  JiraClient::new(base_url, auth)
}
