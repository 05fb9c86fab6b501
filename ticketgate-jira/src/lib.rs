//! # Jira API Client
//!
//! Jira REST API integration covering issue lookup, JQL search, field
//! discovery, edit metadata, and field updates. The [`IssueTracker`] trait is
//! the seam the gateway operations are written against; [`JiraClient`] is its
//! HTTP implementation.

pub mod auth;
mod client;
pub mod consts;
mod endpoints;
pub mod error;
pub mod models;
pub mod tracker;

// Re-export the client
pub use client::{JiraClient, create_jira_client};
// Re-export errors and the tracker seam
pub use error::{TrackerError, TrackerResult};
// Re-export models
pub use models::{
  EditMeta, FieldMetadata, FieldSchema, IssueUpdateOperations, JiraAuth, JiraField, JiraIssue, JiraIssueFields,
  SearchResults, UpdateIssueRequest, UpdateOperation,
};
pub use tracker::IssueTracker;
