//! # Jira API Endpoints
//!
//! Endpoint implementations grouped by Jira resource: issues, JQL search,
//! the field catalogue, and edit metadata.

pub mod fields;
pub mod issues;
pub mod metadata;
pub mod search;
