//! # Issue Tracker Gateway
//!
//! Helpers layered over an [`IssueTracker`] handle: reading ticket labels,
//! exporting query results to CSV, discovering a field's metadata and
//! allowed values, and updating a field on a ticket.
//!
//! Every operation logs its failures and returns a [`GatewayResult`]. Callers
//! that only want the historical "safe default" behaviour can use
//! `unwrap_or_default()`, `.ok()`, or `.is_ok()` on the result.
//!
//! [`IssueTracker`]: ticketgate_jira::IssueTracker

mod error;
mod export;
mod fields;
mod gateway;
mod labels;

#[cfg(test)]
mod testing;

pub use error::{FailureKind, GatewayError, GatewayResult};
pub use fields::{MetadataStrategy, SAMPLE_ISSUE_JQL, StrategyOutcome, normalize_allowed_value};
pub use gateway::Gateway;
