//! Label lookups for one or many tickets.

use indexmap::IndexMap;
use ticketgate_jira::IssueTracker;
use tracing::{info, warn};

use crate::error::{GatewayError, GatewayResult};
use crate::gateway::Gateway;

impl<T: IssueTracker> Gateway<'_, T> {
  /// Labels of a single ticket.
  ///
  /// A ticket without labels yields an empty vec. Lookup failures are logged
  /// and returned; `unwrap_or_default()` restores the empty-vec fallback.
  pub async fn get_ticket_labels(&self, ticket_key: &str) -> GatewayResult<Vec<String>> {
    match self.tracker.get_issue(ticket_key).await {
      Ok(issue) => Ok(issue.fields.labels),
      Err(err) => {
        let err = GatewayError::from(err);
        warn!("Error retrieving labels for ticket {ticket_key}: {err}");
        Err(err)
      }
    }
  }

  /// Labels for each ticket, keyed in input order.
  ///
  /// Tickets are fetched one at a time. A failed lookup maps that ticket to
  /// an empty vec and does not affect the others.
  pub async fn get_labels_for_tickets<I, S>(&self, ticket_keys: I) -> IndexMap<String, Vec<String>>
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let mut labels_by_ticket = IndexMap::new();

    for key in ticket_keys {
      let key = key.as_ref();
      let labels = self.get_ticket_labels(key).await.unwrap_or_default();
      labels_by_ticket.insert(key.to_string(), labels);
    }

    labels_by_ticket
  }

  /// Add a label to a ticket, leaving its other labels in place.
  ///
  /// The label is sent without checking whether the ticket already has it.
  pub async fn add_ticket_label(&self, ticket_key: &str, label: &str) -> GatewayResult<()> {
    match self.tracker.add_issue_label(ticket_key, label).await {
      Ok(()) => {
        info!("Added label {label} to ticket {ticket_key}");
        Ok(())
      }
      Err(err) => {
        let err = GatewayError::from(err);
        warn!("Error adding label {label} to ticket {ticket_key}: {err}");
        Err(err)
      }
    }
  }
}
