//! Constants for the ticketgate Jira client.

/// User-Agent header value for the Jira API client
pub const USER_AGENT: &str = concat!("ticketgate/", env!("CARGO_PKG_VERSION"));

/// Number of issues requested per search page
pub const SEARCH_PAGE_SIZE: usize = 100;

/// Issue fields requested by searches
pub const SEARCH_FIELDS: &str = "description,labels";
