//! External task source boundary.
//!
//! The report core only sees [`TaskSource`]; the concrete ClickUp HTTP
//! client lives behind it so reports stay testable without a network.

mod client;
mod types;

pub use client::ClickUpClient;

use crate::errors::AppResult;
use crate::models::task::Task;
use crate::models::time_entry::TimeEntry;

/// One page of tasks / one window of time entries from the remote source.
///
/// `list_tasks` must include archived and closed tasks and sub-tasks so the
/// whole hierarchy is visible to the resolver. `list_time_entries` fails
/// wholesale on a malformed response; callers convert that into the
/// "no entries" outcome.
pub trait TaskSource {
    fn list_tasks(&self, page: u32) -> AppResult<Vec<Task>>;
    fn list_time_entries(&self, start_ms: i64, end_ms: i64) -> AppResult<Vec<TimeEntry>>;
}
