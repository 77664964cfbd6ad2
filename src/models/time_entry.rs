use serde::Serialize;

/// Folder value used by the source for entries outside any folder.
pub const NO_FOLDER: &str = "-";

/// A single tracked duration against one task.
///
/// `at_ts` is the timestamp the entry was logged at and drives all
/// period/day bucketing. `start_ts`/`end_ts` bound the tracked interval
/// and only feed the monthly by-day columns.
#[derive(Debug, Clone, Serialize)]
pub struct TimeEntry {
    pub task_id: String,
    pub task_name: String,
    pub duration_ms: i64,
    pub start_ts: i64,
    pub end_ts: i64,
    pub at_ts: i64,
    pub space: String,
    pub folder: String, // NO_FOLDER when the source hides it
    pub list: String,
    pub task_status: String,
}

impl TimeEntry {
    /// Location label: "space-folder", or just the space when the entry
    /// lives outside any folder.
    pub fn location(&self) -> String {
        if self.folder == NO_FOLDER {
            self.space.clone()
        } else {
            format!("{}-{}", self.space, self.folder)
        }
    }
}
