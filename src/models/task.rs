use serde::Serialize;

/// A task as seen in one index snapshot.
///
/// `parent` may reference a task that no longer exists in the snapshot
/// (deleted between two fetches); resolution treats that as "no ancestor",
/// never as an error.
#[derive(Debug, Clone, Serialize)]
pub struct Task {
    pub id: String,
    pub name: String,
    pub status: String,
    pub archived: bool,
    pub parent: Option<String>,
    pub start_date: Option<i64>, // ms since epoch
    pub due_date: Option<i64>,   // ms since epoch
}

impl Task {
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.status.as_str(), "done" | "completed")
    }
}
