//! Wire DTOs for the ClickUp v2 endpoints we consume.
//!
//! The API ships millisecond timestamps and durations as JSON strings in
//! some payloads and numbers in others, so every ms field goes through
//! [`MsValue`]. Conversions are fallible on purpose: one bad field fails
//! the whole response, and the caller decides what that means.

use crate::errors::AppError;
use crate::models::task::Task;
use crate::models::time_entry::{NO_FOLDER, TimeEntry};
use serde::Deserialize;

/// Millisecond value that may arrive as a JSON string or number.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum MsValue {
    Num(i64),
    Text(String),
}

impl MsValue {
    fn as_ms(&self) -> Result<i64, AppError> {
        match self {
            MsValue::Num(n) => Ok(*n),
            MsValue::Text(s) => s
                .parse()
                .map_err(|_| AppError::Api(format!("non-numeric millisecond value '{}'", s))),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawStatus {
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TasksPage {
    pub tasks: Vec<RawTask>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawTask {
    pub id: String,
    pub name: String,
    pub status: RawStatus,
    #[serde(default)]
    pub archived: bool,
    pub parent: Option<String>,
    pub start_date: Option<MsValue>,
    pub due_date: Option<MsValue>,
}

impl TryFrom<RawTask> for Task {
    type Error = AppError;

    fn try_from(raw: RawTask) -> Result<Self, AppError> {
        Ok(Task {
            start_date: raw.start_date.map(|v| v.as_ms()).transpose()?,
            due_date: raw.due_date.map(|v| v.as_ms()).transpose()?,
            id: raw.id,
            name: raw.name,
            status: raw.status.status,
            archived: raw.archived,
            parent: raw.parent,
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct EntriesPage {
    pub data: Vec<RawEntry>,
}

/// A raw time entry. `task` and `task_location` are mandatory here on
/// purpose: an entry pointing at a fully purged task makes the source
/// return a shape without them, and the whole fetch must fail (the caller
/// maps that to "no entries").
#[derive(Debug, Deserialize)]
pub(crate) struct RawEntry {
    pub task: RawEntryTask,
    pub duration: MsValue,
    pub start: MsValue,
    pub end: MsValue,
    pub at: MsValue,
    pub task_location: RawLocation,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawEntryTask {
    pub id: String,
    pub name: String,
    pub status: RawStatus,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawLocation {
    pub space_name: String,
    pub folder_name: String,
    pub list_name: String,
}

impl TryFrom<RawEntry> for TimeEntry {
    type Error = AppError;

    fn try_from(raw: RawEntry) -> Result<Self, AppError> {
        let folder = if raw.task_location.folder_name == "hidden" {
            NO_FOLDER.to_string()
        } else {
            raw.task_location.folder_name
        };
        Ok(TimeEntry {
            duration_ms: raw.duration.as_ms()?,
            start_ts: raw.start.as_ms()?,
            end_ts: raw.end.as_ms()?,
            at_ts: raw.at.as_ms()?,
            task_id: raw.task.id,
            task_name: raw.task.name,
            space: raw.task_location.space_name,
            folder,
            list: raw.task_location.list_name,
            task_status: raw.task.status.status,
        })
    }
}
