#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::TimeZone;
use chrono_tz::Tz;
use cureport::api::TaskSource;
use cureport::errors::{AppError, AppResult};
use cureport::models::task::Task;
use cureport::models::time_entry::TimeEntry;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const TZ: Tz = chrono_tz::Europe::Madrid;

pub fn cur() -> Command {
    cargo_bin_cmd!("cureport")
}

/// Create a unique test config path inside the system temp dir and remove
/// any existing file
pub fn setup_test_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_cureport.conf", name));
    let cfg_path = path.to_string_lossy().to_string();
    fs::remove_file(&cfg_path).ok();
    cfg_path
}

/// Write a config pointing at an unroutable local endpoint, so commands
/// reach their own validation without talking to the real API.
pub fn write_offline_config(name: &str) -> String {
    let cfg_path = setup_test_config(name);
    fs::write(
        &cfg_path,
        "api_key: pk_test_key\n\
         team_id: \"1234567\"\n\
         base_url: http://127.0.0.1:1\n\
         timezone: Europe/Madrid\n\
         inception: 2022-10-01\n",
    )
    .expect("write config");
    cfg_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Millisecond timestamp of a local (Europe/Madrid) wall-clock instant
pub fn ms(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> i64 {
    TZ.with_ymd_and_hms(y, mo, d, h, mi, 0)
        .single()
        .expect("unambiguous local time")
        .timestamp_millis()
}

pub fn task(id: &str, name: &str, parent: Option<&str>) -> Task {
    Task {
        id: id.to_string(),
        name: name.to_string(),
        status: "in progress".to_string(),
        archived: false,
        parent: parent.map(|p| p.to_string()),
        start_date: None,
        due_date: None,
    }
}

pub fn task_with_status(id: &str, name: &str, parent: Option<&str>, status: &str) -> Task {
    let mut t = task(id, name, parent);
    t.status = status.to_string();
    t
}

/// A time entry with sensible defaults: one hour tracked ending at
/// `at_ts`, living directly in a space (no folder).
pub fn entry(task_id: &str, task_name: &str, duration_ms: i64, at_ts: i64, space: &str) -> TimeEntry {
    TimeEntry {
        task_id: task_id.to_string(),
        task_name: task_name.to_string(),
        duration_ms,
        start_ts: at_ts - duration_ms,
        end_ts: at_ts,
        at_ts,
        space: space.to_string(),
        folder: "-".to_string(),
        list: "List".to_string(),
        task_status: "in progress".to_string(),
    }
}

pub fn entry_in_folder(
    task_id: &str,
    task_name: &str,
    duration_ms: i64,
    at_ts: i64,
    space: &str,
    folder: &str,
    list: &str,
) -> TimeEntry {
    let mut e = entry(task_id, task_name, duration_ms, at_ts, space);
    e.folder = folder.to_string();
    e.list = list.to_string();
    e
}

/// In-memory task source: fixed task pages plus a time-entry set filtered
/// by the requested window, with switches to simulate remote failures.
#[derive(Default)]
pub struct FakeSource {
    pub pages: Vec<Vec<Task>>,
    pub fail_from_page: Option<u32>,
    pub entries: Vec<TimeEntry>,
    pub fail_entries: bool,
}

impl FakeSource {
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            pages: vec![tasks],
            ..Default::default()
        }
    }

    pub fn with_tasks_and_entries(tasks: Vec<Task>, entries: Vec<TimeEntry>) -> Self {
        Self {
            pages: vec![tasks],
            entries,
            ..Default::default()
        }
    }
}

impl TaskSource for FakeSource {
    fn list_tasks(&self, page: u32) -> AppResult<Vec<Task>> {
        if let Some(from) = self.fail_from_page
            && page >= from
        {
            return Err(AppError::Api(format!("task page {} unavailable", page)));
        }
        Ok(self
            .pages
            .get(page as usize)
            .cloned()
            .unwrap_or_default())
    }

    fn list_time_entries(&self, start_ms: i64, end_ms: i64) -> AppResult<Vec<TimeEntry>> {
        if self.fail_entries {
            return Err(AppError::Api("time entries unavailable".to_string()));
        }
        Ok(self
            .entries
            .iter()
            .filter(|e| e.at_ts >= start_ms && e.at_ts < end_ms)
            .cloned()
            .collect())
    }
}
