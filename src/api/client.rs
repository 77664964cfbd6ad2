use super::TaskSource;
use super::types::{EntriesPage, TasksPage};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::task::Task;
use crate::models::time_entry::TimeEntry;
use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use std::time::Duration;

/// Blocking ClickUp v2 client. One render makes a handful of sequential
/// calls, so no pooling or retry layer is needed.
pub struct ClickUpClient {
    http: Client,
    base_url: String,
    team_id: String,
}

impl ClickUpClient {
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        let mut headers = HeaderMap::new();
        let auth = HeaderValue::from_str(&cfg.api_key)
            .map_err(|_| AppError::Config("api_key contains invalid characters".to_string()))?;
        headers.insert(AUTHORIZATION, auth);

        let http = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            team_id: cfg.team_id.clone(),
        })
    }
}

impl TaskSource for ClickUpClient {
    fn list_tasks(&self, page: u32) -> AppResult<Vec<Task>> {
        let url = format!("{}/team/{}/task", self.base_url, self.team_id);
        let resp = self
            .http
            .get(&url)
            .query(&[
                ("page", page.to_string().as_str()),
                ("reverse", "true"),
                ("subtasks", "true"),
                ("include_closed", "true"),
                ("team_id", self.team_id.as_str()),
            ])
            .send()?
            .error_for_status()?;

        let body: TasksPage = resp
            .json()
            .map_err(|e| AppError::Api(format!("task page {}: {}", page, e)))?;
        body.tasks.into_iter().map(Task::try_from).collect()
    }

    fn list_time_entries(&self, start_ms: i64, end_ms: i64) -> AppResult<Vec<TimeEntry>> {
        let url = format!("{}/team/{}/time_entries", self.base_url, self.team_id);
        let resp = self
            .http
            .get(&url)
            .query(&[
                ("start_date", start_ms.to_string().as_str()),
                ("end_date", end_ms.to_string().as_str()),
                ("include_task_tags", "true"),
                ("include_location_names", "true"),
            ])
            .send()?
            .error_for_status()?;

        let body: EntriesPage = resp
            .json()
            .map_err(|e| AppError::Api(format!("time entries: {}", e)))?;
        body.data.into_iter().map(TimeEntry::try_from).collect()
    }
}
