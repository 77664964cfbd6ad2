//! The report surface consumed by the CLI and the export layer.
//!
//! Every build re-fetches the full task index and the window's time
//! entries; nothing is cached between renders. A failed or malformed
//! time-entry fetch is contractually "no entries" (entries referencing
//! purged tasks are expected and recoverable); a hierarchy loop is the
//! one error that aborts a render.

use crate::api::TaskSource;
use crate::core::aggregate;
use crate::core::index::TaskIndex;
use crate::core::monthly;
use crate::core::period::{self, PeriodSpec};
use crate::errors::AppResult;
use crate::models::report::{AggregatedRow, MonthMode, Report};
use crate::models::time_entry::TimeEntry;
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

pub struct Reporter<'a> {
    source: &'a dyn TaskSource,
    tz: Tz,
    inception: NaiveDate,
}

impl<'a> Reporter<'a> {
    pub fn new(source: &'a dyn TaskSource, tz: Tz, inception: NaiveDate) -> Self {
        Self {
            source,
            tz,
            inception,
        }
    }

    fn now(&self) -> DateTime<Tz> {
        Utc::now().with_timezone(&self.tz)
    }

    /// Per-task report for one calendar day.
    pub fn build_day_report(&self, day: NaiveDate) -> AppResult<Report> {
        let index = TaskIndex::fetch_all(self.source)?;
        let window = period::window_for(&PeriodSpec::Day(day), self.now(), self.inception)?;

        match self.fetch_entries(window) {
            Some(entries) => Ok(Report::Rows(aggregate::aggregate_by_ancestor(
                &entries, &index,
            )?)),
            None => Ok(Report::NoEntries),
        }
    }

    /// Summary for a named period: per-task for today (or an explicit
    /// day), per-space for the wider windows.
    pub fn build_period_summary(&self, spec: &PeriodSpec) -> AppResult<Report> {
        let index = TaskIndex::fetch_all(self.source)?;
        let window = period::window_for(spec, self.now(), self.inception)?;

        let entries = match self.fetch_entries(window) {
            Some(entries) => entries,
            None => return Ok(Report::NoEntries),
        };

        let rows = match spec {
            PeriodSpec::Today | PeriodSpec::Day(_) => {
                aggregate::aggregate_by_ancestor(&entries, &index)?
            }
            _ => aggregate::aggregate_by_space(&entries, &index)?,
        };
        Ok(Report::Rows(rows))
    }

    /// Monthly report, resampled by day or grouped by ancestor task.
    /// The month contract has no "no entries" alternative: a failed fetch
    /// or an empty window yields an empty row set.
    pub fn build_month_report(
        &self,
        year: i32,
        month: u32,
        mode: MonthMode,
    ) -> AppResult<Vec<AggregatedRow>> {
        let index = TaskIndex::fetch_all(self.source)?;
        let window = period::window_for(&PeriodSpec::Month { year, month }, self.now(), self.inception)?;

        let entries = match self.fetch_entries(window) {
            Some(entries) => entries,
            None => return Ok(Vec::new()),
        };

        match mode {
            MonthMode::ByDay => monthly::resample_by_day(&entries, &index, self.tz),
            MonthMode::ByTask => monthly::group_by_task(&entries, &index, self.tz),
        }
    }

    /// `None` stands for "no entries": both an empty window and a
    /// failed/malformed response land here by contract.
    fn fetch_entries(&self, (start, end): (i64, i64)) -> Option<Vec<TimeEntry>> {
        match self.source.list_time_entries(start, end) {
            Ok(entries) if !entries.is_empty() => Some(entries),
            _ => None,
        }
    }
}
