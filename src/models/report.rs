use serde::Serialize;

/// Placeholder used in non-numeric columns of synthetic rows.
pub const PLACEHOLDER: &str = "-";

/// Label of the synthetic summary row appended to every report.
pub const TOTAL_LABEL: &str = "Total";

/// One row of an aggregated report.
///
/// `ancestor_name` is the row label: a top-level task name, a space name,
/// a `DD/MM/YYYY` day, or `Total` for the synthetic summary row. The
/// optional columns are only set by the monthly views.
#[derive(Debug, Clone, Serialize)]
pub struct AggregatedRow {
    pub ancestor_name: String,
    pub status: String,
    pub space: String,
    pub folder: String,
    pub list: String,
    pub duration_ms: i64,
    pub hours_minutes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtasks_done: Option<String>,
}

impl AggregatedRow {
    /// Row with only the label/duration columns filled in, placeholders
    /// elsewhere. Monthly views fill their extra columns afterwards.
    pub fn bare(label: impl Into<String>, duration_ms: i64, hours_minutes: String) -> Self {
        Self {
            ancestor_name: label.into(),
            status: PLACEHOLDER.to_string(),
            space: PLACEHOLDER.to_string(),
            folder: PLACEHOLDER.to_string(),
            list: PLACEHOLDER.to_string(),
            duration_ms,
            hours_minutes,
            start_time: None,
            end_time: None,
            tasks: None,
            days: None,
            subtasks_done: None,
        }
    }

    pub fn is_total(&self) -> bool {
        self.ancestor_name == TOTAL_LABEL
    }
}

/// Outcome of a day or period report.
///
/// The display layer tells "no entries tracked" apart from an empty table,
/// so a missing/failed time-entry fetch surfaces as `NoEntries`, never as
/// an error.
#[derive(Debug, Clone)]
pub enum Report {
    Rows(Vec<AggregatedRow>),
    NoEntries,
}

impl Report {
    pub fn rows(&self) -> Option<&[AggregatedRow]> {
        match self {
            Report::Rows(rows) => Some(rows),
            Report::NoEntries => None,
        }
    }
}

/// Monthly report flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthMode {
    ByDay,
    ByTask,
}
