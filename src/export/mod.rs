mod csv;
mod fs_utils;
mod json;

use crate::errors::AppResult;
use crate::models::report::AggregatedRow;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Write report rows to `path` in the requested format, asking before
/// overwriting unless `force` is set.
pub fn write_report(
    path: &Path,
    format: &ExportFormat,
    rows: &[AggregatedRow],
    force: bool,
) -> AppResult<()> {
    fs_utils::ensure_writable(path, force)?;
    match format {
        ExportFormat::Csv => csv::write_csv(path, rows)?,
        ExportFormat::Json => json::write_json(path, rows)?,
    }
    notify_export_success(format.as_str().to_uppercase().as_str(), path);
    Ok(())
}
