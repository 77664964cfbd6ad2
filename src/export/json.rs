use crate::errors::{AppError, AppResult};
use crate::models::report::AggregatedRow;
use std::path::Path;

/// Write report rows as pretty-printed JSON.
pub fn write_json(path: &Path, rows: &[AggregatedRow]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows).map_err(|e| AppError::Export(e.to_string()))?;
    std::fs::write(path, json)?;
    Ok(())
}
