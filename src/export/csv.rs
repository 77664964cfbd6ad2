use crate::errors::{AppError, AppResult};
use crate::models::report::AggregatedRow;
use csv::Writer;
use std::path::Path;

/// Write report rows as CSV. The monthly columns only appear when the
/// row set carries them, so day/period exports stay narrow.
pub fn write_csv(path: &Path, rows: &[AggregatedRow]) -> AppResult<()> {
    let by_day = rows.iter().any(|r| r.tasks.is_some());
    let by_task = rows.iter().any(|r| r.days.is_some());

    let mut header = vec![
        "ancestor_name",
        "status",
        "space",
        "folder",
        "list",
        "duration_ms",
        "hours_minutes",
    ];
    if by_day {
        header.extend(["start_time", "end_time", "tasks"]);
    }
    if by_task {
        header.extend(["days", "subtasks_done"]);
    }

    let mut wtr = Writer::from_path(path).map_err(|e| AppError::Export(e.to_string()))?;
    wtr.write_record(&header)
        .map_err(|e| AppError::Export(e.to_string()))?;

    for row in rows {
        let mut record = vec![
            row.ancestor_name.clone(),
            row.status.clone(),
            row.space.clone(),
            row.folder.clone(),
            row.list.clone(),
            row.duration_ms.to_string(),
            row.hours_minutes.clone(),
        ];
        if by_day {
            record.push(row.start_time.clone().unwrap_or_default());
            record.push(row.end_time.clone().unwrap_or_default());
            record.push(row.tasks.clone().unwrap_or_default());
        }
        if by_task {
            record.push(row.days.clone().unwrap_or_default());
            record.push(row.subtasks_done.clone().unwrap_or_default());
        }
        wtr.write_record(&record)
            .map_err(|e| AppError::Export(e.to_string()))?;
    }

    wtr.flush()?;
    Ok(())
}
