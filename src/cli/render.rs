//! Terminal rendering of report row sets.

use crate::models::report::AggregatedRow;
use crate::ui::messages::info;
use crate::utils::table::Table;
use crate::utils::time::hh_mm_from_pcg;

pub(crate) enum TableKind {
    Tasks,
    Spaces { shares: bool },
    MonthByDay,
    MonthByTask,
}

pub(crate) fn print_no_entries() {
    info("No time entries");
}

pub(crate) fn print_rows(kind: &TableKind, rows: &[AggregatedRow]) {
    let table = match kind {
        TableKind::Tasks => tasks_table(rows),
        TableKind::Spaces { shares } => spaces_table(rows, *shares),
        TableKind::MonthByDay => month_by_day_table(rows),
        TableKind::MonthByTask => month_by_task_table(rows),
    };
    println!("{}", table.render());
}

fn tasks_table(rows: &[AggregatedRow]) -> Table {
    let mut table =
        Table::new(&["status", "main task", "space", "folder", "list", "hh:mm"]).with_bold_last_row();
    for r in rows {
        table.add_row(vec![
            r.status.clone(),
            r.ancestor_name.clone(),
            r.space.clone(),
            r.folder.clone(),
            r.list.clone(),
            r.hours_minutes.clone(),
        ]);
    }
    table
}

fn spaces_table(rows: &[AggregatedRow], shares: bool) -> Table {
    // the share of the Total row would always read 100%
    let total_ms: i64 = rows
        .iter()
        .filter(|r| !r.is_total())
        .map(|r| r.duration_ms)
        .sum();

    let headers: &[&str] = if shares {
        &["space", "hh:mm", "share"]
    } else {
        &["space", "hh:mm"]
    };
    let mut table = Table::new(headers).with_bold_last_row();

    for r in rows {
        let mut row = vec![r.ancestor_name.clone(), r.hours_minutes.clone()];
        if shares {
            if r.is_total() || total_ms == 0 {
                row.push("-".to_string());
            } else {
                let pcg = r.duration_ms as f64 * 100.0 / total_ms as f64;
                row.push(hh_mm_from_pcg(pcg, total_ms));
            }
        }
        table.add_row(row);
    }
    table
}

fn month_by_day_table(rows: &[AggregatedRow]) -> Table {
    let mut table =
        Table::new(&["day", "hh:mm", "start", "end", "tasks (locations)"]).with_bold_last_row();
    for r in rows {
        table.add_row(vec![
            r.ancestor_name.clone(),
            r.hours_minutes.clone(),
            r.start_time.clone().unwrap_or_default(),
            r.end_time.clone().unwrap_or_default(),
            r.tasks.clone().unwrap_or_default(),
        ]);
    }
    table
}

fn month_by_task_table(rows: &[AggregatedRow]) -> Table {
    let mut table = Table::new(&[
        "main task",
        "status",
        "subtasks done",
        "space",
        "folder",
        "list",
        "days",
        "hh:mm",
    ])
    .with_bold_last_row();
    for r in rows {
        table.add_row(vec![
            r.ancestor_name.clone(),
            r.status.clone(),
            r.subtasks_done.clone().unwrap_or_default(),
            r.space.clone(),
            r.folder.clone(),
            r.list.clone(),
            r.days.clone().unwrap_or_default(),
            r.hours_minutes.clone(),
        ]);
    }
    table
}
