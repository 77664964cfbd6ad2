//! Grouping and summing of time entries for day and period reports.

use crate::core::ancestry::{self, DELETED_MARKER};
use crate::core::index::TaskIndex;
use crate::errors::AppResult;
use crate::models::report::{AggregatedRow, TOTAL_LABEL};
use crate::models::time_entry::TimeEntry;
use crate::utils::time::format_hh_mm;
use std::collections::{BTreeMap, HashMap};

/// Per-task accumulation: summed duration plus first-seen metadata.
#[derive(Debug)]
pub(crate) struct TaskGroup {
    pub task_id: String,
    pub duration_ms: i64,
    pub space: String,
    pub folder: String,
    pub list: String,
    pub status: String,
    pub ancestor_name: String,
}

/// Group entries by raw task id, resolve each group to its top-level
/// ancestor and drop groups whose own task was deleted.
pub(crate) fn group_tasks(entries: &[TimeEntry], index: &TaskIndex) -> AppResult<Vec<TaskGroup>> {
    let mut groups: Vec<TaskGroup> = Vec::new();
    let mut by_id: HashMap<String, usize> = HashMap::new();

    for e in entries {
        match by_id.get(&e.task_id) {
            Some(&i) => groups[i].duration_ms += e.duration_ms,
            None => {
                by_id.insert(e.task_id.clone(), groups.len());
                groups.push(TaskGroup {
                    task_id: e.task_id.clone(),
                    duration_ms: e.duration_ms,
                    space: e.space.clone(),
                    folder: e.folder.clone(),
                    list: e.list.clone(),
                    status: e.task_status.clone(),
                    ancestor_name: String::new(),
                });
            }
        }
    }

    for g in &mut groups {
        g.ancestor_name = ancestry::resolve_ancestor_name(&g.task_id, index)?;
    }
    groups.retain(|g| g.ancestor_name != DELETED_MARKER);

    Ok(groups)
}

/// One row per distinct task, labelled with its top-level ancestor,
/// ordered by (space, folder, list, ancestor), with a Total row appended.
pub fn aggregate_by_ancestor(
    entries: &[TimeEntry],
    index: &TaskIndex,
) -> AppResult<Vec<AggregatedRow>> {
    let mut groups = group_tasks(entries, index)?;
    groups.sort_by(|a, b| {
        (&a.space, &a.folder, &a.list, &a.ancestor_name)
            .cmp(&(&b.space, &b.folder, &b.list, &b.ancestor_name))
    });

    let total_ms: i64 = groups.iter().map(|g| g.duration_ms).sum();
    let mut rows: Vec<AggregatedRow> = groups
        .into_iter()
        .map(|g| AggregatedRow {
            ancestor_name: g.ancestor_name,
            status: g.status,
            space: g.space,
            folder: g.folder,
            list: g.list,
            duration_ms: g.duration_ms,
            hours_minutes: format_hh_mm(g.duration_ms),
            start_time: None,
            end_time: None,
            tasks: None,
            days: None,
            subtasks_done: None,
        })
        .collect();

    rows.push(total_row(total_ms));
    Ok(rows)
}

/// Coarse summary: the ancestor-resolved groups re-grouped by space,
/// ordered by space name, with a Total row appended.
pub fn aggregate_by_space(
    entries: &[TimeEntry],
    index: &TaskIndex,
) -> AppResult<Vec<AggregatedRow>> {
    let groups = group_tasks(entries, index)?;

    let mut by_space: BTreeMap<String, i64> = BTreeMap::new();
    for g in groups {
        *by_space.entry(g.space).or_insert(0) += g.duration_ms;
    }

    let total_ms: i64 = by_space.values().sum();
    let mut rows: Vec<AggregatedRow> = by_space
        .into_iter()
        .map(|(space, ms)| {
            let mut row = AggregatedRow::bare(space.clone(), ms, format_hh_mm(ms));
            row.space = space;
            row
        })
        .collect();

    rows.push(total_row(total_ms));
    Ok(rows)
}

pub(crate) fn total_row(total_ms: i64) -> AggregatedRow {
    AggregatedRow::bare(TOTAL_LABEL, total_ms, format_hh_mm(total_ms))
}
