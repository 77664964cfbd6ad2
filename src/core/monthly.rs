//! Monthly report views: calendar-day resampling and per-ancestor
//! grouping across a whole month.

use crate::core::ancestry::{self, DELETED_MARKER};
use crate::core::index::TaskIndex;
use crate::errors::{AppError, AppResult};
use crate::models::report::{AggregatedRow, PLACEHOLDER};
use crate::models::time_entry::TimeEntry;
use crate::utils::time::format_hh_mm;
use chrono::{DateTime, Datelike, NaiveDate};
use chrono_tz::Tz;
use std::collections::{BTreeMap, BTreeSet, HashMap};

#[derive(Debug, Default)]
struct DayBucket {
    duration_ms: i64,
    earliest_start: Option<i64>,
    latest_end: Option<i64>,
    labels: BTreeSet<String>,
}

/// One row per calendar day of the month, chronological.
///
/// Each entry lands in the local day of its logged-at timestamp; a day
/// collects its summed duration, the earliest tracked start, the latest
/// tracked end, and the deduplicated set of "ancestor (location)" labels
/// active that day. Days between the first and last tracked day with no
/// entries still get a zero row, so the month reads as a calendar.
pub fn resample_by_day(
    entries: &[TimeEntry],
    index: &TaskIndex,
    tz: Tz,
) -> AppResult<Vec<AggregatedRow>> {
    let mut buckets: BTreeMap<NaiveDate, DayBucket> = BTreeMap::new();

    for e in entries {
        let name = ancestry::resolve_ancestor_name(&e.task_id, index)?;
        if name == DELETED_MARKER {
            continue;
        }
        let label = format!("{} ({})", name, e.location());
        let day = to_local(e.at_ts, tz)?.date_naive();

        let bucket = buckets.entry(day).or_default();
        bucket.duration_ms += e.duration_ms;
        bucket.earliest_start = Some(match bucket.earliest_start {
            Some(cur) => cur.min(e.start_ts),
            None => e.start_ts,
        });
        bucket.latest_end = Some(match bucket.latest_end {
            Some(cur) => cur.max(e.end_ts),
            None => e.end_ts,
        });
        bucket.labels.insert(label);
    }

    // calendar fill: empty days between the first and last tracked day
    let span = match (buckets.keys().next(), buckets.keys().next_back()) {
        (Some(&first), Some(&last)) => Some((first, last)),
        _ => None,
    };
    if let Some((first, last)) = span {
        let mut d = first;
        while d < last {
            buckets.entry(d).or_default();
            d = d
                .succ_opt()
                .ok_or_else(|| AppError::InvalidDate(d.to_string()))?;
        }
    }

    let total_ms: i64 = buckets.values().map(|b| b.duration_ms).sum();
    let mut rows: Vec<AggregatedRow> = Vec::with_capacity(buckets.len() + 1);

    for (day, bucket) in buckets {
        let mut row = AggregatedRow::bare(
            day.format("%d/%m/%Y").to_string(),
            bucket.duration_ms,
            format_hh_mm(bucket.duration_ms),
        );
        row.start_time = Some(fmt_local_hm(bucket.earliest_start, tz)?);
        row.end_time = Some(fmt_local_hm(bucket.latest_end, tz)?);
        row.tasks = Some(if bucket.labels.is_empty() {
            PLACEHOLDER.to_string()
        } else {
            bucket
                .labels
                .into_iter()
                .collect::<Vec<_>>()
                .join("; ")
        });
        rows.push(row);
    }

    let mut total = super::aggregate::total_row(total_ms);
    total.start_time = Some(PLACEHOLDER.to_string());
    total.end_time = Some(PLACEHOLDER.to_string());
    total.tasks = Some(PLACEHOLDER.to_string());
    rows.push(total);

    Ok(rows)
}

#[derive(Debug)]
struct AncestorGroup {
    duration_ms: i64,
    space: String,
    folder: String,
    list: String,
    days: BTreeSet<String>,
    member_ids: BTreeSet<String>,
}

/// One row per top-level ancestor across the whole month: summed
/// duration, the sorted day-of-month list work happened on, and the names
/// of its completed leaf sub-tasks.
pub fn group_by_task(
    entries: &[TimeEntry],
    index: &TaskIndex,
    tz: Tz,
) -> AppResult<Vec<AggregatedRow>> {
    let mut groups: Vec<(String, AncestorGroup)> = Vec::new();
    let mut by_name: HashMap<String, usize> = HashMap::new();

    for e in entries {
        let name = ancestry::resolve_ancestor_name(&e.task_id, index)?;
        if name == DELETED_MARKER {
            continue;
        }
        let day = format!("{:02}", to_local(e.at_ts, tz)?.day());

        match by_name.get(&name) {
            Some(&i) => {
                let g = &mut groups[i].1;
                g.duration_ms += e.duration_ms;
                g.days.insert(day);
                g.member_ids.insert(e.task_id.clone());
            }
            None => {
                by_name.insert(name.clone(), groups.len());
                let mut days = BTreeSet::new();
                days.insert(day);
                let mut member_ids = BTreeSet::new();
                member_ids.insert(e.task_id.clone());
                groups.push((
                    name,
                    AncestorGroup {
                        duration_ms: e.duration_ms,
                        space: e.space.clone(),
                        folder: e.folder.clone(),
                        list: e.list.clone(),
                        days,
                        member_ids,
                    },
                ));
            }
        }
    }

    let total_ms: i64 = groups.iter().map(|(_, g)| g.duration_ms).sum();
    let parent_ids = index.parent_ids();

    let mut rows: Vec<AggregatedRow> = Vec::with_capacity(groups.len() + 1);
    for (name, g) in groups {
        // the ancestor's own status, looked up by name like the source does
        let status = index
            .find_by_name(&name)
            .map(|t| t.status.clone())
            .unwrap_or_else(|| PLACEHOLDER.to_string());

        let finished: BTreeSet<String> = g
            .member_ids
            .iter()
            .filter_map(|id| index.get(id))
            .filter(|t| t.is_finished() && !parent_ids.contains(t.id.as_str()) && !t.is_root())
            .map(|t| t.name.clone())
            .collect();

        let subtasks_done = if finished.is_empty() {
            PLACEHOLDER.to_string()
        } else {
            finished.into_iter().collect::<Vec<_>>().join("; ")
        };

        rows.push(AggregatedRow {
            ancestor_name: name,
            status,
            space: g.space,
            folder: g.folder,
            list: g.list,
            duration_ms: g.duration_ms,
            hours_minutes: format_hh_mm(g.duration_ms),
            start_time: None,
            end_time: None,
            tasks: None,
            days: Some(g.days.into_iter().collect::<Vec<_>>().join(", ")),
            subtasks_done: Some(subtasks_done),
        });
    }

    rows.sort_by(|a, b| {
        (
            &a.space,
            &a.folder,
            &a.list,
            &a.status,
            a.duration_ms,
            &a.ancestor_name,
        )
            .cmp(&(
                &b.space,
                &b.folder,
                &b.list,
                &b.status,
                b.duration_ms,
                &b.ancestor_name,
            ))
    });

    let mut total = super::aggregate::total_row(total_ms);
    total.days = Some(PLACEHOLDER.to_string());
    total.subtasks_done = Some(PLACEHOLDER.to_string());
    rows.push(total);

    Ok(rows)
}

fn to_local(ms: i64, tz: Tz) -> AppResult<DateTime<Tz>> {
    DateTime::from_timestamp_millis(ms)
        .map(|dt| dt.with_timezone(&tz))
        .ok_or_else(|| AppError::InvalidDate(format!("timestamp {} out of range", ms)))
}

fn fmt_local_hm(ms: Option<i64>, tz: Tz) -> AppResult<String> {
    match ms {
        Some(ms) => Ok(to_local(ms, tz)?.format("%H:%M").to_string()),
        None => Ok(PLACEHOLDER.to_string()),
    }
}
