mod common;
use common::{TZ, entry, ms, task, task_with_status};

use cureport::core::index::TaskIndex;
use cureport::core::monthly::{group_by_task, resample_by_day};
use cureport::models::report::TOTAL_LABEL;

fn index() -> TaskIndex {
    TaskIndex::from_tasks(vec![
        task("root1", "Research", None),
        task_with_status("sub1", "Reading", Some("root1"), "done"),
        task_with_status("sub2", "Writing", Some("root1"), "in progress"),
        task("root2", "Admin", None),
    ])
}

#[test]
fn test_resample_no_duplicate_days_and_total_matches() {
    let entries = vec![
        entry("sub1", "Reading", 3_600_000, ms(2024, 2, 3, 10, 0), "Work"),
        entry("sub1", "Reading", 1_800_000, ms(2024, 2, 3, 16, 0), "Work"),
        entry("root2", "Admin", 600_000, ms(2024, 2, 5, 9, 0), "Work"),
    ];
    let rows = resample_by_day(&entries, &index(), TZ).unwrap();

    let day_labels: Vec<&str> = rows[..rows.len() - 1]
        .iter()
        .map(|r| r.ancestor_name.as_str())
        .collect();
    // 03..05 inclusive, the empty 4th filled in, each day once
    assert_eq!(day_labels, vec!["03/02/2024", "04/02/2024", "05/02/2024"]);

    let total = rows.last().unwrap();
    assert!(total.is_total());
    assert_eq!(total.duration_ms, 6_000_000);
    let daily_sum: i64 = rows[..rows.len() - 1].iter().map(|r| r.duration_ms).sum();
    assert_eq!(total.duration_ms, daily_sum);
}

#[test]
fn test_resample_day_columns() {
    let entries = vec![
        entry("sub1", "Reading", 3_600_000, ms(2024, 2, 3, 10, 0), "Work"),
        entry("root2", "Admin", 1_800_000, ms(2024, 2, 3, 16, 0), "Work"),
    ];
    let rows = resample_by_day(&entries, &index(), TZ).unwrap();

    let day = &rows[0];
    assert_eq!(day.ancestor_name, "03/02/2024");
    // earliest tracked start (09:00-10:00 entry), latest tracked end
    assert_eq!(day.start_time.as_deref(), Some("09:00"));
    assert_eq!(day.end_time.as_deref(), Some("16:00"));
    assert_eq!(
        day.tasks.as_deref(),
        Some("Admin (Work); Research (Work)")
    );
}

#[test]
fn test_resample_labels_are_deduplicated() {
    let entries = vec![
        entry("sub1", "Reading", 600_000, ms(2024, 2, 3, 10, 0), "Work"),
        entry("sub2", "Writing", 600_000, ms(2024, 2, 3, 11, 0), "Work"),
    ];
    let rows = resample_by_day(&entries, &index(), TZ).unwrap();
    // both entries resolve to "Research (Work)", listed once
    assert_eq!(rows[0].tasks.as_deref(), Some("Research (Work)"));
}

#[test]
fn test_resample_gap_day_is_placeholder_row() {
    let entries = vec![
        entry("root2", "Admin", 600_000, ms(2024, 2, 3, 10, 0), "Work"),
        entry("root2", "Admin", 600_000, ms(2024, 2, 5, 10, 0), "Work"),
    ];
    let rows = resample_by_day(&entries, &index(), TZ).unwrap();

    let gap = &rows[1];
    assert_eq!(gap.ancestor_name, "04/02/2024");
    assert_eq!(gap.duration_ms, 0);
    assert_eq!(gap.start_time.as_deref(), Some("-"));
    assert_eq!(gap.end_time.as_deref(), Some("-"));
    assert_eq!(gap.tasks.as_deref(), Some("-"));
}

#[test]
fn test_resample_drops_deleted_tasks() {
    let entries = vec![
        entry("ghost", "Gone", 3_600_000, ms(2024, 2, 3, 10, 0), "Work"),
        entry("root2", "Admin", 600_000, ms(2024, 2, 4, 10, 0), "Work"),
    ];
    let rows = resample_by_day(&entries, &index(), TZ).unwrap();

    // the deleted entry contributes neither a day nor duration
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].ancestor_name, "04/02/2024");
    assert_eq!(rows.last().unwrap().duration_ms, 600_000);
}

#[test]
fn test_group_by_task_days_and_duration() {
    let entries = vec![
        entry("sub1", "Reading", 3_600_000, ms(2024, 2, 3, 10, 0), "Work"),
        entry("sub2", "Writing", 1_800_000, ms(2024, 2, 7, 10, 0), "Work"),
        entry("root2", "Admin", 600_000, ms(2024, 2, 5, 9, 0), "Work"),
    ];
    let rows = group_by_task(&entries, &index(), TZ).unwrap();

    assert_eq!(rows.len(), 3);
    let research = rows
        .iter()
        .find(|r| r.ancestor_name == "Research")
        .unwrap();
    assert_eq!(research.duration_ms, 5_400_000);
    assert_eq!(research.days.as_deref(), Some("03, 07"));

    let total = rows.last().unwrap();
    assert_eq!(total.ancestor_name, TOTAL_LABEL);
    assert_eq!(total.duration_ms, 6_000_000);
}

#[test]
fn test_group_by_task_finished_subtasks() {
    let entries = vec![
        entry("sub1", "Reading", 3_600_000, ms(2024, 2, 3, 10, 0), "Work"),
        entry("sub2", "Writing", 1_800_000, ms(2024, 2, 7, 10, 0), "Work"),
    ];
    let rows = group_by_task(&entries, &index(), TZ).unwrap();

    let research = &rows[0];
    // sub1 is done; sub2 is still in progress
    assert_eq!(research.subtasks_done.as_deref(), Some("Reading"));
}

#[test]
fn test_group_by_task_roots_are_not_their_own_finished_subtask() {
    let index = TaskIndex::from_tasks(vec![task_with_status("root2", "Admin", None, "done")]);
    let entries = vec![entry("root2", "Admin", 600_000, ms(2024, 2, 5, 9, 0), "Work")];
    let rows = group_by_task(&entries, &index, TZ).unwrap();

    // a finished root has no parent, so it never lists itself
    assert_eq!(rows[0].subtasks_done.as_deref(), Some("-"));
}

#[test]
fn test_group_by_task_status_comes_from_ancestor() {
    let index = TaskIndex::from_tasks(vec![
        task_with_status("root1", "Research", None, "active"),
        task("sub1", "Reading", Some("root1")),
    ]);
    let entries = vec![entry("sub1", "Reading", 600_000, ms(2024, 2, 3, 9, 0), "Work")];
    let rows = group_by_task(&entries, &index, TZ).unwrap();
    assert_eq!(rows[0].status, "active");
}

#[test]
fn test_group_by_task_sorted_by_location_status_duration() {
    let index = TaskIndex::from_tasks(vec![
        task_with_status("a", "Alpha", None, "open"),
        task_with_status("b", "Beta", None, "open"),
    ]);
    let entries = vec![
        entry("b", "Beta", 3_600_000, ms(2024, 2, 3, 9, 0), "Work"),
        entry("a", "Alpha", 600_000, ms(2024, 2, 3, 11, 0), "Work"),
    ];
    let rows = group_by_task(&entries, &index, TZ).unwrap();

    // same location and status: shorter duration first
    assert_eq!(rows[0].ancestor_name, "Alpha");
    assert_eq!(rows[1].ancestor_name, "Beta");
}
