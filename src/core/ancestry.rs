//! Parent-chain resolution over one task index snapshot.
//!
//! Missing tasks are data, not errors: a parent pointing at a task absent
//! from the snapshot ends the chain, and an entry whose own task is gone
//! resolves to the `"deleted"` marker. The only fatal condition is a chain
//! longer than the index itself, which no acyclic forest can produce.

use crate::core::index::TaskIndex;
use crate::errors::{AppError, AppResult};

/// Name returned for entries whose own task no longer exists.
pub const DELETED_MARKER: &str = "deleted";

/// The parent id recorded for `task_id`, or `None` when the task is absent
/// from the index (deleted) or is a true root. A lookup failure, not an
/// error.
pub fn resolve_parent<'a>(task_id: &str, index: &'a TaskIndex) -> Option<&'a str> {
    index.get(task_id).and_then(|t| t.parent.as_deref())
}

/// Walk the parent chain of `task_id` up to its top-level ancestor.
///
/// The walk follows parent pointers while the parent still resolves to a
/// task present in the index, and answers with the last still-present
/// task: the task itself when it has no parent (or is itself absent), the
/// true root when the whole chain exists, or the deepest surviving
/// ancestor when the chain is cut by a deletion.
///
/// Parent pointers are assumed acyclic; a visited chain longer than the
/// index means a loop and aborts with [`AppError::HierarchyLoop`].
pub fn resolve_top_ancestor(task_id: &str, index: &TaskIndex) -> AppResult<String> {
    let mut visited: Vec<&str> = vec![task_id];

    loop {
        let current = visited[visited.len() - 1];
        match resolve_parent(current, index) {
            Some(parent) if index.contains(parent) => visited.push(parent),
            _ => break,
        }

        if visited.len() > index.len() {
            return Err(AppError::HierarchyLoop(format!(
                "parent chain of task {} exceeds {} tasks",
                task_id,
                index.len()
            )));
        }
    }

    Ok(visited[visited.len() - 1].to_string())
}

/// Name of the top-level ancestor of `task_id`, or [`DELETED_MARKER`] when
/// `task_id` itself is absent from the index. The existence check is on
/// the queried task, not on the resolved ancestor.
pub fn resolve_ancestor_name(task_id: &str, index: &TaskIndex) -> AppResult<String> {
    if !index.contains(task_id) {
        return Ok(DELETED_MARKER.to_string());
    }
    let ancestor = resolve_top_ancestor(task_id, index)?;
    match index.get(&ancestor) {
        Some(task) => Ok(task.name.clone()),
        None => Ok(DELETED_MARKER.to_string()),
    }
}
