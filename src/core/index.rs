//! In-memory snapshot of every task in the workspace.

use crate::api::TaskSource;
use crate::errors::AppResult;
use crate::models::task::Task;
use std::collections::{HashMap, HashSet};

/// Page size of the remote task listing.
pub const PAGE_SIZE: usize = 100;

/// Immutable id → task snapshot, rebuilt for every report render.
/// Nothing is cached across renders; a later report must fetch again.
#[derive(Debug, Default)]
pub struct TaskIndex {
    tasks: HashMap<String, Task>,
}

impl TaskIndex {
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks: tasks.into_iter().map(|t| (t.id.clone(), t)).collect(),
        }
    }

    /// Fetch every page of tasks from the source.
    ///
    /// Page 0 must succeed. After that, pagination ends when a page fetch
    /// fails, a page comes back empty, or the accumulated count stops
    /// being a multiple of the page size (a short page means no further
    /// full pages exist).
    pub fn fetch_all(source: &dyn TaskSource) -> AppResult<Self> {
        let mut all = source.list_tasks(0)?;

        let mut page = 0;
        while all.len() % PAGE_SIZE == 0 && !all.is_empty() {
            page += 1;
            match source.list_tasks(page) {
                Ok(batch) if !batch.is_empty() => all.extend(batch),
                // failed or empty page: end of data, not an error
                _ => break,
            }
        }

        Ok(Self::from_tasks(all))
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.tasks.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// First task carrying the given name, if any. Names are not unique;
    /// the monthly by-task view only needs a representative.
    pub fn find_by_name(&self, name: &str) -> Option<&Task> {
        self.tasks.values().find(|t| t.name == name)
    }

    /// Ids that appear as some task's parent, i.e. tasks that have
    /// sub-tasks of their own.
    pub fn parent_ids(&self) -> HashSet<&str> {
        self.tasks
            .values()
            .filter_map(|t| t.parent.as_deref())
            .collect()
    }
}
