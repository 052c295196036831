//! In-memory task repository indexed by owning project.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{
    project::domain::ProjectId,
    task::{
        domain::{Task, TaskId},
        ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
    },
};

/// Thread-safe in-memory task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: BTreeMap<TaskId, Task>,
    project_index: HashMap<ProjectId, Vec<TaskId>>,
    last_id: u64,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, InMemoryTaskState>> {
        self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TaskRepositoryResult<RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

/// Appends a task ID to a project's index entry unless already present.
fn index_task(index: &mut HashMap<ProjectId, Vec<TaskId>>, project_id: ProjectId, task_id: TaskId) {
    let ids = index.entry(project_id).or_default();
    if !ids.contains(&task_id) {
        ids.push(task_id);
    }
}

/// Removes a task ID from a project's index entry, cleaning up the entry if
/// empty.
fn unindex_task(
    index: &mut HashMap<ProjectId, Vec<TaskId>>,
    project_id: ProjectId,
    task_id: TaskId,
) {
    if let Some(ids) = index.get_mut(&project_id) {
        ids.retain(|id| *id != task_id);
        if ids.is_empty() {
            index.remove(&project_id);
        }
    }
}

impl TaskRepository for InMemoryTaskRepository {
    fn allocate_id(&self) -> TaskRepositoryResult<TaskId> {
        let mut state = self.write()?;
        let next = state.last_id.checked_add(1).ok_or_else(|| {
            TaskRepositoryError::persistence(std::io::Error::other(
                "task identifier space exhausted",
            ))
        })?;
        state.last_id = next;
        Ok(TaskId::from_raw(next))
    }

    fn add(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        if state.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateId(task.id()));
        }

        index_task(&mut state.project_index, task.project_id(), task.id());
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    fn remove(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        let mut state = self.write()?;
        let Some(removed) = state.tasks.remove(&id) else {
            return Ok(false);
        };
        unindex_task(&mut state.project_index, removed.project_id(), id);
        Ok(true)
    }

    fn get_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.read()?;
        Ok(state.tasks.get(&id).cloned())
    }

    fn list_by_project(&self, project_id: ProjectId) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.read()?;
        let tasks = state
            .project_index
            .get(&project_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| state.tasks.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default();
        Ok(tasks)
    }

    fn remove_by_project(&self, project_id: ProjectId) -> TaskRepositoryResult<usize> {
        let mut state = self.write()?;
        let Some(ids) = state.project_index.remove(&project_id) else {
            return Ok(0);
        };
        let removed = ids
            .iter()
            .filter(|id| state.tasks.remove(*id).is_some())
            .count();
        Ok(removed)
    }

    fn update(&self, task: &Task) -> TaskRepositoryResult<Task> {
        let mut state = self.write()?;

        let old_project = state
            .tasks
            .get(&task.id())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?
            .project_id();

        if old_project != task.project_id() {
            unindex_task(&mut state.project_index, old_project, task.id());
            index_task(&mut state.project_index, task.project_id(), task.id());
        }
        state.tasks.insert(task.id(), task.clone());
        Ok(task.clone())
    }

    fn list_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.read()?;
        Ok(state.tasks.values().cloned().collect())
    }

    fn count_by_project(&self, project_id: ProjectId) -> TaskRepositoryResult<usize> {
        let state = self.read()?;
        Ok(state.project_index.get(&project_id).map_or(0, Vec::len))
    }
}
