//! In-memory project repository with a case-insensitive name index.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::project::{
    domain::{Project, ProjectId},
    ports::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult},
};

/// Thread-safe in-memory project repository.
///
/// The primary map and the name index sit behind a single lock, so every
/// reader sees them in agreement.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectRepository {
    state: Arc<RwLock<InMemoryProjectState>>,
}

#[derive(Debug, Default)]
struct InMemoryProjectState {
    projects: BTreeMap<ProjectId, Project>,
    name_index: HashMap<String, ProjectId>,
    last_id: u64,
}

impl InMemoryProjectRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> ProjectRepositoryResult<RwLockReadGuard<'_, InMemoryProjectState>> {
        self.state.read().map_err(|err| {
            ProjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> ProjectRepositoryResult<RwLockWriteGuard<'_, InMemoryProjectState>> {
        self.state.write().map_err(|err| {
            ProjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

impl InMemoryProjectState {
    /// Returns the project holding `key`, unless it is `except`.
    fn name_owner_other_than(&self, key: &str, except: ProjectId) -> Option<ProjectId> {
        self.name_index
            .get(key)
            .copied()
            .filter(|owner| *owner != except)
    }
}

impl ProjectRepository for InMemoryProjectRepository {
    fn allocate_id(&self) -> ProjectRepositoryResult<ProjectId> {
        let mut state = self.write()?;
        let next = state.last_id.checked_add(1).ok_or_else(|| {
            ProjectRepositoryError::persistence(std::io::Error::other(
                "project identifier space exhausted",
            ))
        })?;
        state.last_id = next;
        Ok(ProjectId::from_raw(next))
    }

    fn add(&self, project: &Project) -> ProjectRepositoryResult<()> {
        let mut state = self.write()?;
        if state.projects.contains_key(&project.id()) {
            return Err(ProjectRepositoryError::DuplicateId(project.id()));
        }

        let key = project.name_key();
        if state.name_index.contains_key(&key) {
            return Err(ProjectRepositoryError::DuplicateName(
                project.name().to_owned(),
            ));
        }

        state.name_index.insert(key, project.id());
        state.projects.insert(project.id(), project.clone());
        Ok(())
    }

    fn remove(&self, id: ProjectId) -> ProjectRepositoryResult<bool> {
        let mut state = self.write()?;
        let Some(removed) = state.projects.remove(&id) else {
            return Ok(false);
        };

        let key = removed.name_key();
        if state.name_index.get(&key) == Some(&id) {
            state.name_index.remove(&key);
        }
        Ok(true)
    }

    fn get_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>> {
        let state = self.read()?;
        Ok(state.projects.get(&id).cloned())
    }

    fn get_by_name(&self, name: &str) -> ProjectRepositoryResult<Option<Project>> {
        let state = self.read()?;
        let key = crate::project::domain::name_key(name);
        let project = state
            .name_index
            .get(&key)
            .and_then(|id| state.projects.get(id))
            .cloned();
        Ok(project)
    }

    fn list_all(&self) -> ProjectRepositoryResult<Vec<Project>> {
        let state = self.read()?;
        Ok(state.projects.values().cloned().collect())
    }

    fn update(&self, project: &Project) -> ProjectRepositoryResult<Project> {
        let mut state = self.write()?;

        let old_key = state
            .projects
            .get(&project.id())
            .ok_or(ProjectRepositoryError::NotFound(project.id()))?
            .name_key();
        let new_key = project.name_key();

        // Validate every change before touching either map.
        if state
            .name_owner_other_than(&new_key, project.id())
            .is_some()
        {
            return Err(ProjectRepositoryError::DuplicateName(
                project.name().to_owned(),
            ));
        }

        if old_key != new_key {
            state.name_index.remove(&old_key);
            state.name_index.insert(new_key, project.id());
        }
        state.projects.insert(project.id(), project.clone());
        Ok(project.clone())
    }

    fn count(&self) -> ProjectRepositoryResult<usize> {
        let state = self.read()?;
        Ok(state.projects.len())
    }
}
