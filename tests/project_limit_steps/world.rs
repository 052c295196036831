//! Shared world state for project and task limit scenarios.

use std::sync::Arc;

use rstest::fixture;
use todolist::{
    cli::Services,
    config::TodoConfig,
    project::{
        adapters::memory::InMemoryProjectRepository, domain::Project,
        services::ProjectServiceError,
    },
    task::{
        adapters::memory::InMemoryTaskRepository, domain::Task, services::TaskServiceError,
    },
};

/// Services type used by the BDD world.
pub type TestServices = Services<InMemoryProjectRepository, InMemoryTaskRepository>;

/// Scenario world for limit behaviour tests.
pub struct LimitWorld {
    /// Limits applied when the services are first used.
    pub config: TodoConfig,
    /// Services under test, built lazily so `Given` steps can set limits.
    services: Option<TestServices>,
    /// Result of the last project creation attempt.
    pub last_create_result: Option<Result<Project, ProjectServiceError>>,
    /// Result of the last task creation attempt.
    pub last_add_result: Option<Result<Task, TaskServiceError>>,
    /// Most recently deleted project.
    pub deleted_project: Option<Project>,
}

impl LimitWorld {
    /// Creates a world with default limits.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: TodoConfig::default(),
            services: None,
            last_create_result: None,
            last_add_result: None,
            deleted_project: None,
        }
    }

    /// Returns the services, building them from the current limits on first
    /// use.
    pub fn services(&mut self) -> &TestServices {
        let config = self.config;
        self.services.get_or_insert_with(|| {
            Services::new(
                Arc::new(InMemoryProjectRepository::new()),
                Arc::new(InMemoryTaskRepository::new()),
                config,
            )
        })
    }

    /// Finds a live project by name.
    ///
    /// # Errors
    ///
    /// Returns an error when listing fails or no project has the name.
    pub fn project_named(&mut self, name: &str) -> Result<Project, eyre::Report> {
        self.services()
            .projects()
            .list_projects()?
            .into_iter()
            .find(|project| project.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| eyre::eyre!("no project named '{name}'"))
    }
}

impl Default for LimitWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> LimitWorld {
    LimitWorld::default()
}
