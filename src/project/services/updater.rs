//! Single-field edits for stored projects.

use super::{ProjectServiceError, ProjectServiceResult};
use crate::{
    config::TextLimits,
    project::{
        domain::{Project, ProjectId},
        ports::ProjectRepository,
    },
};
use std::sync::Arc;
use tracing::info;

/// Applies validated name and description edits to stored projects.
#[derive(Clone)]
pub struct ProjectUpdater<P>
where
    P: ProjectRepository,
{
    projects: Arc<P>,
    limits: TextLimits,
}

impl<P> ProjectUpdater<P>
where
    P: ProjectRepository,
{
    /// Creates a new project updater.
    #[must_use]
    pub const fn new(projects: Arc<P>, limits: TextLimits) -> Self {
        Self { projects, limits }
    }

    /// Renames a project.
    ///
    /// Renaming a project to its current name, in any case, succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::NotFound`] when the project does not
    /// exist, [`ProjectServiceError::Validation`] when the name is rejected,
    /// or [`ProjectServiceError::DuplicateName`] when another project already
    /// uses the name.
    pub fn rename(&self, id: ProjectId, name: &str) -> ProjectServiceResult<Project> {
        let project = self.find_or_not_found(id)?;
        let renamed = project.renamed(name, &self.limits)?;

        if let Some(owner) = self.projects.get_by_name(renamed.name())?
            && owner.id() != id
        {
            return Err(ProjectServiceError::DuplicateName(
                renamed.name().to_owned(),
            ));
        }

        let updated = self.projects.update(&renamed)?;
        info!(project_id = %id, name = updated.name(), "project renamed");
        Ok(updated)
    }

    /// Replaces a project's description.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::NotFound`] when the project does not
    /// exist or [`ProjectServiceError::Validation`] when the description is
    /// rejected.
    pub fn edit_description(
        &self,
        id: ProjectId,
        description: &str,
    ) -> ProjectServiceResult<Project> {
        let project = self.find_or_not_found(id)?;
        let edited = project.with_description(description, &self.limits)?;
        let updated = self.projects.update(&edited)?;
        info!(project_id = %id, "project description updated");
        Ok(updated)
    }

    fn find_or_not_found(&self, id: ProjectId) -> ProjectServiceResult<Project> {
        self.projects
            .get_by_id(id)?
            .ok_or(ProjectServiceError::NotFound(id))
    }
}
