//! Then steps for project and task limit scenarios.

use super::world::LimitWorld;
use rstest_bdd_macros::then;
use todolist::{project::services::ProjectServiceError, task::services::TaskServiceError};

#[then("creation fails because the project limit was reached")]
fn creation_hits_project_limit(world: &LimitWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_create_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing creation result in scenario world"))?;
    if !matches!(result, Err(ProjectServiceError::LimitExceeded { .. })) {
        return Err(eyre::eyre!("expected project limit error, got {result:?}"));
    }
    Ok(())
}

#[then("creation fails with a duplicate name error")]
fn creation_hits_duplicate_name(world: &LimitWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_create_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing creation result in scenario world"))?;
    if !matches!(result, Err(ProjectServiceError::DuplicateName(_))) {
        return Err(eyre::eyre!("expected duplicate name error, got {result:?}"));
    }
    Ok(())
}

#[then(r#"the project list contains exactly "{name}""#)]
fn project_list_is(world: &mut LimitWorld, name: String) -> Result<(), eyre::Report> {
    let names: Vec<String> = world
        .services()
        .projects()
        .list_projects()?
        .iter()
        .map(|project| project.name().to_owned())
        .collect();
    if names != [name.as_str()] {
        return Err(eyre::eyre!("expected only '{name}', found {names:?}"));
    }
    Ok(())
}

#[then("listing tasks for the deleted project fails with project not found")]
fn deleted_project_has_no_tasks(world: &mut LimitWorld) -> Result<(), eyre::Report> {
    let project = world
        .deleted_project
        .clone()
        .ok_or_else(|| eyre::eyre!("no project was deleted in this scenario"))?;
    let result = world.services().tasks().list_tasks_by_project(project.id());
    if !matches!(result, Err(TaskServiceError::ProjectNotFound(_))) {
        return Err(eyre::eyre!("expected project not found, got {result:?}"));
    }
    Ok(())
}

#[then("adding the task fails because the task limit was reached")]
fn add_hits_task_limit(world: &LimitWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_add_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing add result in scenario world"))?;
    if !matches!(result, Err(TaskServiceError::LimitExceeded { .. })) {
        return Err(eyre::eyre!("expected task limit error, got {result:?}"));
    }
    Ok(())
}
