//! When steps for project and task limit scenarios.

use super::world::LimitWorld;
use eyre::WrapErr;
use rstest_bdd_macros::when;
use todolist::task::services::AddTaskRequest;

#[when(r#"I create a project named "{name}""#)]
fn create_project(world: &mut LimitWorld, name: String) {
    let result = world.services().projects().create_project(&name, "");
    world.last_create_result = Some(result);
}

#[when(r#"I delete the project named "{name}""#)]
fn delete_project(world: &mut LimitWorld, name: String) -> Result<(), eyre::Report> {
    let project = world.project_named(&name)?;
    let deleted = world
        .services()
        .projects()
        .delete_project(project.id())
        .wrap_err("delete project for scenario")?;
    if !deleted {
        return Err(eyre::eyre!("project '{name}' was not deleted"));
    }
    world.deleted_project = Some(project);
    Ok(())
}

#[when(r#"I add a task named "{task}" to "{project}""#)]
fn add_task(world: &mut LimitWorld, task: String, project: String) -> Result<(), eyre::Report> {
    let owner = world.project_named(&project)?;
    let result = world
        .services()
        .tasks()
        .add_task(AddTaskRequest::new(owner.id(), task));
    world.last_add_result = Some(result);
    Ok(())
}
