//! Task lifecycle tests over project-scoped storage.

use super::helpers::{TestServices, add_task, create_project, services, services_with};
use chrono::NaiveDate;
use rstest::rstest;
use todolist::{
    config::TodoConfig,
    project::domain::ProjectId,
    task::{
        domain::{TaskId, TaskStatus},
        services::{AddTaskRequest, TaskServiceError},
    },
    validation::ValidationError,
};

#[rstest]
fn task_limit_applies_per_project() -> eyre::Result<()> {
    let services = services_with(TodoConfig::new(5, 2, 30, 150));
    let full = create_project(&services, "Full")?;
    let empty = create_project(&services, "Empty")?;
    add_task(&services, &full, "one")?;
    add_task(&services, &full, "two")?;

    assert!(matches!(
        services.tasks().add_task(AddTaskRequest::new(full.id(), "three")),
        Err(TaskServiceError::LimitExceeded { limit: 2, .. })
    ));
    add_task(&services, &empty, "three")?;
    Ok(())
}

#[rstest]
fn deleting_task_frees_a_slot() -> eyre::Result<()> {
    let services = services_with(TodoConfig::new(5, 1, 30, 150));
    let project = create_project(&services, "Solo")?;
    let first = add_task(&services, &project, "first")?;

    assert!(services.tasks().delete_task(first.id())?);
    let second = add_task(&services, &project, "second")?;

    assert_eq!(second.id(), TaskId::from_raw(2));
    Ok(())
}

#[rstest]
fn adding_to_missing_project_fails(services: TestServices) {
    let result = services
        .tasks()
        .add_task(AddTaskRequest::new(ProjectId::from_raw(8), "orphan"));

    assert!(matches!(
        result,
        Err(TaskServiceError::ProjectNotFound(id)) if id == ProjectId::from_raw(8)
    ));
}

#[rstest]
fn tasks_are_listed_in_creation_order(services: TestServices) -> eyre::Result<()> {
    let project = create_project(&services, "Ordered")?;
    for name in ["c", "a", "b"] {
        add_task(&services, &project, name)?;
    }

    let names: Vec<String> = services
        .tasks()
        .list_tasks_by_project(project.id())?
        .iter()
        .map(|task| task.name().to_owned())
        .collect();

    assert_eq!(names, ["c", "a", "b"]);
    Ok(())
}

#[rstest]
fn project_without_tasks_lists_empty(services: TestServices) -> eyre::Result<()> {
    let project = create_project(&services, "Idle")?;
    assert!(services.tasks().list_tasks_by_project(project.id())?.is_empty());
    Ok(())
}

#[rstest]
fn full_request_is_stored_trimmed(services: TestServices) -> eyre::Result<()> {
    let project = create_project(&services, "Release")?;
    let deadline = NaiveDate::from_ymd_opt(2024, 12, 24);

    let task = services.tasks().add_task(
        AddTaskRequest::new(project.id(), "  Tag build ")
            .with_description(" sign artefacts ")
            .with_status(TaskStatus::Doing)
            .with_deadline(deadline),
    )?;

    let stored = services.tasks().get_task(task.id())?;
    assert_eq!(stored.name(), "Tag build");
    assert_eq!(stored.description(), "sign artefacts");
    assert_eq!(stored.status(), TaskStatus::Doing);
    assert_eq!(stored.deadline(), deadline);
    Ok(())
}

#[rstest]
fn updater_edits_each_field(services: TestServices) -> eyre::Result<()> {
    let project = create_project(&services, "Edits")?;
    let task = add_task(&services, &project, "Draft")?;
    let updater = services.task_updater();
    let deadline = NaiveDate::from_ymd_opt(2025, 3, 1);

    updater.rename(task.id(), "Final")?;
    updater.edit_description(task.id(), "done properly")?;
    updater.change_status(task.id(), TaskStatus::Done)?;
    updater.edit_deadline(task.id(), deadline)?;

    let stored = services.tasks().get_task(task.id())?;
    assert_eq!(stored.name(), "Final");
    assert_eq!(stored.description(), "done properly");
    assert_eq!(stored.status(), TaskStatus::Done);
    assert_eq!(stored.deadline(), deadline);

    updater.edit_deadline(task.id(), None)?;
    assert_eq!(services.tasks().get_task(task.id())?.deadline(), None);
    Ok(())
}

#[rstest]
fn rejected_rename_keeps_task_name(services: TestServices) -> eyre::Result<()> {
    let project = create_project(&services, "Strict")?;
    let task = add_task(&services, &project, "Keep")?;

    assert!(matches!(
        services.task_updater().rename(task.id(), " "),
        Err(TaskServiceError::Validation(ValidationError::EmptyName))
    ));
    assert_eq!(services.tasks().get_task(task.id())?.name(), "Keep");
    Ok(())
}

#[rstest]
fn editing_missing_task_fails(services: TestServices) {
    assert!(matches!(
        services
            .task_updater()
            .change_status(TaskId::from_raw(3), TaskStatus::Done),
        Err(TaskServiceError::TaskNotFound(_))
    ));
}
