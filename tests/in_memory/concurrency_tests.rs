//! Limits hold when services are driven from several threads.

use super::helpers::{create_project, harness_with, services_with};
use std::thread;
use todolist::{
    config::TodoConfig,
    project::domain::ProjectId,
    task::{ports::TaskRepository, services::AddTaskRequest},
};

#[test]
fn parallel_creation_never_exceeds_project_limit() -> eyre::Result<()> {
    let services = services_with(TodoConfig::new(3, 10, 30, 150));

    thread::scope(|scope| {
        for worker in 0..8 {
            let shared = &services;
            scope.spawn(move || {
                for round in 0..4 {
                    let name = format!("p-{worker}-{round}");
                    // Rejections past the limit are expected here.
                    drop(shared.projects().create_project(&name, ""));
                }
            });
        }
    });

    assert_eq!(services.projects().list_projects()?.len(), 3);
    Ok(())
}

#[test]
fn parallel_adds_respect_limit_and_never_outlive_project() -> eyre::Result<()> {
    let harness = harness_with(TodoConfig::new(5, 4, 30, 150));
    let services = &harness.services;
    let project_id = create_project(services, "Busy")?.id();

    thread::scope(|scope| {
        for worker in 0..6 {
            scope.spawn(move || {
                for round in 0..3 {
                    let name = format!("t-{worker}-{round}");
                    drop(services.tasks().add_task(AddTaskRequest::new(project_id, name)));
                }
            });
        }
        scope.spawn(move || drop(services.projects().delete_project(project_id)));
    });

    let stored = harness.task_store.list_by_project(project_id)?;
    let orphans = owned_by(harness.task_store.as_ref(), project_id)?;
    assert_eq!(stored.len(), orphans);

    if services.projects().get_project(project_id).is_ok() {
        assert!(stored.len() <= 4, "task limit exceeded: {}", stored.len());
    } else {
        assert!(stored.is_empty(), "tasks outlived their project: {stored:?}");
        assert_eq!(orphans, 0);
    }
    Ok(())
}

#[test]
fn task_added_after_delete_is_rejected_and_not_stored() -> eyre::Result<()> {
    let harness = harness_with(TodoConfig::default());
    let services = &harness.services;
    let project_id = create_project(services, "Gone")?.id();
    services.tasks().add_task(AddTaskRequest::new(project_id, "early"))?;

    services.projects().delete_project(project_id)?;
    let late = services.tasks().add_task(AddTaskRequest::new(project_id, "late"));

    assert!(late.is_err());
    assert!(harness.task_store.list_by_project(project_id)?.is_empty());
    assert_eq!(owned_by(harness.task_store.as_ref(), project_id)?, 0);
    Ok(())
}

/// Counts stored tasks pointing at `project_id`, bypassing the project index.
fn owned_by(store: &impl TaskRepository, project_id: ProjectId) -> eyre::Result<usize> {
    Ok(store
        .list_all()?
        .iter()
        .filter(|task| task.project_id() == project_id)
        .count())
}
