//! Project lifecycle tests across both repositories.

use super::helpers::{TestServices, add_task, create_project, services, services_with};
use rstest::rstest;
use todolist::{
    config::TodoConfig,
    project::{domain::ProjectId, services::ProjectServiceError},
    task::services::TaskServiceError,
};

#[rstest]
fn single_project_limit_frees_slot_after_delete() -> eyre::Result<()> {
    let services = services_with(TodoConfig::new(1, 10, 30, 150));
    let only = create_project(&services, "Only")?;

    assert!(matches!(
        services.projects().create_project("Second", ""),
        Err(ProjectServiceError::LimitExceeded { limit: 1 })
    ));

    assert!(services.projects().delete_project(only.id())?);
    let second = create_project(&services, "Second")?;
    assert_eq!(second.id(), ProjectId::from_raw(2));
    Ok(())
}

#[rstest]
fn deleting_project_drops_only_its_tasks(services: TestServices) -> eyre::Result<()> {
    let home = create_project(&services, "Home")?;
    let work = create_project(&services, "Work")?;
    add_task(&services, &home, "Dishes")?;
    add_task(&services, &home, "Laundry")?;
    let report = add_task(&services, &work, "Report")?;

    services.projects().delete_project(home.id())?;

    assert!(matches!(
        services.tasks().list_tasks_by_project(home.id()),
        Err(TaskServiceError::ProjectNotFound(_))
    ));
    assert_eq!(services.tasks().list_tasks_by_project(work.id())?, vec![report]);
    Ok(())
}

#[rstest]
fn deleted_name_can_be_reused_in_other_case(services: TestServices) -> eyre::Result<()> {
    let first = create_project(&services, "Garden")?;
    services.projects().delete_project(first.id())?;

    let reborn = create_project(&services, "GARDEN")?;

    assert_eq!(reborn.name(), "GARDEN");
    assert_ne!(reborn.id(), first.id());
    Ok(())
}

#[rstest]
fn rename_frees_old_name_and_claims_new_one(services: TestServices) -> eyre::Result<()> {
    let project = create_project(&services, "Draft")?;
    services.project_updater().rename(project.id(), "Final")?;

    create_project(&services, "draft")?;
    assert!(matches!(
        services.projects().create_project("FINAL", ""),
        Err(ProjectServiceError::DuplicateName(_))
    ));
    Ok(())
}

#[rstest]
fn rename_onto_another_project_is_rejected(services: TestServices) -> eyre::Result<()> {
    let alpha = create_project(&services, "Alpha")?;
    create_project(&services, "Beta")?;

    let result = services.project_updater().rename(alpha.id(), "beta");

    assert!(matches!(result, Err(ProjectServiceError::DuplicateName(_))));
    assert_eq!(services.projects().get_project(alpha.id())?.name(), "Alpha");
    Ok(())
}

#[rstest]
fn overlong_description_leaves_project_unchanged(services: TestServices) -> eyre::Result<()> {
    let project = services.projects().create_project("Notes", "short")?;
    let long = "x".repeat(151);

    assert!(matches!(
        services.project_updater().edit_description(project.id(), &long),
        Err(ProjectServiceError::Validation(_))
    ));
    assert_eq!(
        services.projects().get_project(project.id())?.description(),
        "short"
    );
    Ok(())
}
