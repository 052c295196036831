//! Interactive menu loop.

use super::{MenuError, Services};
use crate::{
    project::{domain::ProjectId, ports::ProjectRepository},
    task::{
        domain::{TaskId, TaskStatus, parse_deadline},
        ports::TaskRepository,
        services::AddTaskRequest,
    },
};
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use tracing::debug;

const MAIN_MENU: &[(&str, &str)] = &[
    ("1", "Create project"),
    ("2", "Edit project"),
    ("3", "Delete project"),
    ("4", "List projects"),
    ("5", "Add task"),
    ("6", "Edit task"),
    ("7", "Delete task"),
    ("8", "List tasks by project"),
    ("0", "Exit"),
];

const PROJECT_EDIT_MENU: &[(&str, &str)] = &[
    ("1", "Edit name"),
    ("2", "Edit description"),
    ("0", "Back"),
];

const TASK_EDIT_MENU: &[(&str, &str)] = &[
    ("1", "Edit name"),
    ("2", "Edit description"),
    ("3", "Edit status [todo|doing|done]"),
    ("4", "Edit deadline (YYYY-MM-DD)"),
    ("0", "Back"),
];

/// Outcome of one pass through a menu loop.
enum Step {
    Continue,
    Leave,
}

/// Line-oriented menu reading from `I` and writing to `O`.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use todolist::cli::{Menu, Services};
/// use todolist::config::TodoConfig;
/// use todolist::project::adapters::memory::InMemoryProjectRepository;
/// use todolist::task::adapters::memory::InMemoryTaskRepository;
///
/// let services = Services::new(
///     Arc::new(InMemoryProjectRepository::new()),
///     Arc::new(InMemoryTaskRepository::new()),
///     TodoConfig::default(),
/// );
/// let input = b"1\nAlpha\n\n4\n0\n";
/// let mut output = Vec::new();
/// Menu::new(&services, &input[..], &mut output).run().expect("menu runs");
///
/// let text = String::from_utf8(output).expect("utf-8 output");
/// assert!(text.contains("Created project #1."));
/// assert!(text.contains("- #1 Alpha"));
/// ```
pub struct Menu<'a, P, T, I, O>
where
    P: ProjectRepository,
    T: TaskRepository,
    I: BufRead,
    O: Write,
{
    services: &'a Services<P, T>,
    input: I,
    output: O,
}

impl<'a, P, T, I, O> Menu<'a, P, T, I, O>
where
    P: ProjectRepository,
    T: TaskRepository,
    I: BufRead,
    O: Write,
{
    /// Creates a menu over the given services and streams.
    pub const fn new(services: &'a Services<P, T>, input: I, output: O) -> Self {
        Self {
            services,
            input,
            output,
        }
    }

    /// Runs the main menu until the user exits or input ends.
    ///
    /// # Errors
    ///
    /// Returns an [`io::Error`] when reading input or writing output fails.
    /// Service errors are printed and never end the loop.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.show(MAIN_MENU)?;
            let step = self
                .read_choice()
                .and_then(|choice| self.dispatch_main(&choice));
            match self.settle(step)? {
                Step::Continue => {}
                Step::Leave => return Ok(()),
            }
        }
    }

    /// Prints recoverable errors and converts fatal ones.
    fn settle(&mut self, step: Result<Step, MenuError>) -> io::Result<Step> {
        match step {
            Ok(next) => Ok(next),
            Err(MenuError::Io(err)) => Err(err),
            Err(MenuError::EndOfInput) => Ok(Step::Leave),
            Err(err) => {
                debug!(error = %err, "menu action failed");
                writeln!(self.output, "Error: {err}")?;
                Ok(Step::Continue)
            }
        }
    }

    fn dispatch_main(&mut self, choice: &str) -> Result<Step, MenuError> {
        match choice {
            "0" => {
                writeln!(self.output, "Goodbye!")?;
                return Ok(Step::Leave);
            }
            "1" => self.create_project()?,
            "2" => self.edit_project_menu()?,
            "3" => self.delete_project()?,
            "4" => self.list_projects()?,
            "5" => self.add_task()?,
            "6" => self.edit_task_menu()?,
            "7" => self.delete_task()?,
            "8" => self.list_tasks()?,
            _ => writeln!(self.output, "Invalid choice.")?,
        }
        Ok(Step::Continue)
    }

    fn edit_project_menu(&mut self) -> Result<(), MenuError> {
        loop {
            writeln!(self.output, "Edit project:")?;
            self.show(PROJECT_EDIT_MENU)?;
            let step = self.read_choice().and_then(|choice| match choice.as_str() {
                "0" => Ok(Step::Leave),
                "1" => self.edit_project_name().map(|()| Step::Continue),
                "2" => self.edit_project_description().map(|()| Step::Continue),
                _ => {
                    writeln!(self.output, "Invalid choice.")?;
                    Ok(Step::Continue)
                }
            });
            if let Step::Leave = self.settle_nested(step)? {
                return Ok(());
            }
        }
    }

    fn edit_task_menu(&mut self) -> Result<(), MenuError> {
        loop {
            writeln!(self.output, "Edit task:")?;
            self.show(TASK_EDIT_MENU)?;
            let step = self.read_choice().and_then(|choice| match choice.as_str() {
                "0" => Ok(Step::Leave),
                "1" => self.edit_task_name().map(|()| Step::Continue),
                "2" => self.edit_task_description().map(|()| Step::Continue),
                "3" => self.change_task_status().map(|()| Step::Continue),
                "4" => self.edit_task_deadline().map(|()| Step::Continue),
                _ => {
                    writeln!(self.output, "Invalid choice.")?;
                    Ok(Step::Continue)
                }
            });
            if let Step::Leave = self.settle_nested(step)? {
                return Ok(());
            }
        }
    }

    /// Like [`Self::settle`], but keeps fatal errors fatal for the outer loop.
    fn settle_nested(&mut self, step: Result<Step, MenuError>) -> Result<Step, MenuError> {
        match step {
            Err(err) if err.is_fatal() => Err(err),
            other => Ok(self.settle(other)?),
        }
    }

    // ── Project actions ────────────────────────────────────────────

    fn create_project(&mut self) -> Result<(), MenuError> {
        let name = self.prompt("Project name: ")?;
        let description = self.prompt("Project description: ")?;
        let project = self.services.projects().create_project(&name, &description)?;
        writeln!(self.output, "Created project #{}.", project.id())?;
        Ok(())
    }

    fn edit_project_name(&mut self) -> Result<(), MenuError> {
        let id: ProjectId = self.prompt_id("Project id: ")?;
        let name = self.prompt("New name: ")?;
        let project = self.services.project_updater().rename(id, &name)?;
        writeln!(self.output, "Updated project #{}.", project.id())?;
        Ok(())
    }

    fn edit_project_description(&mut self) -> Result<(), MenuError> {
        let id: ProjectId = self.prompt_id("Project id: ")?;
        let description = self.prompt("New description: ")?;
        let project = self
            .services
            .project_updater()
            .edit_description(id, &description)?;
        writeln!(self.output, "Updated project #{}.", project.id())?;
        Ok(())
    }

    fn delete_project(&mut self) -> Result<(), MenuError> {
        let id: ProjectId = self.prompt_id("Project id: ")?;
        if self.services.projects().delete_project(id)? {
            writeln!(self.output, "Deleted.")?;
        } else {
            writeln!(self.output, "Project not found.")?;
        }
        Ok(())
    }

    fn list_projects(&mut self) -> Result<(), MenuError> {
        let projects = self.services.projects().list_projects()?;
        if projects.is_empty() {
            writeln!(self.output, "No projects found.")?;
            return Ok(());
        }
        writeln!(self.output, "Projects:")?;
        for project in &projects {
            writeln!(
                self.output,
                "- #{} {}: {}",
                project.id(),
                project.name(),
                project.description()
            )?;
        }
        Ok(())
    }

    // ── Task actions ───────────────────────────────────────────────

    fn add_task(&mut self) -> Result<(), MenuError> {
        let project_id: ProjectId = self.prompt_id("Project id: ")?;
        let name = self.prompt("Task name: ")?;
        let description = self.prompt("Task description: ")?;
        let status_raw = self.prompt("Status [todo|doing|done] (default todo): ")?;
        let status = if status_raw.trim().is_empty() {
            TaskStatus::default()
        } else {
            TaskStatus::try_from(status_raw.as_str())?
        };
        let deadline = parse_deadline(&self.prompt("Deadline (YYYY-MM-DD, optional): ")?)?;

        let task = self.services.tasks().add_task(
            AddTaskRequest::new(project_id, name)
                .with_description(description)
                .with_status(status)
                .with_deadline(deadline),
        )?;
        writeln!(self.output, "Created task #{}.", task.id())?;
        Ok(())
    }

    fn edit_task_name(&mut self) -> Result<(), MenuError> {
        let id: TaskId = self.prompt_id("Task id: ")?;
        let name = self.prompt("New name: ")?;
        let task = self.services.task_updater().rename(id, &name)?;
        writeln!(self.output, "Updated task #{}.", task.id())?;
        Ok(())
    }

    fn edit_task_description(&mut self) -> Result<(), MenuError> {
        let id: TaskId = self.prompt_id("Task id: ")?;
        let description = self.prompt("New description: ")?;
        let task = self
            .services
            .task_updater()
            .edit_description(id, &description)?;
        writeln!(self.output, "Updated task #{}.", task.id())?;
        Ok(())
    }

    fn change_task_status(&mut self) -> Result<(), MenuError> {
        let id: TaskId = self.prompt_id("Task id: ")?;
        let status = TaskStatus::try_from(self.prompt("New status [todo|doing|done]: ")?.as_str())?;
        let task = self.services.task_updater().change_status(id, status)?;
        writeln!(self.output, "Updated task #{}.", task.id())?;
        Ok(())
    }

    fn edit_task_deadline(&mut self) -> Result<(), MenuError> {
        let id: TaskId = self.prompt_id("Task id: ")?;
        let deadline = parse_deadline(&self.prompt("New deadline YYYY-MM-DD (empty clears): ")?)?;
        let task = self.services.task_updater().edit_deadline(id, deadline)?;
        writeln!(self.output, "Updated task #{}.", task.id())?;
        Ok(())
    }

    fn delete_task(&mut self) -> Result<(), MenuError> {
        let id: TaskId = self.prompt_id("Task id: ")?;
        if self.services.tasks().delete_task(id)? {
            writeln!(self.output, "Deleted.")?;
        } else {
            writeln!(self.output, "Task not found.")?;
        }
        Ok(())
    }

    fn list_tasks(&mut self) -> Result<(), MenuError> {
        let project_id: ProjectId = self.prompt_id("Project id: ")?;
        let tasks = self.services.tasks().list_tasks_by_project(project_id)?;
        if tasks.is_empty() {
            writeln!(self.output, "No tasks found.")?;
            return Ok(());
        }
        writeln!(self.output, "Tasks:")?;
        for task in &tasks {
            let deadline = task
                .deadline()
                .map_or_else(|| "-".to_owned(), |date| date.format("%Y-%m-%d").to_string());
            writeln!(
                self.output,
                "- #{} {} [{}] due {}",
                task.id(),
                task.name(),
                task.status(),
                deadline
            )?;
        }
        Ok(())
    }

    // ── I/O helpers ────────────────────────────────────────────────

    fn show(&mut self, entries: &[(&str, &str)]) -> io::Result<()> {
        writeln!(self.output, "\nChoose an action:")?;
        for (key, label) in entries {
            writeln!(self.output, "  {key}. {label}")?;
        }
        Ok(())
    }

    fn read_choice(&mut self) -> Result<String, MenuError> {
        Ok(self.prompt("> ")?.trim().to_owned())
    }

    /// Writes `label` and reads one line without its line terminator.
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD.
    fn prompt(&mut self, label: &str) -> Result<String, MenuError> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Err(MenuError::EndOfInput);
        }
        let line = String::from_utf8_lossy(&raw);
        Ok(line.trim_end_matches(['\r', '\n']).to_owned())
    }

    fn prompt_id<Id: FromStr>(&mut self, label: &str) -> Result<Id, MenuError> {
        let raw = self.prompt(label)?;
        raw.trim()
            .parse()
            .map_err(|_| MenuError::InvalidId(raw.trim().to_owned()))
    }
}
