//! Bounded configuration limits.
//!
//! [`TodoConfig`] carries the four integers the services consume. Values are
//! clamped to a minimum of one on every construction path, so downstream code
//! may treat them as positive.

use tracing::warn;

/// Environment key for the maximum number of projects.
pub const MAX_PROJECTS_KEY: &str = "MAX_NUMBER_OF_PROJECT";
/// Environment key for the maximum number of tasks per project.
pub const MAX_TASKS_KEY: &str = "MAX_NUMBER_OF_TASK";
/// Environment key for the maximum name length.
pub const MAX_NAME_LEN_KEY: &str = "MAX_NAME_LENGTH";
/// Environment key for the maximum description length.
pub const MAX_DESCRIPTION_LEN_KEY: &str = "MAX_DESCRIPTION_LENGTH";

const DEFAULT_MAX_PROJECTS: usize = 5;
const DEFAULT_MAX_TASKS: usize = 10;
const DEFAULT_MAX_NAME_LEN: usize = 30;
const DEFAULT_MAX_DESCRIPTION_LEN: usize = 150;

/// Length limits applied to entity names and descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextLimits {
    /// Maximum name length in characters.
    pub max_name_len: usize,
    /// Maximum description length in characters.
    pub max_description_len: usize,
}

impl Default for TextLimits {
    fn default() -> Self {
        Self {
            max_name_len: DEFAULT_MAX_NAME_LEN,
            max_description_len: DEFAULT_MAX_DESCRIPTION_LEN,
        }
    }
}

/// Capacity and text limits for the project and task services.
///
/// # Examples
///
/// ```
/// use todolist::config::TodoConfig;
///
/// let config = TodoConfig::default();
/// assert_eq!(config.max_projects(), 5);
///
/// let clamped = TodoConfig::new(0, 3, 30, 150);
/// assert_eq!(clamped.max_projects(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodoConfig {
    max_projects: usize,
    max_tasks: usize,
    text: TextLimits,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            max_projects: DEFAULT_MAX_PROJECTS,
            max_tasks: DEFAULT_MAX_TASKS,
            text: TextLimits::default(),
        }
    }
}

impl TodoConfig {
    /// Creates a configuration, clamping every limit to at least one.
    #[must_use]
    pub fn new(
        max_projects: usize,
        max_tasks: usize,
        max_name_len: usize,
        max_description_len: usize,
    ) -> Self {
        Self {
            max_projects: max_projects.max(1),
            max_tasks: max_tasks.max(1),
            text: TextLimits {
                max_name_len: max_name_len.max(1),
                max_description_len: max_description_len.max(1),
            },
        }
    }

    /// Loads limits from the process environment.
    ///
    /// A `.env` file in the working directory is read first when present;
    /// variables already set in the environment take precedence over it.
    ///
    /// | Env Var                  | Default |
    /// |--------------------------|---------|
    /// | `MAX_NUMBER_OF_PROJECT`  | `5`     |
    /// | `MAX_NUMBER_OF_TASK`     | `10`    |
    /// | `MAX_NAME_LENGTH`        | `30`    |
    /// | `MAX_DESCRIPTION_LENGTH` | `150`   |
    #[must_use]
    pub fn from_env() -> Self {
        if let Err(err) = dotenvy::dotenv()
            && !err.not_found()
        {
            warn!(error = %err, "ignoring unreadable .env file");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads limits through an arbitrary key lookup.
    ///
    /// Missing or unparsable values fall back to their defaults; parsed
    /// values below one are clamped to one.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str, fallback: usize| parse_limit(key, lookup(key), fallback);
        Self::new(
            read(MAX_PROJECTS_KEY, DEFAULT_MAX_PROJECTS),
            read(MAX_TASKS_KEY, DEFAULT_MAX_TASKS),
            read(MAX_NAME_LEN_KEY, DEFAULT_MAX_NAME_LEN),
            read(MAX_DESCRIPTION_LEN_KEY, DEFAULT_MAX_DESCRIPTION_LEN),
        )
    }

    /// Returns the maximum number of live projects.
    #[must_use]
    pub const fn max_projects(&self) -> usize {
        self.max_projects
    }

    /// Returns the maximum number of tasks a single project may hold.
    #[must_use]
    pub const fn max_tasks(&self) -> usize {
        self.max_tasks
    }

    /// Returns the name and description length limits.
    #[must_use]
    pub const fn text_limits(&self) -> TextLimits {
        self.text
    }
}

/// Parses a signed integer so that negative values clamp instead of falling
/// back to the default.
fn parse_limit(key: &str, raw: Option<String>, fallback: usize) -> usize {
    let Some(value) = raw else {
        return fallback;
    };
    match value.trim().parse::<i64>() {
        Ok(parsed) => usize::try_from(parsed.max(1)).unwrap_or(fallback),
        Err(err) => {
            warn!(key, value = %value, error = %err, fallback, "invalid limit, using default");
            fallback
        }
    }
}
