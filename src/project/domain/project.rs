//! Project entity.

use super::ProjectId;
use crate::{
    config::TextLimits,
    validation::{ValidationError, validate_description, validate_name},
};
use serde::{Deserialize, Serialize};

/// Returns the key a project name is indexed and compared under.
///
/// Surrounding whitespace is ignored and comparison is case-insensitive.
#[must_use]
pub fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Validated project record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    name: String,
    description: String,
}

impl Project {
    /// Creates a validated project.
    ///
    /// Name and description are stored trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when the name is empty or either field
    /// exceeds its configured length.
    pub fn new(
        id: ProjectId,
        name: &str,
        description: &str,
        limits: &TextLimits,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            name: validate_name(name, limits)?,
            description: validate_description(description, limits)?,
        })
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the project description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the case-insensitive index key for this project's name.
    #[must_use]
    pub fn name_key(&self) -> String {
        name_key(&self.name)
    }

    /// Returns a copy carrying a new, validated name.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when the new name is rejected.
    pub fn renamed(&self, name: &str, limits: &TextLimits) -> Result<Self, ValidationError> {
        Self::new(self.id, name, &self.description, limits)
    }

    /// Returns a copy carrying a new, validated description.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when the new description is rejected.
    pub fn with_description(
        &self,
        description: &str,
        limits: &TextLimits,
    ) -> Result<Self, ValidationError> {
        Self::new(self.id, &self.name, description, limits)
    }
}
