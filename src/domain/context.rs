//! The persisted (project, shot, role) triple.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// The user's last recorded working focus.
///
/// Empty strings mean "unset". Values are recorded as intent and are never
/// checked against the filesystem when written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrentContext {
    pub project: String,
    pub shot: String,
    pub role: String,
}

/// Fields to change in a partial update; `None` and empty values leave the
/// stored field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextUpdate {
    pub project: Option<String>,
    pub shot: Option<String>,
    pub role: Option<String>,
}

impl CurrentContext {
    pub fn new(
        project: impl Into<String>,
        shot: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self { project: project.into(), shot: shot.into(), role: role.into() }
    }

    /// Partial update: only non-empty supplied fields change.
    pub fn set(&mut self, update: ContextUpdate) {
        fn apply(slot: &mut String, value: Option<String>) {
            if let Some(value) = value.filter(|v| !v.is_empty()) {
                *slot = value;
            }
        }
        apply(&mut self.project, update.project);
        apply(&mut self.shot, update.shot);
        apply(&mut self.role, update.role);
    }

    /// Full overwrite, empty values included.
    pub fn save(&mut self, project: &str, shot: &str, role: &str) {
        *self = Self::new(project, shot, role);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn project_path(&self) -> Option<&Path> {
        (!self.project.is_empty()).then(|| Path::new(&self.project))
    }

    pub fn shot(&self) -> Option<&str> {
        (!self.shot.is_empty()).then_some(self.shot.as_str())
    }

    pub fn role(&self) -> Option<&str> {
        (!self.role.is_empty()).then_some(self.role.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.project.is_empty() && self.shot.is_empty() && self.role.is_empty()
    }
}
