//! Role configuration and role enumeration.

use serde::{Deserialize, Serialize};

use crate::domain::{PathPreset, RoleName};

/// Whether a project is worked on by a team (with an assembly stage) or solo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectMode {
    #[default]
    Team,
    Solo,
}

impl ProjectMode {
    pub fn display_name(&self) -> &'static str {
        match self {
            ProjectMode::Team => "team",
            ProjectMode::Solo => "solo",
        }
    }
}

/// One department and where its publishes live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoleConfig {
    pub name: RoleName,
    #[serde(default = "default_preset")]
    pub preset: PathPreset,
    /// Only read when `preset = "custom"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_icon")]
    pub icon: String,
}

fn default_preset() -> PathPreset {
    PathPreset::ShotRole
}

fn default_icon() -> String {
    "FILE".to_string()
}

/// A selectable role entry for presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleChoice {
    pub name: RoleName,
    pub label: String,
    pub description: String,
    pub icon: String,
}

impl RoleChoice {
    fn assembly() -> Self {
        Self {
            name: RoleName::assembly(),
            label: "Assembly".to_string(),
            description: "Final assembly of the shot".to_string(),
            icon: "COMMUNITY".to_string(),
        }
    }

    fn from_config(config: &RoleConfig) -> Self {
        Self {
            name: config.name.clone(),
            label: config.name.to_string(),
            description: config.description.clone(),
            icon: config.icon.clone(),
        }
    }
}

/// Roles offered for a project: `ASSEMBLY` first in team mode, then every
/// configured role except one literally named `ASSEMBLY`.
pub fn list_roles(configs: &[RoleConfig], mode: ProjectMode) -> Vec<RoleChoice> {
    let assembly = (mode == ProjectMode::Team).then(RoleChoice::assembly);
    assembly
        .into_iter()
        .chain(configs.iter().filter(|c| !c.name.is_assembly()).map(RoleChoice::from_config))
        .collect()
}

/// Find a configured role by exact name.
pub fn find_role<'a>(configs: &'a [RoleConfig], name: &RoleName) -> Option<&'a RoleConfig> {
    configs.iter().find(|c| &c.name == name)
}
