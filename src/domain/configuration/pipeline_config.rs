//! Pipeline configuration domain models.

use std::collections::HashSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::path_preset::validate_custom_template;
use crate::domain::project::{DEFAULT_PREFIX_LENGTH, RootPolicy};
use crate::domain::{AppError, LayoutConfig, PathPreset, ProjectMode, RoleConfig};

/// Configuration loaded from `shotdesk.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineConfig {
    /// Derive workspace roots under `fixed_root` instead of using the project path.
    #[serde(default)]
    pub use_fixed_root: bool,
    #[serde(default)]
    pub fixed_root: Option<PathBuf>,
    #[serde(default)]
    pub project_mode: ProjectMode,
    /// Host file extension, without the leading dot.
    #[serde(default = "default_extension")]
    pub extension: String,
    #[serde(default = "default_prefix_length")]
    pub prefix_length: usize,
    /// Where the current context is persisted between runs.
    #[serde(default)]
    pub session_dir: Option<PathBuf>,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub host: HostConfig,
    #[serde(default)]
    pub roles: Vec<RoleConfig>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            use_fixed_root: false,
            fixed_root: None,
            project_mode: ProjectMode::default(),
            extension: default_extension(),
            prefix_length: default_prefix_length(),
            session_dir: None,
            layout: LayoutConfig::default(),
            cache: CacheConfig::default(),
            host: HostConfig::default(),
            roles: Vec::new(),
        }
    }
}

impl PipelineConfig {
    /// Workspace-root derivation settings for the project locator.
    pub fn root_policy(&self) -> RootPolicy<'_> {
        RootPolicy {
            use_fixed_root: self.use_fixed_root,
            fixed_root: self.fixed_root.as_deref(),
            prefix_length: self.prefix_length,
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.extension.trim().is_empty() {
            return Err(AppError::InvalidConfig("extension must not be empty".to_string()));
        }
        if self.extension.starts_with('.') {
            return Err(AppError::InvalidConfig(format!(
                "extension must not start with a dot (got '{}')",
                self.extension
            )));
        }
        if self.prefix_length == 0 {
            return Err(AppError::InvalidConfig("prefix_length must be greater than 0".to_string()));
        }
        if self.use_fixed_root && self.fixed_root.is_none() {
            return Err(AppError::InvalidConfig(
                "use_fixed_root requires fixed_root to be set".to_string(),
            ));
        }
        if self.layout.shots_dir.trim().is_empty() {
            return Err(AppError::InvalidConfig("layout.shots_dir must not be empty".to_string()));
        }
        if self.layout.wip_dir.trim().is_empty() {
            return Err(AppError::InvalidConfig("layout.wip_dir must not be empty".to_string()));
        }
        self.validate_roles()
    }

    fn validate_roles(&self) -> Result<(), AppError> {
        let mut seen = HashSet::new();
        for role in &self.roles {
            if !seen.insert(role.name.as_str()) {
                return Err(AppError::InvalidConfig(format!(
                    "Role '{}' is defined more than once",
                    role.name
                )));
            }
            match (role.preset, role.template.as_deref()) {
                (PathPreset::Custom, Some(template)) => validate_custom_template(template)?,
                (PathPreset::Custom, None) => {
                    return Err(AppError::InvalidConfig(format!(
                        "Role '{}' uses preset 'custom' but has no template",
                        role.name
                    )));
                }
                (_, Some(_)) => {
                    return Err(AppError::InvalidConfig(format!(
                        "Role '{}' sets a template but its preset is '{}'",
                        role.name,
                        role.preset.config_name()
                    )));
                }
                (_, None) => {}
            }
        }
        Ok(())
    }
}

fn default_extension() -> String {
    "blend".to_string()
}

fn default_prefix_length() -> usize {
    DEFAULT_PREFIX_LENGTH
}

/// Directory-listing cache settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CacheConfig {
    /// Seconds a directory listing stays fresh; 0 disables caching.
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { ttl_secs: default_ttl_secs() }
    }
}

fn default_ttl_secs() -> u64 {
    30
}

/// How files are handed to the host application.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HostConfig {
    /// Program and arguments; the file path is appended.
    #[serde(default)]
    pub open_command: Option<Vec<String>>,
}
