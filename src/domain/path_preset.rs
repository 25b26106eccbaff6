//! Publish-directory presets.
//!
//! Built-in presets are plain functions over [`PathVars`]. The `custom`
//! preset renders a minijinja template; its variables are checked against
//! [`TEMPLATE_VARIABLES`] when configuration loads, and again against the
//! supplied values at resolution time.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use minijinja::{Environment, ErrorKind, Template, UndefinedBehavior};
use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Directory every built-in preset ends in.
pub const PUBLISH_DIR: &str = "PUBLISH";

/// Folder under the shots directory that holds asset publishes.
pub const ASSETS_DIR: &str = "ASSETS 3D";

/// Variables a custom template may reference.
pub const TEMPLATE_VARIABLES: [&str; 7] =
    ["project_path", "project_name", "workspace", "shots_dir", "shot", "role", "asset"];

/// Publish-path preset selected per role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathPreset {
    /// `<workspace>/<SHOTS>/<shot>/<role>/PUBLISH`
    ShotRole,
    /// `<workspace>/<role>/<SHOTS>/<shot>/PUBLISH`
    RoleShot,
    /// `<workspace>/<SHOTS>/<shot>/PUBLISH`
    Shot,
    /// `<workspace>/<SHOTS>/ASSETS 3D/<asset>/PUBLISH`
    Asset,
    /// User template from the role's `template` field.
    Custom,
}

impl PathPreset {
    pub const ALL: [PathPreset; 5] = [
        PathPreset::ShotRole,
        PathPreset::RoleShot,
        PathPreset::Shot,
        PathPreset::Asset,
        PathPreset::Custom,
    ];

    /// Name as written in configuration.
    pub fn config_name(&self) -> &'static str {
        match self {
            PathPreset::ShotRole => "shot_role",
            PathPreset::RoleShot => "role_shot",
            PathPreset::Shot => "shot",
            PathPreset::Asset => "asset",
            PathPreset::Custom => "custom",
        }
    }
}

/// Substitution values available to presets.
#[derive(Debug, Clone, Copy)]
pub struct PathVars<'a> {
    pub project_path: &'a Path,
    pub project_name: &'a str,
    pub workspace_root: &'a Path,
    pub shots_dir: &'a str,
    pub shot: &'a str,
    pub role: &'a str,
    pub asset: Option<&'a str>,
}

impl PathVars<'_> {
    fn as_map(&self) -> BTreeMap<&'static str, String> {
        let mut map = BTreeMap::new();
        map.insert("project_path", self.project_path.display().to_string());
        map.insert("project_name", self.project_name.to_string());
        map.insert("workspace", self.workspace_root.display().to_string());
        map.insert("shots_dir", self.shots_dir.to_string());
        map.insert("shot", self.shot.to_string());
        map.insert("role", self.role.to_string());
        if let Some(asset) = self.asset {
            map.insert("asset", asset.to_string());
        }
        map
    }
}

/// Compute the publish directory for a role. Does not touch the filesystem.
pub fn resolve_publish_dir(
    preset: PathPreset,
    template: Option<&str>,
    vars: &PathVars<'_>,
) -> Result<PathBuf, AppError> {
    let shots = vars.workspace_root.join(vars.shots_dir);
    let dir = match preset {
        PathPreset::ShotRole => shots.join(vars.shot).join(vars.role).join(PUBLISH_DIR),
        PathPreset::RoleShot => vars
            .workspace_root
            .join(vars.role)
            .join(vars.shots_dir)
            .join(vars.shot)
            .join(PUBLISH_DIR),
        PathPreset::Shot => shots.join(vars.shot).join(PUBLISH_DIR),
        PathPreset::Asset => {
            let asset = vars.asset.ok_or_else(|| AppError::UnresolvedTemplateVariable {
                template: preset.config_name().to_string(),
                variable: "asset".to_string(),
            })?;
            shots.join(ASSETS_DIR).join(asset).join(PUBLISH_DIR)
        }
        PathPreset::Custom => {
            let template = template.ok_or_else(|| {
                AppError::config_missing("Preset 'custom' requires a template")
            })?;
            let rendered = render_custom(template, vars)?;
            vars.workspace_root.join(rendered)
        }
    };
    Ok(dir)
}

/// Reject templates that fail to parse or reference unknown variables.
pub fn validate_custom_template(template: &str) -> Result<(), AppError> {
    let env = strict_environment();
    checked_template(&env, template, |name| TEMPLATE_VARIABLES.contains(&name))?;
    Ok(())
}

fn render_custom(template: &str, vars: &PathVars<'_>) -> Result<String, AppError> {
    let env = strict_environment();
    let values = vars.as_map();
    let tmpl = checked_template(&env, template, |name| values.contains_key(name))?;

    tmpl.render(&values).map_err(|e| match e.kind() {
        ErrorKind::UndefinedError => AppError::UnresolvedTemplateVariable {
            template: template.to_string(),
            variable: e.detail().unwrap_or("unknown").to_string(),
        },
        _ => AppError::InvalidConfig(format!("Failed to render template '{}': {}", template, e)),
    })
}

/// Parse `source`, failing on the first referenced variable (by name) that
/// `known` rejects.
fn checked_template<'env, 'source>(
    env: &'env Environment<'source>,
    source: &'source str,
    known: impl Fn(&str) -> bool,
) -> Result<Template<'env, 'source>, AppError> {
    let tmpl = env.template_from_str(source).map_err(|e| {
        AppError::InvalidConfig(format!("Failed to parse template '{}': {}", source, e))
    })?;

    let mut undeclared: Vec<String> = tmpl.undeclared_variables(false).into_iter().collect();
    undeclared.sort();
    if let Some(variable) = undeclared.into_iter().find(|name| !known(name.as_str())) {
        return Err(AppError::UnresolvedTemplateVariable {
            template: source.to_string(),
            variable,
        });
    }
    Ok(tmpl)
}

fn strict_environment<'source>() -> Environment<'source> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env
}
