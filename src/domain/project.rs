//! Project location: name, workspace root, and filename prefix.

use std::path::{Component, Path, PathBuf};

use crate::domain::AppError;

/// Default number of characters kept in a derived project prefix.
pub const DEFAULT_PREFIX_LENGTH: usize = 3;

/// Identity of a project as seen by the pipeline.
///
/// Never persisted; recomputed from the project path whenever needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectInfo {
    /// Final component of the project path.
    pub name: String,
    /// Directory containing `SHOTS/` and the role trees.
    pub workspace_root: PathBuf,
    /// Short token used at the start of generated file names.
    pub prefix: String,
}

/// How the workspace root is derived from a project path.
#[derive(Debug, Clone, Copy)]
pub struct RootPolicy<'a> {
    pub use_fixed_root: bool,
    pub fixed_root: Option<&'a Path>,
    pub prefix_length: usize,
}

impl Default for RootPolicy<'_> {
    fn default() -> Self {
        Self { use_fixed_root: false, fixed_root: None, prefix_length: DEFAULT_PREFIX_LENGTH }
    }
}

/// Derive project identity from a path. Pure: the path need not exist.
pub fn locate(project_path: &Path, policy: RootPolicy<'_>) -> Result<ProjectInfo, AppError> {
    let name = project_name(project_path)?;

    let workspace_root = if policy.use_fixed_root {
        let root = policy.fixed_root.ok_or_else(|| {
            AppError::config_missing("use_fixed_root is enabled but fixed_root is not configured")
        })?;
        root.join(&name)
    } else {
        project_path.to_path_buf()
    };

    let prefix = derive_prefix(&name, policy.prefix_length);
    Ok(ProjectInfo { name, workspace_root, prefix })
}

fn project_name(project_path: &Path) -> Result<String, AppError> {
    let invalid = || AppError::InvalidProjectPath(project_path.display().to_string());

    match project_path.components().next_back() {
        Some(Component::Normal(part)) => {
            let name = part.to_str().ok_or_else(invalid)?.trim();
            if name.is_empty() { Err(invalid()) } else { Ok(name.to_string()) }
        }
        _ => Err(invalid()),
    }
}

/// First alphanumeric run containing a letter, upper-cased and truncated.
///
/// Falls back to the first alphanumeric run (e.g. a purely numeric code) and
/// finally to the upper-cased name itself.
pub fn derive_prefix(name: &str, length: usize) -> String {
    let length = length.max(1);
    let runs: Vec<&str> =
        name.split(|c: char| !c.is_alphanumeric()).filter(|run| !run.is_empty()).collect();

    let chosen = runs
        .iter()
        .find(|run| run.chars().any(char::is_alphabetic))
        .or_else(|| runs.first())
        .copied()
        .unwrap_or(name);

    chosen.chars().take(length).collect::<String>().to_uppercase()
}
