use std::path::Path;

use tracing::debug;

use crate::domain::layout::is_reserved_shot_folder;
use crate::domain::{AppError, LayoutConfig, ShotId};
use crate::ports::PipelineFs;

/// Shot folders of a workspace in display order: `SHOT_*` then `SCENE_*`.
///
/// Reserved infrastructure folders, plain files, and folders of any other
/// shape are left out. A workspace without a shots directory is an error.
pub fn list_shots(
    fs: &impl PipelineFs,
    workspace_root: &Path,
    layout: &LayoutConfig,
) -> Result<Vec<ShotId>, AppError> {
    let shots_root = layout.shots_root(workspace_root);
    let entries =
        fs.list_dir(&shots_root)?.ok_or_else(|| AppError::ShotsDirectoryMissing(shots_root.clone()))?;

    let mut shots: Vec<ShotId> = entries
        .into_iter()
        .filter(|entry| entry.is_dir && !is_reserved_shot_folder(&entry.name))
        .filter_map(|entry| match ShotId::new(&entry.name) {
            Ok(shot) => Some(shot),
            Err(_) => {
                debug!(folder = %entry.name, "skipping folder that is not a shot");
                None
            }
        })
        .collect();
    shots.sort();
    Ok(shots)
}
