//! Publish → WIP resolution.
//!
//! Decision order is fixed: the publish file gates everything. WIPs without a
//! publish are never considered. When a publish has no WIP yet, the first
//! revision is copied from it; any existing revision is returned untouched.

use std::path::Path;

use tracing::{info, warn};

use crate::domain::{AppError, Resolution, WipLocation};
use crate::ports::PipelineFs;
use crate::services::revision_scanner::latest_revision;

/// Revision number given to the first WIP copied from a publish.
pub const FIRST_REVISION: u32 = 1;

/// Decide which file to open for `publish_file`, creating the first WIP if needed.
pub fn resolve(
    fs: &impl PipelineFs,
    publish_file: &Path,
    wip: &WipLocation,
) -> Result<Resolution, AppError> {
    if !fs.is_file(publish_file) {
        warn!(publish = %publish_file.display(), "no publish found");
        return Ok(Resolution::none());
    }

    if let Some(latest) = latest_revision(fs, &wip.dir, &wip.stem)? {
        info!(revision = latest.number, path = %latest.path.display(), "redirecting to latest WIP");
        return Ok(Resolution::redirect(latest.path));
    }

    let first = wip.dir.join(wip.stem.file_name(FIRST_REVISION));
    fs.copy_new(publish_file, &first)
        .map_err(|source| AppError::WipCreationFailed { path: first.clone(), source })?;
    info!(path = %first.display(), "created first WIP from publish");
    Ok(Resolution::created(first))
}
