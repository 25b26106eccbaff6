use std::path::Path;

use tracing::debug;

use crate::domain::{AppError, Revision, RevisionStem};
use crate::ports::PipelineFs;

/// All WIP revisions of `stem` in `dir`, ascending by number.
///
/// A missing directory yields an empty list. Equal numbers written with
/// different padding (`_WIP_1`, `_WIP_001`) are ordered by file name.
pub fn scan_revisions(
    fs: &impl PipelineFs,
    dir: &Path,
    stem: &RevisionStem,
) -> Result<Vec<Revision>, AppError> {
    let Some(entries) = fs.list_dir(dir)? else {
        debug!(dir = %dir.display(), "no WIP directory");
        return Ok(Vec::new());
    };

    let mut revisions: Vec<Revision> = entries
        .into_iter()
        .filter(|entry| !entry.is_dir)
        .filter_map(|entry| {
            stem.parse(&entry.name).map(|number| Revision { number, path: dir.join(&entry.name) })
        })
        .collect();
    revisions.sort();

    debug!(dir = %dir.display(), base = %stem.base, count = revisions.len(), "scanned WIP revisions");
    Ok(revisions)
}

/// Highest WIP revision of `stem` in `dir`, if any.
pub fn latest_revision(
    fs: &impl PipelineFs,
    dir: &Path,
    stem: &RevisionStem,
) -> Result<Option<Revision>, AppError> {
    Ok(scan_revisions(fs, dir, stem)?.pop())
}
