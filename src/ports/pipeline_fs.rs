use std::io;
use std::path::Path;

use crate::domain::AppError;

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    pub name: String,
    pub is_dir: bool,
}

impl DirEntryInfo {
    pub fn dir(name: impl Into<String>) -> Self {
        Self { name: name.into(), is_dir: true }
    }

    pub fn file(name: impl Into<String>) -> Self {
        Self { name: name.into(), is_dir: false }
    }
}

/// Port for the filesystem operations the pipeline core performs.
pub trait PipelineFs {
    /// Whether a file exists at `path`.
    fn is_file(&self, path: &Path) -> bool;

    /// List a directory; `Ok(None)` when the directory does not exist.
    ///
    /// Entries whose names are not valid UTF-8 are skipped.
    fn list_dir(&self, path: &Path) -> Result<Option<Vec<DirEntryInfo>>, AppError>;

    /// Copy `from` to `to` byte-for-byte, creating `to`'s parent directories.
    ///
    /// Must fail with `AlreadyExists` rather than replace an existing `to`,
    /// and must not leave a partial file at `to` on failure.
    fn copy_new(&self, from: &Path, to: &Path) -> io::Result<()>;
}
