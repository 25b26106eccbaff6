use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::Builder;

use crate::domain::AppError;
use crate::ports::{DirEntryInfo, PipelineFs};

/// Prefix of the staging file a copy is written to before it is renamed.
const STAGING_PREFIX: &str = ".shotdesk-";

/// Filesystem-based pipeline store.
#[derive(Debug, Clone, Default)]
pub struct FilesystemPipelineFs;

impl FilesystemPipelineFs {
    pub fn new() -> Self {
        Self
    }
}

impl PipelineFs for FilesystemPipelineFs {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn list_dir(&self, path: &Path) -> Result<Option<Vec<DirEntryInfo>>, AppError> {
        let read_dir = match fs::read_dir(path) {
            Ok(read_dir) => read_dir,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(AppError::io(path, err)),
        };

        let mut entries = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|err| AppError::io(path, err))?;
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            entries.push(DirEntryInfo { name, is_dir: entry.path().is_dir() });
        }
        Ok(Some(entries))
    }

    fn copy_new(&self, from: &Path, to: &Path) -> io::Result<()> {
        let dir: PathBuf = match to.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let mut source = fs::File::open(from)?;
        fs::create_dir_all(&dir)?;

        // Staged next to the destination so the final rename stays on one filesystem.
        let mut staged = Builder::new().prefix(STAGING_PREFIX).suffix(".part").tempfile_in(&dir)?;
        io::copy(&mut source, staged.as_file_mut())?;
        staged.as_file().sync_all()?;
        staged.persist_noclobber(to).map_err(|err| err.error)?;
        Ok(())
    }
}
