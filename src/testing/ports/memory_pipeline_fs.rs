//! Test double for `PipelineFs`.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::{DirEntryInfo, PipelineFs};

/// In-memory implementation of `PipelineFs` for unit tests.
#[derive(Debug, Default)]
pub struct MemoryPipelineFs {
    files: RefCell<BTreeMap<PathBuf, Vec<u8>>>,
    dirs: RefCell<BTreeSet<PathBuf>>,
    list_calls: Cell<usize>,
    copy_calls: Cell<usize>,
    fail_copies: Cell<Option<io::ErrorKind>>,
}

impl MemoryPipelineFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a directory and all its ancestors.
    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let mut dirs = self.dirs.borrow_mut();
        for ancestor in path.as_ref().ancestors() {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            dirs.insert(ancestor.to_path_buf());
        }
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: &[u8]) {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        self.files.borrow_mut().insert(path.to_path_buf(), content.to_vec());
    }

    pub fn read(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.files.borrow().get(path.as_ref()).cloned()
    }

    /// Paths of every file, sorted.
    pub fn file_paths(&self) -> Vec<PathBuf> {
        self.files.borrow().keys().cloned().collect()
    }

    /// Make every following copy fail with `kind`.
    pub fn fail_copies_with(&self, kind: io::ErrorKind) {
        self.fail_copies.set(Some(kind));
    }

    pub fn allow_copies(&self) {
        self.fail_copies.set(None);
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.get()
    }

    pub fn copy_calls(&self) -> usize {
        self.copy_calls.get()
    }
}

impl PipelineFs for MemoryPipelineFs {
    fn is_file(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path)
    }

    fn list_dir(&self, path: &Path) -> Result<Option<Vec<DirEntryInfo>>, AppError> {
        self.list_calls.set(self.list_calls.get() + 1);
        if !self.dirs.borrow().contains(path) {
            return Ok(None);
        }

        let name_of = |p: &Path| p.file_name().map(|n| n.to_string_lossy().to_string());
        let mut entries: Vec<DirEntryInfo> = self
            .dirs
            .borrow()
            .iter()
            .filter(|d| d.parent() == Some(path))
            .filter_map(|d| name_of(d).map(DirEntryInfo::dir))
            .collect();
        entries.extend(
            self.files
                .borrow()
                .keys()
                .filter(|f| f.parent() == Some(path))
                .filter_map(|f| name_of(f).map(DirEntryInfo::file)),
        );
        Ok(Some(entries))
    }

    fn copy_new(&self, from: &Path, to: &Path) -> io::Result<()> {
        self.copy_calls.set(self.copy_calls.get() + 1);
        if let Some(kind) = self.fail_copies.get() {
            return Err(io::Error::new(kind, "injected copy failure"));
        }
        let content = self
            .read(from)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "source not found"))?;
        if self.is_file(to) {
            return Err(io::Error::new(io::ErrorKind::AlreadyExists, "destination exists"));
        }
        self.add_file(to, &content);
        Ok(())
    }
}
