//! Memoized directory listings.
//!
//! Listing shot folders on network storage is slow and menus re-query on
//! every redraw, so listings are kept for a configurable time. Existence
//! checks always go to the inner store, and every copy invalidates the
//! destination directory so callers observe the files they just created.

use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use tracing::debug;

use crate::domain::AppError;
use crate::ports::{DirEntryInfo, PipelineFs};

struct CachedListing {
    fetched_at: Instant,
    listing: Option<Vec<DirEntryInfo>>,
}

/// `PipelineFs` decorator caching `list_dir` results for `ttl`.
///
/// A zero `ttl` disables caching. Not `Sync`; one cache per session.
pub struct CachedFs<F: PipelineFs> {
    inner: F,
    ttl: Duration,
    entries: RefCell<HashMap<PathBuf, CachedListing>>,
}

impl<F: PipelineFs> CachedFs<F> {
    pub fn new(inner: F, ttl: Duration) -> Self {
        Self { inner, ttl, entries: RefCell::new(HashMap::new()) }
    }

    /// Drop every cached listing.
    pub fn refresh(&self) {
        self.entries.borrow_mut().clear();
    }

    /// Drop the cached listing of one directory.
    pub fn invalidate(&self, dir: &Path) {
        self.entries.borrow_mut().remove(dir);
    }

    pub fn inner(&self) -> &F {
        &self.inner
    }
}

impl<F: PipelineFs> PipelineFs for CachedFs<F> {
    fn is_file(&self, path: &Path) -> bool {
        self.inner.is_file(path)
    }

    fn list_dir(&self, path: &Path) -> Result<Option<Vec<DirEntryInfo>>, AppError> {
        if self.ttl.is_zero() {
            return self.inner.list_dir(path);
        }

        if let Some(cached) = self.entries.borrow().get(path)
            && cached.fetched_at.elapsed() < self.ttl
        {
            debug!(dir = %path.display(), "directory listing served from cache");
            return Ok(cached.listing.clone());
        }

        let listing = self.inner.list_dir(path)?;
        self.entries.borrow_mut().insert(
            path.to_path_buf(),
            CachedListing { fetched_at: Instant::now(), listing: listing.clone() },
        );
        Ok(listing)
    }

    fn copy_new(&self, from: &Path, to: &Path) -> io::Result<()> {
        let result = self.inner.copy_new(from, to);
        if let Some(parent) = to.parent() {
            self.invalidate(parent);
            // The copy may have created the directory itself.
            if let Some(grandparent) = parent.parent() {
                self.invalidate(grandparent);
            }
        }
        result
    }
}
