//! Test double for `HostApp`.

use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::HostApp;

/// Host that records every request.
#[derive(Debug, Default)]
pub struct RecordingHost {
    opened: RefCell<Vec<PathBuf>>,
    saves: Cell<usize>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened(&self) -> Vec<PathBuf> {
        self.opened.borrow().clone()
    }

    pub fn saves(&self) -> usize {
        self.saves.get()
    }
}

impl HostApp for RecordingHost {
    fn save_if_dirty(&self) -> Result<(), AppError> {
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn open_file(&self, path: &Path) -> Result<(), AppError> {
        self.opened.borrow_mut().push(path.to_path_buf());
        Ok(())
    }
}
