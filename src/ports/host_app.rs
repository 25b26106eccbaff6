use std::path::Path;

use crate::domain::AppError;

/// Port for the host application that edits pipeline files.
pub trait HostApp {
    /// Save the file currently open in the host if it has unsaved changes.
    fn save_if_dirty(&self) -> Result<(), AppError>;

    /// Load `path` in the host.
    fn open_file(&self, path: &Path) -> Result<(), AppError>;
}

