use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::domain::{AppError, CurrentContext};
use crate::ports::ContextStore;

/// File name of the persisted context inside the session directory.
pub const CONTEXT_FILE: &str = "context.json";

/// Context store backed by a JSON file, replaced atomically on every write.
#[derive(Debug, Clone)]
pub struct JsonContextStore {
    path: PathBuf,
}

impl JsonContextStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store `context.json` inside `session_dir`.
    pub fn in_dir(session_dir: &Path) -> Self {
        Self::new(session_dir.join(CONTEXT_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn error(&self, details: impl ToString) -> AppError {
        AppError::ContextStore { path: self.path.clone(), details: details.to_string() }
    }
}

impl ContextStore for JsonContextStore {
    fn load(&self) -> Result<CurrentContext, AppError> {
        if !self.path.exists() {
            return Ok(CurrentContext::default());
        }
        let content = fs::read_to_string(&self.path).map_err(|e| self.error(e))?;
        serde_json::from_str(&content).map_err(|e| self.error(e))
    }

    fn store(&self, context: &CurrentContext) -> Result<(), AppError> {
        let dir = self.path.parent().unwrap_or(Path::new("."));
        fs::create_dir_all(dir).map_err(|e| self.error(e))?;

        let json = serde_json::to_string_pretty(context).map_err(|e| self.error(e))?;
        let mut temp = NamedTempFile::new_in(dir).map_err(|e| self.error(e))?;
        temp.write_all(json.as_bytes()).map_err(|e| self.error(e))?;
        temp.write_all(b"\n").map_err(|e| self.error(e))?;
        temp.flush().map_err(|e| self.error(e))?;
        temp.persist(&self.path).map_err(|e| self.error(e.error))?;
        Ok(())
    }
}
