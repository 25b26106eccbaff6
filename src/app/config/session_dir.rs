use std::path::PathBuf;

use crate::domain::{AppError, PipelineConfig};

const APP_DIR: &str = "shotdesk";

/// Directory the current context is persisted in.
///
/// `session_dir` from configuration, else `<data_local_dir>/shotdesk`.
pub fn session_dir(config: &PipelineConfig) -> Result<PathBuf, AppError> {
    if let Some(dir) = &config.session_dir {
        return Ok(dir.clone());
    }
    dirs::data_local_dir().map(|d| d.join(APP_DIR)).ok_or_else(|| {
        AppError::config_missing("No session_dir configured and no local data directory available")
    })
}
