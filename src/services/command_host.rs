use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, info};

use crate::domain::AppError;
use crate::ports::HostApp;

/// Host adapter for command-line use.
///
/// Opening spawns the configured program with the file path appended and does
/// not wait for it. Without a configured program the request is only logged;
/// the caller reports the path. A CLI process never has an unsaved file, so
/// `save_if_dirty` has nothing to do.
#[derive(Debug, Clone, Default)]
pub struct CommandHost {
    open_command: Option<Vec<String>>,
}

impl CommandHost {
    pub fn new(open_command: Option<Vec<String>>) -> Self {
        Self { open_command: open_command.filter(|argv| !argv.is_empty()) }
    }
}

impl HostApp for CommandHost {
    fn save_if_dirty(&self) -> Result<(), AppError> {
        Ok(())
    }

    fn open_file(&self, path: &Path) -> Result<(), AppError> {
        let Some((program, args)) = self.open_command.as_ref().and_then(|argv| argv.split_first())
        else {
            debug!(path = %path.display(), "no open_command configured; not launching host");
            return Ok(());
        };

        Command::new(program)
            .args(args)
            .arg(path)
            .stdin(Stdio::null())
            .spawn()
            .map_err(|e| AppError::Host(format!("Failed to launch '{}': {}", program, e)))?;
        info!(program = %program, path = %path.display(), "launched host");
        Ok(())
    }
}
