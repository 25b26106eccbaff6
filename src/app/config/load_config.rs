//! Pipeline configuration discovery and loading.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::configuration::parse_config_content;
use crate::domain::{AppError, PipelineConfig};

/// Environment variable naming a configuration file.
pub const CONFIG_ENV: &str = "SHOTDESK_CONFIG";

/// File name looked up in the working directory.
pub const CONFIG_FILE: &str = "shotdesk.toml";

const USER_CONFIG_DIR: &str = "shotdesk";
const USER_CONFIG_FILE: &str = "config.toml";

/// Inputs to configuration discovery, in priority order.
#[derive(Debug, Clone, Default)]
pub struct ConfigSearch {
    /// `--config`; when set no other location is consulted.
    pub explicit: Option<PathBuf>,
    /// Value of `$SHOTDESK_CONFIG`; when set no later location is consulted.
    pub env: Option<PathBuf>,
    pub working_dir: Option<PathBuf>,
    pub user_config_dir: Option<PathBuf>,
}

impl ConfigSearch {
    /// Discovery inputs taken from the running process.
    pub fn from_process(explicit: Option<PathBuf>) -> Self {
        Self {
            explicit,
            env: std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()).map(PathBuf::from),
            working_dir: std::env::current_dir().ok(),
            user_config_dir: dirs::config_dir(),
        }
    }

    /// Candidate paths in the order they are tried.
    fn candidates(&self) -> Vec<PathBuf> {
        if let Some(path) = self.explicit.as_ref().or(self.env.as_ref()) {
            return vec![path.clone()];
        }

        let mut candidates = Vec::new();
        if let Some(dir) = &self.working_dir {
            candidates.push(dir.join(CONFIG_FILE));
        }
        if let Some(dir) = &self.user_config_dir {
            candidates.push(dir.join(USER_CONFIG_DIR).join(USER_CONFIG_FILE));
        }
        candidates
    }
}

/// Locate, parse and validate the pipeline configuration.
///
/// Returns the configuration and the file it came from.
pub fn load_config(search: &ConfigSearch) -> Result<(PipelineConfig, PathBuf), AppError> {
    let candidates = search.candidates();
    let path = candidates.iter().find(|p| p.is_file()).ok_or_else(|| {
        let searched: Vec<String> = candidates.iter().map(|p| p.display().to_string()).collect();
        AppError::ConfigNotFound(searched.join(", "))
    })?;

    debug!(path = %path.display(), "loading configuration");
    let config = load_from(path)?;
    Ok((config, path.clone()))
}

fn load_from(path: &Path) -> Result<PipelineConfig, AppError> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
    parse_config_content(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &Path, rel: &str, content: &str) -> PathBuf {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn explicit_path_shadows_everything() {
        let tmp = TempDir::new().unwrap();
        let explicit = write(tmp.path(), "a/explicit.toml", "extension = \"ma\"");
        write(tmp.path(), "cwd/shotdesk.toml", "extension = \"blend\"");

        let search = ConfigSearch {
            explicit: Some(explicit.clone()),
            env: Some(tmp.path().join("missing.toml")),
            working_dir: Some(tmp.path().join("cwd")),
            user_config_dir: None,
        };
        let (config, path) = load_config(&search).unwrap();

        assert_eq!(config.extension, "ma");
        assert_eq!(path, explicit);
    }

    #[test]
    fn missing_explicit_path_does_not_fall_back() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "cwd/shotdesk.toml", "");

        let search = ConfigSearch {
            explicit: Some(tmp.path().join("nope.toml")),
            working_dir: Some(tmp.path().join("cwd")),
            ..ConfigSearch::default()
        };
        let err = load_config(&search).unwrap_err();

        assert!(matches!(err, AppError::ConfigNotFound(msg) if msg.contains("nope.toml")));
    }

    #[test]
    fn env_path_beats_working_dir() {
        let tmp = TempDir::new().unwrap();
        let env = write(tmp.path(), "env.toml", "prefix_length = 4");
        write(tmp.path(), "cwd/shotdesk.toml", "");

        let search = ConfigSearch {
            env: Some(env),
            working_dir: Some(tmp.path().join("cwd")),
            ..ConfigSearch::default()
        };
        let (config, _) = load_config(&search).unwrap();

        assert_eq!(config.prefix_length, 4);
    }

    #[test]
    fn working_dir_then_user_config_dir() {
        let tmp = TempDir::new().unwrap();
        let user = write(tmp.path(), "user/shotdesk/config.toml", "project_mode = \"solo\"");

        let search = ConfigSearch {
            working_dir: Some(tmp.path().join("cwd")),
            user_config_dir: Some(tmp.path().join("user")),
            ..ConfigSearch::default()
        };
        let (config, path) = load_config(&search).unwrap();
        assert_eq!(path, user);
        assert_eq!(config.project_mode, crate::domain::ProjectMode::Solo);

        write(tmp.path(), "cwd/shotdesk.toml", "");
        let (config, _) = load_config(&search).unwrap();
        assert_eq!(config.project_mode, crate::domain::ProjectMode::Team);
    }

    #[test]
    fn nothing_found_lists_searched_paths() {
        let tmp = TempDir::new().unwrap();
        let search = ConfigSearch {
            working_dir: Some(tmp.path().to_path_buf()),
            user_config_dir: Some(tmp.path().join("user")),
            ..ConfigSearch::default()
        };

        let err = load_config(&search).unwrap_err();

        assert!(matches!(err, AppError::ConfigNotFound(msg) if msg.contains("shotdesk.toml") && msg.contains("config.toml")));
    }

    #[test]
    fn invalid_file_is_reported_not_skipped() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "shotdesk.toml", "extension = \".blend\"");

        let search = ConfigSearch {
            working_dir: Some(tmp.path().to_path_buf()),
            ..ConfigSearch::default()
        };

        assert!(matches!(load_config(&search), Err(AppError::InvalidConfig(_))));
    }
}
