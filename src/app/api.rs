//! API Facade for the application.
//!
//! [`Shotdesk`] holds the filesystem-backed context and the persisted session
//! for as long as a caller needs them, so directory listings are cached across
//! the requests it serves. The free functions run one request each.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::warn;

use crate::app::commands::{listing, open_shot as open_shot_cmd};
use crate::app::config::{ConfigSearch, load_config, session_dir};
use crate::app::{AppContext, Session};
use crate::services::{CachedFs, CommandHost, FilesystemPipelineFs, JsonContextStore};

pub use crate::app::commands::listing::ProjectSummary;
pub use crate::app::commands::open_shot::{OpenShotOutcome, OpenShotRequest};
pub use crate::domain::{
    AppError, ContextUpdate, CurrentContext, PipelineConfig, RoleChoice, ShotId,
};

type FsContext = AppContext<CachedFs<FilesystemPipelineFs>, CommandHost>;

/// Build an `AppContext` over the real filesystem for a loaded configuration.
fn create_context(config: PipelineConfig) -> FsContext {
    let fs = CachedFs::new(FilesystemPipelineFs::new(), Duration::from_secs(config.cache.ttl_secs));
    let host = CommandHost::new(config.host.open_command.clone());
    AppContext::new(fs, host, config)
}

fn open_session(config: &PipelineConfig) -> Result<Session<JsonContextStore>, AppError> {
    let dir = session_dir(config)?;
    Session::load(JsonContextStore::in_dir(&dir))
}

/// Load and validate the configuration without running anything.
///
/// Returns the configuration and the file it was read from.
pub fn load_configuration(
    config_path: Option<PathBuf>,
) -> Result<(PipelineConfig, PathBuf), AppError> {
    load_config(&ConfigSearch::from_process(config_path))
}

/// A loaded configuration, its filesystem context and the persisted session.
pub struct Shotdesk {
    ctx: FsContext,
    session: Session<JsonContextStore>,
}

impl Shotdesk {
    /// Discover and load configuration, then load the stored context.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, AppError> {
        let (config, _) = load_configuration(config_path)?;
        let session = open_session(&config)?;
        Ok(Self { ctx: create_context(config), session })
    }

    pub fn config(&self) -> &PipelineConfig {
        self.ctx.config()
    }

    pub fn context(&self) -> &CurrentContext {
        self.session.context()
    }

    /// Drop every cached directory listing.
    pub fn refresh(&self) {
        self.ctx.fs().refresh();
    }

    /// Open the right working file for a shot and role.
    ///
    /// The session is written back even when the request fails, so recorded
    /// intent survives a failed WIP creation.
    pub fn open_shot(&mut self, request: OpenShotRequest) -> Result<OpenShotOutcome, AppError> {
        let before = self.session.context().clone();

        let result = open_shot_cmd::execute(&self.ctx, self.session.context_mut(), request);

        if self.session.context() != &before {
            match self.session.persist() {
                Ok(()) => {}
                Err(err) if result.is_err() => warn!(error = %err, "failed to persist context"),
                Err(err) => return Err(err),
            }
        }
        result
    }

    /// Shots of the given project, or of the context's project.
    pub fn list_shots(&self, project: Option<&Path>) -> Result<Vec<ShotId>, AppError> {
        listing::shots(&self.ctx, self.session.context(), project)
    }

    pub fn list_roles(&self) -> Vec<RoleChoice> {
        listing::roles(&self.ctx)
    }

    pub fn project_info(&self, project: Option<&Path>) -> Result<ProjectSummary, AppError> {
        listing::project(&self.ctx, self.session.context(), project)
    }

    pub fn set_context(&mut self, update: ContextUpdate) -> Result<&CurrentContext, AppError> {
        self.session.set_context(update)
    }

    pub fn save_context(
        &mut self,
        project: &str,
        shot: &str,
        role: &str,
    ) -> Result<&CurrentContext, AppError> {
        self.session.save_context(project, shot, role)
    }

    pub fn clear_context(&mut self) -> Result<&CurrentContext, AppError> {
        self.session.clear()
    }
}

// =============================================================================
// Single-request API
// =============================================================================

pub fn open_shot(
    config_path: Option<PathBuf>,
    request: OpenShotRequest,
) -> Result<OpenShotOutcome, AppError> {
    Shotdesk::load(config_path)?.open_shot(request)
}

pub fn show_context(config_path: Option<PathBuf>) -> Result<CurrentContext, AppError> {
    Ok(Shotdesk::load(config_path)?.context().clone())
}

/// Partial update of the stored context.
pub fn set_context(
    config_path: Option<PathBuf>,
    update: ContextUpdate,
) -> Result<CurrentContext, AppError> {
    Ok(Shotdesk::load(config_path)?.set_context(update)?.clone())
}

/// Full overwrite of the stored context.
pub fn save_context(
    config_path: Option<PathBuf>,
    project: &str,
    shot: &str,
    role: &str,
) -> Result<CurrentContext, AppError> {
    Ok(Shotdesk::load(config_path)?.save_context(project, shot, role)?.clone())
}

pub fn clear_context(config_path: Option<PathBuf>) -> Result<CurrentContext, AppError> {
    Ok(Shotdesk::load(config_path)?.clear_context()?.clone())
}

pub fn list_shots(
    config_path: Option<PathBuf>,
    project: Option<&Path>,
) -> Result<Vec<ShotId>, AppError> {
    Shotdesk::load(config_path)?.list_shots(project)
}

pub fn list_roles(config_path: Option<PathBuf>) -> Result<Vec<RoleChoice>, AppError> {
    Ok(Shotdesk::load(config_path)?.list_roles())
}

pub fn project_info(
    config_path: Option<PathBuf>,
    project: Option<&Path>,
) -> Result<ProjectSummary, AppError> {
    Shotdesk::load(config_path)?.project_info(project)
}
