use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::app::AppContext;
use crate::domain::layout::publish_stem;
use crate::domain::path_preset::resolve_publish_dir;
use crate::domain::project::locate;
use crate::domain::roles::{find_role, list_roles};
use crate::domain::{
    AppError, ContextUpdate, CurrentContext, PathVars, ProjectMode, ResolveAction, RoleName,
    ShotId,
};
use crate::ports::{HostApp, PipelineFs};
use crate::services::version_resolver;

/// Parameters of an open-shot request.
#[derive(Debug, Clone, Default)]
pub struct OpenShotRequest {
    /// Project to switch to; the context's project is used when absent.
    pub project: Option<PathBuf>,
    pub shot: String,
    /// May be omitted when exactly one role is selectable.
    pub role: Option<String>,
}

/// What an open-shot request ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenShotOutcome {
    /// An existing file was opened (latest WIP or the assembly publish).
    Opened { path: PathBuf },
    /// The first WIP was copied from the publish and opened.
    CreatedFirstWip { path: PathBuf },
    /// Nothing is published at the expected path; nothing was opened.
    NoPublish { expected: PathBuf },
}

impl OpenShotOutcome {
    pub fn path(&self) -> &PathBuf {
        match self {
            OpenShotOutcome::Opened { path } | OpenShotOutcome::CreatedFirstWip { path } => path,
            OpenShotOutcome::NoPublish { expected } => expected,
        }
    }
}

/// Execute the open-shot request.
///
/// Project, shot and role are recorded into `context` together once the
/// request is known to be usable, before any file is looked at, so the
/// context reflects intent even when nothing gets opened. A rejected
/// request leaves the context untouched.
pub fn execute<F, H>(
    ctx: &AppContext<F, H>,
    context: &mut CurrentContext,
    request: OpenShotRequest,
) -> Result<OpenShotOutcome, AppError>
where
    F: PipelineFs,
    H: HostApp,
{
    let project_path = match request.project {
        Some(project) => project,
        None => context.project_path().ok_or(AppError::NoProjectSelected)?.to_path_buf(),
    };

    let shot = ShotId::new(&request.shot)?;
    let role = select_role(ctx, request.role.as_deref())?;

    let config = ctx.config();
    if role.is_assembly() && config.project_mode != ProjectMode::Team {
        return Err(AppError::config_missing(format!(
            "Role '{}' is only available in team projects",
            role
        )));
    }

    ctx.host().save_if_dirty()?;

    let project = locate(&project_path, config.root_policy())?;

    if role.is_assembly() {
        let path = config.layout.assembly_file(&project, &shot, &config.extension);
        record(context, &project_path, &shot, &role);
        return open_assembly(ctx, &shot, path);
    }

    let role_config = find_role(&config.roles, &role)
        .ok_or_else(|| AppError::config_missing(format!("Role '{}' is not configured", role)))?;

    let vars = PathVars {
        project_path: &project_path,
        project_name: &project.name,
        workspace_root: &project.workspace_root,
        shots_dir: &config.layout.shots_dir,
        shot: shot.as_str(),
        role: role.as_str(),
        asset: Some(role.as_str()),
    };
    let publish_dir =
        resolve_publish_dir(role_config.preset, role_config.template.as_deref(), &vars)?;
    let stem = publish_stem(&project.prefix, &shot, &role, &config.extension);
    let publish_file = publish_dir.join(stem.publish_name());

    record(context, &project_path, &shot, &role);

    let wip = config.layout.wip_location(&publish_dir, stem);
    let resolution = version_resolver::resolve(ctx.fs(), &publish_file, &wip)?;

    match (resolution.action, resolution.path) {
        (ResolveAction::Redirect, Some(path)) => {
            ctx.host().open_file(&path)?;
            Ok(OpenShotOutcome::Opened { path })
        }
        (ResolveAction::Created, Some(path)) => {
            ctx.host().open_file(&path)?;
            Ok(OpenShotOutcome::CreatedFirstWip { path })
        }
        _ => Ok(OpenShotOutcome::NoPublish { expected: publish_file }),
    }
}

/// The assembly has a single publish under `SHOTS/ASSEMBLY` and no WIP tier.
fn open_assembly<F, H>(
    ctx: &AppContext<F, H>,
    shot: &ShotId,
    path: PathBuf,
) -> Result<OpenShotOutcome, AppError>
where
    F: PipelineFs,
    H: HostApp,
{
    if !ctx.fs().is_file(&path) {
        warn!(path = %path.display(), "assembly file not found");
        return Ok(OpenShotOutcome::NoPublish { expected: path });
    }

    ctx.host().open_file(&path)?;
    info!(shot = %shot, "opened assembly");
    Ok(OpenShotOutcome::Opened { path })
}

fn record(context: &mut CurrentContext, project: &Path, shot: &ShotId, role: &RoleName) {
    context.set(ContextUpdate {
        project: Some(project.display().to_string()),
        shot: Some(shot.to_string()),
        role: Some(role.to_string()),
    });
}

fn select_role<F, H>(ctx: &AppContext<F, H>, requested: Option<&str>) -> Result<RoleName, AppError>
where
    F: PipelineFs,
    H: HostApp,
{
    if let Some(name) = requested {
        return RoleName::new(name);
    }

    let config = ctx.config();
    let choices = list_roles(&config.roles, config.project_mode);
    match choices.as_slice() {
        [] => Err(AppError::config_missing("No roles are configured")),
        [only] => Ok(only.name.clone()),
        many => Err(AppError::RoleRequired {
            available: many.iter().map(|c| c.name.as_str()).collect::<Vec<_>>().join(", "),
        }),
    }
}
