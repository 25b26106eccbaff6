//! Read-only queries over the current project: shots, roles, project info.

use std::path::Path;

use crate::app::AppContext;
use crate::domain::project::locate;
use crate::domain::roles::list_roles;
use crate::domain::{AppError, CurrentContext, ProjectInfo, ProjectMode, RoleChoice, ShotId};
use crate::ports::{HostApp, PipelineFs};
use crate::services::shot_listing;

/// Project identity plus the mode it is worked in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSummary {
    pub info: ProjectInfo,
    pub mode: ProjectMode,
}

/// Resolve the project to query: an explicit path wins over the context.
fn project_path<'a>(
    explicit: Option<&'a Path>,
    context: &'a CurrentContext,
) -> Result<&'a Path, AppError> {
    explicit.or_else(|| context.project_path()).ok_or(AppError::NoProjectSelected)
}

pub fn project<F, H>(
    ctx: &AppContext<F, H>,
    context: &CurrentContext,
    explicit: Option<&Path>,
) -> Result<ProjectSummary, AppError>
where
    F: PipelineFs,
    H: HostApp,
{
    let path = project_path(explicit, context)?;
    let info = locate(path, ctx.config().root_policy())?;
    Ok(ProjectSummary { info, mode: ctx.config().project_mode })
}

pub fn shots<F, H>(
    ctx: &AppContext<F, H>,
    context: &CurrentContext,
    explicit: Option<&Path>,
) -> Result<Vec<ShotId>, AppError>
where
    F: PipelineFs,
    H: HostApp,
{
    let summary = project(ctx, context, explicit)?;
    shot_listing::list_shots(ctx.fs(), &summary.info.workspace_root, &ctx.config().layout)
}

/// Roles selectable in the configured mode. Needs no project.
pub fn roles<F, H>(ctx: &AppContext<F, H>) -> Vec<RoleChoice>
where
    F: PipelineFs,
    H: HostApp,
{
    list_roles(&ctx.config().roles, ctx.config().project_mode)
}
