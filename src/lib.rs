//! shotdesk: locate, version and open per-shot working files in a production pipeline.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    OpenShotOutcome, OpenShotRequest, ProjectSummary, Shotdesk, clear_context, list_roles, list_shots,
    load_configuration, open_shot, project_info, save_context, set_context, show_context,
};
pub use domain::{AppError, ContextUpdate, CurrentContext, PipelineConfig, RoleChoice, ShotId};
