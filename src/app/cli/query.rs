use std::path::PathBuf;

use tracing::warn;

use crate::app::api;
use crate::domain::AppError;

pub fn run_shots(config: Option<PathBuf>, project: Option<PathBuf>) -> Result<(), AppError> {
    match api::list_shots(config, project.as_deref()) {
        Ok(shots) if shots.is_empty() => println!("(no shots found)"),
        Ok(shots) => {
            for shot in shots {
                println!("{}\t{}", shot, shot.description());
            }
        }
        Err(err @ (AppError::ShotsDirectoryMissing(_) | AppError::Io { .. })) => {
            warn!(error = %err, "failed to list shots");
            println!("(error listing shots)");
        }
        Err(err) => return Err(err),
    }
    Ok(())
}

pub fn run_roles(config: Option<PathBuf>) -> Result<(), AppError> {
    let roles = api::list_roles(config)?;
    if roles.is_empty() {
        println!("(no roles configured)");
    }
    for role in roles {
        if role.description.is_empty() {
            println!("{}", role.name);
        } else {
            println!("{}\t{}", role.name, role.description);
        }
    }
    Ok(())
}

pub fn run_project(config: Option<PathBuf>, project: Option<PathBuf>) -> Result<(), AppError> {
    let summary = api::project_info(config, project.as_deref())?;
    println!("name:      {}", summary.info.name);
    println!("workspace: {}", summary.info.workspace_root.display());
    println!("prefix:    {}", summary.info.prefix);
    println!("mode:      {}", summary.mode.display_name());
    Ok(())
}
