use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use dialoguer::Select;
use tracing::warn;

use crate::app::api::{OpenShotOutcome, OpenShotRequest, Shotdesk};
use crate::domain::AppError;

const MENU_REFRESH_OPTION: &str = "[refresh]";

pub fn run_open(
    config: Option<PathBuf>,
    shot: Option<String>,
    role: Option<String>,
    project: Option<PathBuf>,
) -> Result<(), AppError> {
    let interactive = std::io::stdin().is_terminal();
    let mut desk = Shotdesk::load(config)?;

    let (shot, role) = match (shot, role) {
        (Some(shot), role) => (shot, role),
        (None, role) => {
            let context = desk.context();
            match context.shot() {
                // Re-open the recorded focus; an explicit role still wins.
                Some(recorded) if project.is_none() => {
                    let role = role.or_else(|| context.role().map(str::to_string));
                    (recorded.to_string(), role)
                }
                _ if interactive => match prompt_shot(&desk, project.as_deref())? {
                    Some(shot) => (shot, role),
                    None => return Ok(()),
                },
                _ => return Err(AppError::ShotRequired),
            }
        }
    };

    let role = match role {
        Some(role) => Some(role),
        None if interactive => match prompt_role(&desk)? {
            RolePrompt::Selected(role) => Some(role),
            RolePrompt::NotNeeded => None,
            RolePrompt::Cancel => return Ok(()),
        },
        None => None,
    };

    let outcome = desk.open_shot(OpenShotRequest { project, shot, role })?;
    match outcome {
        OpenShotOutcome::Opened { path } => println!("✅ Opened {}", path.display()),
        OpenShotOutcome::CreatedFirstWip { path } => {
            println!("✅ Created first WIP {}", path.display())
        }
        OpenShotOutcome::NoPublish { expected } => {
            println!("⚠️  No publish found at {}", expected.display())
        }
    }
    Ok(())
}

/// Shot menu; the trailing refresh entry drops cached listings and re-lists.
fn prompt_shot(desk: &Shotdesk, project: Option<&Path>) -> Result<Option<String>, AppError> {
    loop {
        let shots = match desk.list_shots(project) {
            Ok(shots) => shots,
            Err(err @ (AppError::ShotsDirectoryMissing(_) | AppError::Io { .. })) => {
                warn!(error = %err, "could not list shots");
                return Err(AppError::ShotRequired);
            }
            Err(err) => return Err(err),
        };
        if shots.is_empty() {
            return Err(AppError::ShotRequired);
        }

        let mut items: Vec<String> = shots.iter().map(|shot| shot.label()).collect();
        items.push(MENU_REFRESH_OPTION.to_string());
        let selection = Select::new()
            .with_prompt("Select shot")
            .items(&items)
            .default(0)
            .interact_opt()
            .map_err(|err| AppError::Host(format!("Failed to select shot: {}", err)))?;

        match selection {
            Some(index) if index == shots.len() => desk.refresh(),
            Some(index) => return Ok(Some(shots[index].to_string())),
            None => return Ok(None),
        }
    }
}

enum RolePrompt {
    Selected(String),
    NotNeeded,
    Cancel,
}

fn prompt_role(desk: &Shotdesk) -> Result<RolePrompt, AppError> {
    let roles = desk.list_roles();
    if roles.len() <= 1 {
        return Ok(RolePrompt::NotNeeded);
    }

    let items: Vec<String> = roles
        .iter()
        .map(|choice| {
            if choice.description.is_empty() {
                choice.label.clone()
            } else {
                format!("{} - {}", choice.label, choice.description)
            }
        })
        .collect();
    let selection = Select::new()
        .with_prompt("Select role")
        .items(&items)
        .default(0)
        .interact_opt()
        .map_err(|err| AppError::Host(format!("Failed to select role: {}", err)))?;

    Ok(match selection {
        Some(index) => RolePrompt::Selected(roles[index].name.to_string()),
        None => RolePrompt::Cancel,
    })
}
