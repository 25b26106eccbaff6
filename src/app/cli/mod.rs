//! CLI Adapter.

mod context;
mod open;
mod query;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "shotdesk")]
#[command(version)]
#[command(about = "Open the right working file for a shot and role", long_about = None)]
pub struct Cli {
    /// Configuration file (overrides $SHOTDESK_CONFIG and discovery)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Default log filter when `RUST_LOG` is not set.
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Open the latest WIP for a shot and role, creating the first one if needed
    #[clap(visible_alias = "o")]
    Open {
        /// Shot folder name (SHOT_<n> or SCENE_<name>); defaults to the context
        shot: Option<String>,
        /// Role to open
        #[arg(short, long)]
        role: Option<String>,
        /// Project path; recorded into the context
        #[arg(short, long)]
        project: Option<PathBuf>,
    },
    /// Show or change the recorded project, shot and role
    #[clap(visible_alias = "ctx")]
    Context {
        #[command(subcommand)]
        command: context::ContextCommands,
    },
    /// List shots of a project
    Shots {
        /// Project path; defaults to the context
        #[arg(short, long)]
        project: Option<PathBuf>,
    },
    /// List selectable roles
    Roles,
    /// Show project name, workspace root and prefix
    Project {
        /// Project path; defaults to the context
        #[arg(short, long)]
        project: Option<PathBuf>,
    },
}

/// Entry point for the CLI after argument parsing.
pub fn run(cli: Cli) {
    let config = cli.config;

    let result: Result<(), AppError> = match cli.command {
        Commands::Open { shot, role, project } => open::run_open(config, shot, role, project),
        Commands::Context { command } => context::run_context(config, command),
        Commands::Shots { project } => query::run_shots(config, project),
        Commands::Roles => query::run_roles(config),
        Commands::Project { project } => query::run_project(config, project),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_flag_is_global() {
        let cli = Cli::try_parse_from(["shotdesk", "shots", "-v"]).unwrap();
        assert_eq!(cli.log_level(), "debug");

        let cli = Cli::try_parse_from(["shotdesk", "roles"]).unwrap();
        assert_eq!(cli.log_level(), "warn");
    }

    #[test]
    fn open_accepts_optional_shot() {
        let cli = Cli::try_parse_from(["shotdesk", "open", "--role", "LAYOUT"]).unwrap();
        assert!(matches!(cli.command, Commands::Open { shot: None, role: Some(_), .. }));
    }

    #[test]
    fn config_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["shotdesk", "roles", "--config", "/tmp/s.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/s.toml")));
    }
}
