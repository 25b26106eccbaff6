use std::path::PathBuf;

use clap::Subcommand;

use crate::app::api::{self, ContextUpdate, CurrentContext};
use crate::domain::AppError;

#[derive(Subcommand)]
pub enum ContextCommands {
    /// Print the recorded context
    Show,
    /// Change only the given fields
    Set {
        #[arg(long)]
        project: Option<String>,
        #[arg(long)]
        shot: Option<String>,
        #[arg(long)]
        role: Option<String>,
    },
    /// Overwrite all three fields; empty strings clear a field
    Save { project: String, shot: String, role: String },
    /// Forget the recorded context
    Clear,
}

pub fn run_context(config: Option<PathBuf>, command: ContextCommands) -> Result<(), AppError> {
    match command {
        ContextCommands::Show => print_context(&api::show_context(config)?),
        ContextCommands::Set { project, shot, role } => {
            let context = api::set_context(config, ContextUpdate { project, shot, role })?;
            println!("✅ Context updated");
            print_context(&context);
        }
        ContextCommands::Save { project, shot, role } => {
            let context = api::save_context(config, &project, &shot, &role)?;
            println!("✅ Context saved");
            print_context(&context);
        }
        ContextCommands::Clear => {
            api::clear_context(config)?;
            println!("✅ Context cleared");
        }
    }
    Ok(())
}

fn print_context(context: &CurrentContext) {
    let show = |value: &str| if value.is_empty() { "(unset)".to_string() } else { value.to_string() };
    println!("project: {}", show(&context.project));
    println!("shot:    {}", show(&context.shot));
    println!("role:    {}", show(&context.role));
}
