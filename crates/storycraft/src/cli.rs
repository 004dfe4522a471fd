//! Command-line interface over the local script library.

use crate::StorycraftConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use storycraft_export::{export_file_name, export_script};
use storycraft_interface::ScriptRepository;
use storycraft_storage::JsonScriptRepository;
use uuid::Uuid;

/// AI-assisted screenwriting engine.
#[derive(Debug, Parser)]
#[command(name = "storycraft", version, about)]
pub struct Cli {
    /// Path to the script library (defaults to the platform data directory)
    #[arg(long, global = true)]
    pub library: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List scripts in the library
    List,
    /// Show one script's scenes
    Show {
        /// Script id
        script_id: Uuid,
    },
    /// Export a script to PDF
    Export {
        /// Script id
        script_id: Uuid,
        /// Output file (defaults to the slugified title)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

async fn open_library(cli: &Cli) -> anyhow::Result<JsonScriptRepository> {
    let path = match &cli.library {
        Some(path) => path.clone(),
        None => StorycraftConfig::load()?.library_path()?,
    };
    Ok(JsonScriptRepository::open(path).await?)
}

/// Dispatch a parsed command.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let repo = open_library(&cli).await?;

    match &cli.command {
        Commands::List => {
            let scripts = repo.list().await?;
            if scripts.is_empty() {
                println!("Library is empty.");
                return Ok(());
            }
            for script in scripts {
                println!(
                    "{}  {}  [{}] {} scene(s)",
                    script.id(),
                    script.title(),
                    script.status(),
                    script.scenes().len()
                );
            }
        }
        Commands::Show { script_id } => {
            let Some(script) = repo.get(*script_id).await? else {
                anyhow::bail!("Script {script_id} not found");
            };
            println!("{} ({} / {})", script.title(), script.genre(), script.tone());
            for scene in script.scenes() {
                println!(
                    "\n{}. {} - {}",
                    scene.scene_number(),
                    scene.location().to_uppercase(),
                    scene.time_of_day().to_uppercase()
                );
                if !scene.description().is_empty() {
                    println!("{}", scene.description());
                }
                if !scene.dialogue().is_empty() {
                    println!("{}", scene.dialogue());
                }
            }
        }
        Commands::Export { script_id, output } => {
            let Some(script) = repo.get(*script_id).await? else {
                anyhow::bail!("Script {script_id} not found");
            };
            let bytes = export_script(&script)?;
            let path = output
                .clone()
                .unwrap_or_else(|| PathBuf::from(export_file_name(&script)));
            std::fs::write(&path, bytes)?;
            println!("Exported {} to {}", script.title(), path.display());
        }
    }

    Ok(())
}
