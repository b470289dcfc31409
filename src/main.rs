//! ToneCraft CLI entry point
//!
//! Parses arguments, loads `tonecraft.toml`, applies command-line overrides
//! and dispatches to the command handlers in [`cli`].

mod cli;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::path::Path;
use tonecraft_core::cli::args::{Cli, Commands};
use tonecraft_core::config::{ConfigManager, DotenvStatus, ToneCraftConfig, load_dotenv};

#[tokio::main]
async fn main() {
    let args = Cli::parse();

    if let Err(err) = run(args).await {
        eprintln!("{} {err:#}", style("Error:").red().bold());
        std::process::exit(1);
    }
}

async fn run(args: Cli) -> Result<()> {
    let dotenv = load_dotenv();

    let workspace = std::env::current_dir().context("cannot determine current dir")?;

    match args.command_or_default() {
        Commands::Init { force } => {
            logging::init(args.log_level_override(), None);
            dotenv.log();
            cli::handle_init_command(&workspace, force)
        }
        Commands::Rewrite {
            tone,
            sentence,
            output,
        } => {
            let config = setup(&args, &workspace, &dotenv)?;
            let sentence = sentence.join(" ");
            cli::handle_rewrite_command(&config, tone, &sentence, output.as_deref()).await
        }
        Commands::Interactive => {
            let config = setup(&args, &workspace, &dotenv)?;
            cli::handle_interactive_command(&config).await
        }
        Commands::Tones => cli::handle_tones_command(&setup(&args, &workspace, &dotenv)?),
        Commands::Models => cli::handle_models_command(&setup(&args, &workspace, &dotenv)?),
    }
}

/// Load configuration and start logging at the configured level
fn setup(args: &Cli, workspace: &Path, dotenv: &DotenvStatus) -> Result<ToneCraftConfig> {
    let manager = match load_config(args, workspace) {
        Ok(manager) => manager,
        Err(err) => {
            logging::init(args.log_level_override(), None);
            dotenv.log();
            return Err(err);
        }
    };
    let config = manager.config();
    logging::init(args.log_level_override(), Some(&config.logging.level));
    dotenv.log();
    tracing::debug!(
        path = ?manager.config_path(),
        model = %config.rewrite.model,
        temperature = config.rewrite.temperature,
        "configuration loaded"
    );
    Ok(config.clone())
}

/// Load the configuration file and layer the command-line flags on top
fn load_config(args: &Cli, workspace: &Path) -> Result<ConfigManager> {
    let mut manager = match &args.config {
        Some(path) => ConfigManager::load_from_file(path)?,
        None => ConfigManager::load_from_workspace(workspace)?,
    };

    args.apply_overrides(manager.config_mut());
    manager
        .config()
        .validate()
        .context("Invalid command-line options")?;

    Ok(manager)
}
