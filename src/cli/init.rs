use anyhow::{Context, Result};
use console::style;
use std::path::Path;
use tonecraft_core::config::ToneCraftConfig;
use tonecraft_core::config::constants::files;

/// Handle the init command
pub fn handle_init_command(workspace: &Path, force: bool) -> Result<()> {
    println!(
        "{}",
        style("Initialize ToneCraft configuration").blue().bold()
    );
    println!("Workspace: {}", workspace.display());

    let created = ToneCraftConfig::bootstrap_project(workspace, force, false)
        .with_context(|| "failed to initialize configuration files")?;

    if created.is_empty() {
        println!(
            "{} {} already exists (use --force to overwrite)",
            style("Skipped:").yellow(),
            workspace.join(files::CONFIG_FILE).display()
        );
    } else {
        for path in created {
            println!("{} {}", style("Created:").green(), path.display());
        }
    }

    Ok(())
}
