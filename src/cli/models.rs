use anyhow::Result;
use console::style;
use tonecraft_core::ModelId;
use tonecraft_core::config::ToneCraftConfig;

/// Handle the models command
pub fn handle_models_command(config: &ToneCraftConfig) -> Result<()> {
    let current = config.rewrite.model_id()?;

    println!("{}", style("Available Models").bold().underlined());
    println!();

    for model in ModelId::all_models() {
        let is_current = model == current;
        let marker = if is_current { "✦" } else { " " };
        let line = format!("{marker} {:<24}{}", model.as_str(), model.display_name());
        if is_current {
            println!("{}", style(line).green().bold());
        } else {
            println!("{}", style(line).bold());
        }
        println!("    {}", style(model.description()).dim());
    }

    println!();
    println!(
        "{}",
        style("Choose one with --model, or set rewrite.model in tonecraft.toml").dim()
    );
    Ok(())
}
