use anyhow::Result;
use console::style;
use tonecraft_core::Tone;
use tonecraft_core::config::ToneCraftConfig;

/// Handle the tones command
pub fn handle_tones_command(config: &ToneCraftConfig) -> Result<()> {
    println!("{}", style("Available Tones").bold().underlined());
    println!();

    for tone in Tone::all() {
        let is_default = tone == config.rewrite.default_tone;
        let marker = if is_default { "✦" } else { " " };
        let name = format!("{marker} {:<13}", tone.as_str());
        if is_default {
            println!("{}", style(name).green().bold());
        } else {
            println!("{}", style(name).bold());
        }
        println!("    {}", style(tone.instruction()).dim());
    }

    println!();
    println!(
        "{}",
        style("Choose one with --tone, or set rewrite.default_tone in tonecraft.toml").dim()
    );
    Ok(())
}
