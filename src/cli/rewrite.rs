use super::{build_rewriter, describe_rewrite_error, save_rewrite};
use anyhow::{Result, bail};
use console::style;
use std::path::Path;
use tonecraft_core::config::ToneCraftConfig;
use tonecraft_core::config::constants::messages;
use tonecraft_core::ui::start_loading_spinner;
use tonecraft_core::{RewriteError, Tone};

/// Handle the rewrite command: one sentence, one request, result on stdout
pub async fn handle_rewrite_command(
    config: &ToneCraftConfig,
    tone: Option<Tone>,
    sentence: &str,
    output: Option<&Path>,
) -> Result<()> {
    // Checked here as well so a missing key is never reported for empty input.
    if sentence.trim().is_empty() {
        return Err(RewriteError::EmptyInput.into());
    }

    let tone = tone.unwrap_or(config.rewrite.default_tone);
    let rewriter = build_rewriter(config)?;

    let spinner = start_loading_spinner(messages::SPINNER);
    let result = rewriter.rewrite(sentence, tone).await;
    spinner.finish_and_clear();

    let rewrite = match result {
        Ok(rewrite) => rewrite,
        Err(err) => bail!(describe_rewrite_error(rewriter.provider().name(), &err)),
    };

    println!("{}", rewrite.text);

    if let Some(path) = output {
        save_rewrite(path, &rewrite.text)?;
        eprintln!(
            "{} {}",
            style("Saved to").green(),
            style(path.display()).bold()
        );
    }

    Ok(())
}
