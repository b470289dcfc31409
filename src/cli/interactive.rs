//! Interactive session
//!
//! Each round asks for a sentence and a tone, shows the spinner while the
//! request runs, prints the result, and then offers what to do next. A failed
//! rewrite is reported and the session carries on.

use super::{build_rewriter, describe_rewrite_error, save_rewrite};
use anyhow::Result;
use console::{Term, style};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use std::path::PathBuf;
use tonecraft_core::config::ToneCraftConfig;
use tonecraft_core::config::constants::{defaults, messages};
use tonecraft_core::ui::{self, Styles, start_loading_spinner};
use tonecraft_core::{LLMProvider, Rewriter, Tone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NextAction {
    Another,
    Save,
    Clear,
    Quit,
}

impl NextAction {
    const ALL: [NextAction; 4] = [
        NextAction::Another,
        NextAction::Save,
        NextAction::Clear,
        NextAction::Quit,
    ];

    fn label(self) -> &'static str {
        match self {
            NextAction::Another => "Polish another sentence",
            NextAction::Save => "Save as .txt",
            NextAction::Clear => "Clear",
            NextAction::Quit => "Quit",
        }
    }
}

/// Handle the interactive command
pub async fn handle_interactive_command(config: &ToneCraftConfig) -> Result<()> {
    let rewriter = build_rewriter(config)?;
    let theme = ColorfulTheme::default();
    let term = Term::stdout();

    print_banner(&rewriter, config);

    let mut tone = config.rewrite.default_tone;
    loop {
        let sentence: String = Input::with_theme(&theme)
            .with_prompt("Your sentence")
            .allow_empty(true)
            .interact_text()?;
        if sentence.trim().is_empty() {
            ui::warning(messages::EMPTY_INPUT);
            continue;
        }

        tone = select_tone(&theme, tone)?;

        let spinner = start_loading_spinner(messages::SPINNER);
        let result = rewriter.rewrite(&sentence, tone).await;
        spinner.finish_and_clear();

        let rewrite = match result {
            Ok(rewrite) => rewrite,
            Err(err) => {
                ui::error(&describe_rewrite_error(rewriter.provider().name(), &err));
                continue;
            }
        };

        println!();
        println!(
            "{}",
            Styles::header().apply_to(format!("Polished sentence ({})", rewrite.tone))
        );
        ui::styled(&Styles::result(), &rewrite.text);
        println!();

        match next_action(&theme, &rewrite.text)? {
            NextAction::Another | NextAction::Save => {}
            NextAction::Clear => {
                term.clear_screen()?;
                print_banner(&rewriter, config);
            }
            NextAction::Quit => break,
        }
    }

    Ok(())
}

fn print_banner(rewriter: &Rewriter<dyn LLMProvider>, config: &ToneCraftConfig) {
    ui::header("ToneCraft");
    println!("{}", messages::TAGLINE);
    println!(
        "{}",
        style(format!(
            "Model: {}  Creativity: {:.2}  (Ctrl+C to quit)",
            rewriter.model().display_name(),
            config.rewrite.temperature
        ))
        .dim()
    );
    println!();
}

fn select_tone(theme: &ColorfulTheme, current: Tone) -> Result<Tone> {
    let tones = Tone::all();
    let labels: Vec<&str> = tones.iter().map(|tone| tone.label()).collect();
    let default = tones.iter().position(|tone| *tone == current).unwrap_or(0);

    let selection = Select::with_theme(theme)
        .with_prompt("Tone")
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(tones.get(selection).copied().unwrap_or(current))
}

/// Ask what to do with the result; saving returns to the same menu
fn next_action(theme: &ColorfulTheme, text: &str) -> Result<NextAction> {
    let labels: Vec<&str> = NextAction::ALL.iter().map(|action| action.label()).collect();

    loop {
        let selection = Select::with_theme(theme)
            .with_prompt("Next")
            .items(&labels)
            .default(0)
            .interact()?;
        let action = NextAction::ALL
            .get(selection)
            .copied()
            .unwrap_or(NextAction::Another);

        if action != NextAction::Save {
            return Ok(action);
        }

        let file: String = Input::with_theme(theme)
            .with_prompt("File name")
            .default(defaults::DEFAULT_OUTPUT_FILE.to_string())
            .interact_text()?;
        let path = PathBuf::from(file);
        match save_rewrite(&path, text) {
            Ok(()) => ui::success(&format!("Saved to {}", path.display())),
            Err(err) => ui::error(&format!("{err:#}")),
        }
    }
}
