//! CLI argument parsing and configuration overrides

use crate::config::constants::defaults;
use crate::config::loader::ToneCraftConfig;
use crate::prompts::Tone;
use clap::{ColorChoice, Parser, Subcommand, ValueHint};
use std::path::PathBuf;

/// Main CLI structure for tonecraft
#[derive(Parser, Debug)]
#[command(
    name = "tonecraft",
    version,
    about = "Rewrite one sentence in a softer tone\n\nTones:\n• polite - short, respectful, and kind\n• friendly - warm, natural, and gentle\n• professional - clear, calm, and formal\n\nQuick Start:\n  export GEMINI_API_KEY=\"your_key\"\n  tonecraft rewrite --tone friendly \"send me the report now\"",
    color = ColorChoice::Auto
)]
pub struct Cli {
    /// Gemini model used for rewriting
    ///
    /// Available models:
    ///   • gemini-2.5-flash-lite - Fastest, lowest cost (default)
    ///   • gemini-2.5-flash - Stronger rewrites, slightly slower
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// **Creativity** (sampling temperature, 0.0 to 1.0)
    ///
    /// Lower values keep the rewrite closer to the original wording.
    #[arg(long, global = true, value_name = "0.0-1.0")]
    pub temperature: Option<f32>,

    /// **API key environment variable**
    ///
    /// Default: GEMINI_API_KEY, falling back to GOOGLE_API_KEY
    #[arg(long, global = true, value_name = "VAR")]
    pub api_key_env: Option<String>,

    /// **Configuration file path**
    ///
    /// Default locations: ./tonecraft.toml, ./.tonecraft/tonecraft.toml,
    /// ~/.tonecraft/tonecraft.toml
    #[arg(long, global = true, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Enable debug logging (request dispatch and HTTP status)
    #[arg(long, global = true)]
    pub debug: bool,

    /// Enable verbose logging
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// **Rewrite one sentence** and print the result
    ///
    /// Example: tonecraft rewrite --tone professional "can you fix this asap"
    #[command(visible_alias = "polish")]
    Rewrite {
        /// Target tone (defaults to rewrite.default_tone)
        #[arg(short, long, value_enum)]
        tone: Option<Tone>,

        /// The sentence to rewrite; separate words are joined with single spaces
        #[arg(value_name = "SENTENCE", required = true, num_args = 1..)]
        sentence: Vec<String>,

        /// Also save the rewritten sentence to a text file
        #[arg(
            short,
            long,
            value_name = "FILE",
            num_args = 0..=1,
            default_missing_value = defaults::DEFAULT_OUTPUT_FILE,
            value_hint = ValueHint::FilePath
        )]
        output: Option<PathBuf>,
    },

    /// **Interactive session**: type a sentence, pick a tone, repeat
    ///
    /// This is the default when no command is given.
    Interactive,

    /// List the available tones and their instructions
    Tones,

    /// List the selectable Gemini models
    Models,

    /// **Write a sample tonecraft.toml** into the current directory
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// Subcommand to run, falling back to the interactive session
    pub fn command_or_default(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Interactive)
    }

    /// Log filter directive from the flags, if any flag asks for one
    pub fn log_level_override(&self) -> Option<&'static str> {
        if self.debug {
            Some("debug")
        } else if self.verbose {
            Some("info")
        } else {
            None
        }
    }

    /// Apply command-line overrides on top of the loaded configuration
    pub fn apply_overrides(&self, config: &mut ToneCraftConfig) {
        if let Some(model) = &self.model {
            config.rewrite.model = model.clone();
        }
        if let Some(temperature) = self.temperature {
            config.rewrite.temperature = temperature;
        }
        if let Some(env) = &self.api_key_env {
            config.api.api_key_env = env.clone();
        }
    }
}
