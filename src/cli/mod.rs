//! Command handlers for the `tonecraft` binary

pub mod init;
pub mod interactive;
pub mod models;
pub mod rewrite;
pub mod tones;

pub use init::handle_init_command;
pub use interactive::handle_interactive_command;
pub use models::handle_models_command;
pub use rewrite::handle_rewrite_command;
pub use tones::handle_tones_command;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tonecraft_core::config::{ApiKeySources, ToneCraftConfig, get_gemini_api_key};
use tonecraft_core::llm::error_display::format_llm_error;
use tonecraft_core::llm::{LLMProvider, make_provider};
use tonecraft_core::{RewriteError, Rewriter};

/// Resolve the model and API key, then build the rewriter.
///
/// Fails before any request if the model id is unknown or no key is set.
pub(crate) fn build_rewriter(config: &ToneCraftConfig) -> Result<Rewriter<dyn LLMProvider>> {
    let model = config.rewrite.model_id()?;
    let sources = ApiKeySources::new(config.api.api_key_env.clone(), config.api.api_key.clone());
    let api_key = get_gemini_api_key(&sources)?;
    let provider = make_provider(api_key, model, &config.api)
        .context("Failed to initialize the Gemini client")?;

    Ok(Rewriter::new(
        provider,
        model,
        config.rewrite.generation_settings(),
    ))
}

/// User-facing text for a failed rewrite
pub(crate) fn describe_rewrite_error(provider: &str, error: &RewriteError) -> String {
    match error {
        RewriteError::Provider(err) => format_llm_error(provider, &err.to_string()),
        other => other.to_string(),
    }
}

/// Save the rewritten sentence exactly as returned
pub(crate) fn save_rewrite(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))
}
