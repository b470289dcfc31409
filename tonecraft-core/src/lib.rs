//! # tonecraft-core - Runtime for ToneCraft
//!
//! `tonecraft-core` powers the `tonecraft` command line tool. It rewrites a
//! single sentence in one of three tones by filling a fixed prompt template
//! and sending it to Google's Gemini API as one request.
//!
//! ## Architecture Overview
//!
//! - `config/`: `tonecraft.toml` loader, defaults, model ids and API key lookup.
//! - `prompts/`: the [`Tone`] enum and the rewrite prompt template.
//! - `gemini/`: wire types and the HTTP client for `generateContent`.
//! - `llm/`: the [`LLMProvider`] seam and its Gemini implementation.
//! - `rewrite`: [`Rewriter`], which ties the prompt to the provider.
//! - `cli/` and `ui/`: argument parsing, spinner and styled output.
//!
//! ## Quickstart
//!
//! ```rust,no_run
//! use tonecraft_core::config::{ApiConfig, ModelId};
//! use tonecraft_core::llm::make_provider;
//! use tonecraft_core::{GenerationSettings, Rewriter, Tone};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), anyhow::Error> {
//!     let model = ModelId::default();
//!     let provider = make_provider(
//!         std::env::var("GEMINI_API_KEY")?,
//!         model,
//!         &ApiConfig::default(),
//!     )?;
//!     let rewriter = Rewriter::new(provider, model, GenerationSettings::default());
//!
//!     let rewrite = rewriter
//!         .rewrite("send me the report now", Tone::Professional)
//!         .await?;
//!     println!("{}", rewrite.text);
//!     Ok(())
//! }
//! ```
//!
//! Failures are never retried; a provider error reaches the caller as
//! [`RewriteError::Provider`].

pub mod cli;
pub mod config;
pub mod gemini;
pub mod llm;
pub mod prompts;
pub mod rewrite;
pub mod ui;

pub use cli::args::{Cli, Commands};
pub use config::{ConfigManager, GenerationSettings, ModelId, ToneCraftConfig};
pub use llm::{LLMError, LLMProvider};
pub use prompts::{Tone, build_rewrite_prompt};
pub use rewrite::{Rewrite, RewriteError, Rewriter};
