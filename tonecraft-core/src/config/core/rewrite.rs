use crate::config::constants::{defaults, generation};
use crate::config::models::ModelId;
use crate::prompts::Tone;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

/// `[rewrite]` section: what to ask the model for and how
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RewriteConfig {
    /// Tone preselected in the interactive selector and used by `rewrite` without `--tone`
    #[serde(default)]
    pub default_tone: Tone,

    /// Gemini model id
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature, shown to users as "creativity" (0.0 - 1.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Nucleus sampling cutoff
    #[serde(default = "default_top_p")]
    pub top_p: f32,

    /// Upper bound on the length of the rewritten sentence
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            default_tone: Tone::default(),
            model: default_model(),
            temperature: default_temperature(),
            top_p: default_top_p(),
            max_output_tokens: default_max_output_tokens(),
        }
    }
}

fn default_model() -> String {
    defaults::DEFAULT_MODEL.to_string()
}
fn default_temperature() -> f32 {
    defaults::DEFAULT_TEMPERATURE
}
fn default_top_p() -> f32 {
    defaults::DEFAULT_TOP_P
}
fn default_max_output_tokens() -> u32 {
    defaults::DEFAULT_MAX_OUTPUT_TOKENS
}

impl RewriteConfig {
    /// Parse the configured model string
    pub fn model_id(&self) -> Result<ModelId> {
        self.model
            .parse::<ModelId>()
            .with_context(|| format!("Invalid rewrite.model '{}'", self.model))
    }

    /// Sampling settings to attach to each request
    pub fn generation_settings(&self) -> GenerationSettings {
        GenerationSettings {
            temperature: self.temperature,
            top_p: self.top_p,
            max_output_tokens: self.max_output_tokens,
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.model_id()?;
        self.generation_settings().validate()
    }
}

/// Sampling parameters sent with every rewrite request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationSettings {
    pub temperature: f32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        RewriteConfig::default().generation_settings()
    }
}

impl GenerationSettings {
    pub fn validate(&self) -> Result<()> {
        if !(generation::MIN_TEMPERATURE..=generation::MAX_TEMPERATURE).contains(&self.temperature)
        {
            bail!(
                "temperature must be between {} and {}, got {}",
                generation::MIN_TEMPERATURE,
                generation::MAX_TEMPERATURE,
                self.temperature
            );
        }
        if !(generation::MIN_TOP_P..=generation::MAX_TOP_P).contains(&self.top_p) {
            bail!(
                "top_p must be between {} and {}, got {}",
                generation::MIN_TOP_P,
                generation::MAX_TOP_P,
                self.top_p
            );
        }
        if self.max_output_tokens == 0 {
            bail!("max_output_tokens must be greater than zero");
        }
        Ok(())
    }
}
