//! API key management for retrieving the Gemini credential from environment
//! variables, `.env` files, and the configuration file.
//!
//! Environment variables win over the configuration file so a key never has
//! to be written to disk.

use crate::config::constants::env_vars;
use anyhow::Result;
use std::env;
use std::path::PathBuf;

/// Where to look for the Gemini API key
#[derive(Debug, Clone)]
pub struct ApiKeySources {
    /// Primary environment variable name (`GEMINI_API_KEY` unless overridden)
    pub gemini_env: String,
    /// API key from the configuration file
    pub gemini_config: Option<String>,
}

impl Default for ApiKeySources {
    fn default() -> Self {
        Self {
            gemini_env: env_vars::GEMINI_API_KEY.to_string(),
            gemini_config: None,
        }
    }
}

impl ApiKeySources {
    pub fn new(gemini_env: impl Into<String>, gemini_config: Option<String>) -> Self {
        Self {
            gemini_env: gemini_env.into(),
            gemini_config,
        }
    }
}

/// What happened when looking for a `.env` file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DotenvStatus {
    Loaded(PathBuf),
    NotFound,
    /// The file exists but could not be read or parsed
    Invalid(String),
}

impl DotenvStatus {
    fn from_result(result: std::result::Result<PathBuf, dotenvy::Error>) -> Self {
        match result {
            Ok(path) => Self::Loaded(path),
            Err(dotenvy::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Self::NotFound
            }
            Err(e) => Self::Invalid(e.to_string()),
        }
    }

    /// Report the outcome. Call this once a subscriber is installed.
    pub fn log(&self) {
        match self {
            Self::Loaded(path) => {
                tracing::debug!(path = %path.display(), "loaded environment variables from .env");
            }
            Self::NotFound => {}
            Self::Invalid(error) => {
                tracing::warn!(%error, "failed to load .env file, continuing without it");
            }
        }
    }
}

/// Load environment variables from a `.env` file in the current directory.
///
/// Nothing is logged here since this runs before logging is configured; pass
/// the returned status to [`DotenvStatus::log`] afterwards.
pub fn load_dotenv() -> DotenvStatus {
    DotenvStatus::from_result(dotenvy::dotenv())
}

/// Get the Gemini API key.
///
/// Lookup order:
/// 1. the configured environment variable (`GEMINI_API_KEY` by default)
/// 2. `GOOGLE_API_KEY`
/// 3. `api.api_key` from `tonecraft.toml`
///
/// Empty values are treated as unset.
pub fn get_gemini_api_key(sources: &ApiKeySources) -> Result<String> {
    resolve_api_key(sources, |name| env::var(name).ok())
}

fn resolve_api_key(
    sources: &ApiKeySources,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<String> {
    let non_empty = |name: &str| lookup(name).filter(|value| !value.is_empty());

    if let Some(key) = non_empty(sources.gemini_env.as_str()) {
        return Ok(key);
    }

    if let Some(key) = non_empty(env_vars::GOOGLE_API_KEY) {
        return Ok(key);
    }

    if let Some(key) = &sources.gemini_config {
        if !key.is_empty() {
            return Ok(key.clone());
        }
    }

    Err(anyhow::anyhow!(
        "Missing API key. Set {} or {} (or add it to a .env file), or configure api.api_key in tonecraft.toml",
        sources.gemini_env,
        env_vars::GOOGLE_API_KEY
    ))
}
