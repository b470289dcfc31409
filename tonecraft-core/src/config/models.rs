//! Model identification module
//!
//! Centralizes the Gemini model identifiers the user can pick from, so model
//! strings are not scattered through the codebase.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gemini models offered for rewriting
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ModelId {
    /// Gemini 2.5 Flash Lite - fastest and cheapest, good enough for one sentence
    #[default]
    Gemini25FlashLite,
    /// Gemini 2.5 Flash - slightly stronger phrasing at higher latency
    Gemini25Flash,
}

impl ModelId {
    /// Identifier used in API calls and configuration
    pub fn as_str(&self) -> &'static str {
        use crate::config::constants::models;
        match self {
            ModelId::Gemini25FlashLite => models::GEMINI_2_5_FLASH_LITE,
            ModelId::Gemini25Flash => models::GEMINI_2_5_FLASH,
        }
    }

    /// Human-readable model name
    pub fn display_name(&self) -> &'static str {
        match self {
            ModelId::Gemini25FlashLite => "Gemini 2.5 Flash Lite",
            ModelId::Gemini25Flash => "Gemini 2.5 Flash",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ModelId::Gemini25FlashLite => "Fast and cheap",
            ModelId::Gemini25Flash => "Stronger phrasing, a little slower",
        }
    }

    pub fn all_models() -> Vec<ModelId> {
        vec![ModelId::Gemini25FlashLite, ModelId::Gemini25Flash]
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelId {
    type Err = ModelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use crate::config::constants::models;
        // Accept the fully qualified "models/<id>" form used by the REST API
        let id = s.trim();
        let id = id.strip_prefix("models/").unwrap_or(id);
        match id {
            s if s == models::GEMINI_2_5_FLASH_LITE => Ok(ModelId::Gemini25FlashLite),
            s if s == models::GEMINI_2_5_FLASH => Ok(ModelId::Gemini25Flash),
            _ => Err(ModelParseError::InvalidModel(s.to_string())),
        }
    }
}

/// Error returned when a model string is not one of the supported models
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelParseError {
    #[error("Invalid model identifier: '{0}'. Supported models: {supported}", supported = supported_list())]
    InvalidModel(String),
}

fn supported_list() -> String {
    ModelId::all_models()
        .iter()
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
