//! ToneCraft configuration module
//!
//! Loads `tonecraft.toml`, resolves the Gemini API key, and holds the
//! constants and model identifiers the rest of the crate relies on.

pub mod api_keys;
pub mod constants;
pub mod core;
pub mod loader;
pub mod models;

pub use api_keys::{ApiKeySources, DotenvStatus, get_gemini_api_key, load_dotenv};
pub use self::core::{ApiConfig, GenerationSettings, LoggingConfig, RewriteConfig};
pub use loader::{ConfigManager, ToneCraftConfig};
pub use models::{ModelId, ModelParseError};
