/// Model ID constants for the Gemini models offered in the model picker
pub mod models {
    pub mod google {
        pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-lite";
        pub const SUPPORTED_MODELS: &[&str] = &["gemini-2.5-flash-lite", "gemini-2.5-flash"];

        pub const GEMINI_2_5_FLASH_LITE: &str = "gemini-2.5-flash-lite";
        pub const GEMINI_2_5_FLASH: &str = "gemini-2.5-flash";
    }

    pub const GEMINI_2_5_FLASH_LITE: &str = google::GEMINI_2_5_FLASH_LITE;
    pub const GEMINI_2_5_FLASH: &str = google::GEMINI_2_5_FLASH;
}

/// API endpoints
pub mod urls {
    pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
}

/// Default values used when `tonecraft.toml` does not override them
pub mod defaults {
    use super::models;

    pub const DEFAULT_MODEL: &str = models::google::DEFAULT_MODEL;
    pub const DEFAULT_TEMPERATURE: f32 = 0.3;
    pub const DEFAULT_TOP_P: f32 = 0.95;
    pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 120;
    pub const DEFAULT_API_KEY_ENV: &str = super::env_vars::GEMINI_API_KEY;
    pub const DEFAULT_LOG_LEVEL: &str = "warn";
    pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;
    pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
    pub const DEFAULT_OUTPUT_FILE: &str = "polished_sentence.txt";
    pub const USER_AGENT: &str = concat!("tonecraft/", env!("CARGO_PKG_VERSION"));
}

/// Sampling bounds accepted for generation settings
pub mod generation {
    pub const MIN_TEMPERATURE: f32 = 0.0;
    pub const MAX_TEMPERATURE: f32 = 1.0;
    pub const MIN_TOP_P: f32 = 0.0;
    pub const MAX_TOP_P: f32 = 1.0;
}

/// Environment variables consulted for credentials
pub mod env_vars {
    pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
    /// Also accepted by the Google SDKs
    pub const GOOGLE_API_KEY: &str = "GOOGLE_API_KEY";
}

/// Configuration file locations
pub mod files {
    pub const CONFIG_FILE: &str = "tonecraft.toml";
    pub const CONFIG_DIR: &str = ".tonecraft";
}

/// Terminal messages shared by the command handlers
pub mod messages {
    pub const SPINNER: &str = "Polishing softly…";
    pub const EMPTY_INPUT: &str = "Please type a sentence first.";
    pub const TAGLINE: &str = "Make your message sound softer, in a click.";
}
