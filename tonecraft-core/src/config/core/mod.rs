pub mod api;
pub mod logging;
pub mod rewrite;

pub use api::ApiConfig;
pub use logging::LoggingConfig;
pub use rewrite::{GenerationSettings, RewriteConfig};
