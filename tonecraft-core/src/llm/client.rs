use super::provider::{LLMError, LLMProvider};
use super::providers::GeminiProvider;
use crate::config::core::ApiConfig;
use crate::config::models::ModelId;

/// Type-erased provider
pub type AnyProvider = Box<dyn LLMProvider>;

/// Create the provider serving `model`
pub fn make_provider(
    api_key: String,
    model: ModelId,
    api: &ApiConfig,
) -> Result<AnyProvider, LLMError> {
    Ok(Box::new(GeminiProvider::from_config(api_key, model, api)?))
}
