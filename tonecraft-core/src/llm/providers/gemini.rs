use crate::config::core::ApiConfig;
use crate::config::models::ModelId;
use crate::gemini::{
    Client, ClientConfig, ClientError, Content, GenerateContentRequest, GenerationConfig, Part,
};
use crate::llm::provider::{FinishReason, LLMError, LLMProvider, LLMRequest, LLMResponse, Usage};
use async_trait::async_trait;
use reqwest::StatusCode;

pub struct GeminiProvider {
    client: Client,
}

impl GeminiProvider {
    pub fn new(api_key: String) -> Result<Self, LLMError> {
        Self::with_model(api_key, ModelId::default())
    }

    pub fn with_model(api_key: String, model: ModelId) -> Result<Self, LLMError> {
        Self::with_client_config(api_key, model, ClientConfig::default())
    }

    /// Build from the `[api]` section of `tonecraft.toml`
    pub fn from_config(
        api_key: String,
        model: ModelId,
        api: &ApiConfig,
    ) -> Result<Self, LLMError> {
        Self::with_client_config(api_key, model, ClientConfig::from_api_config(api))
    }

    pub fn with_client_config(
        api_key: String,
        model: ModelId,
        config: ClientConfig,
    ) -> Result<Self, LLMError> {
        let client = Client::with_config(api_key, model.as_str().to_string(), config)
            .map_err(|e| LLMError::Provider(e.to_string()))?;
        Ok(Self { client })
    }

    fn convert_to_gemini_format(&self, request: &LLMRequest) -> GenerateContentRequest {
        let contents = request
            .messages
            .iter()
            .map(|message| Content {
                role: message.role.as_gemini_str().to_string(),
                parts: vec![Part::text(message.content.clone())],
            })
            .collect();

        let generation_config = GenerationConfig {
            temperature: request.temperature,
            top_p: request.top_p,
            max_output_tokens: request.max_tokens,
        };
        let has_settings = generation_config != GenerationConfig::default();

        GenerateContentRequest {
            contents,
            system_instruction: None,
            generation_config: has_settings.then_some(generation_config),
        }
    }
}

/// Map a client failure onto the provider-independent error taxonomy.
///
/// The upstream message is kept verbatim inside the variant.
pub(crate) fn classify_client_error(error: ClientError) -> LLMError {
    match error {
        ClientError::Api { status, body } => {
            let message = format!("HTTP {status}: {body}");
            let lowered = body.to_lowercase();
            match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    LLMError::Authentication(message)
                }
                StatusCode::TOO_MANY_REQUESTS => LLMError::RateLimit(message),
                _ if lowered.contains("resource_exhausted") || lowered.contains("quota") => {
                    LLMError::RateLimit(message)
                }
                StatusCode::BAD_REQUEST if lowered.contains("api key not valid") => {
                    LLMError::Authentication(message)
                }
                StatusCode::BAD_REQUEST | StatusCode::NOT_FOUND => {
                    LLMError::InvalidRequest(message)
                }
                _ => LLMError::Provider(message),
            }
        }
        ClientError::Transport(e) => {
            if e.is_timeout() {
                LLMError::Network(format!("request timed out: {e}"))
            } else {
                LLMError::Network(e.to_string())
            }
        }
        other @ (ClientError::Decode(_) | ClientError::Build(_)) => {
            LLMError::Provider(other.to_string())
        }
    }
}

#[async_trait]
impl LLMProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, request: LLMRequest) -> Result<LLMResponse, LLMError> {
        self.validate_request(&request)?;
        let gemini_request = self.convert_to_gemini_format(&request);

        let response = self
            .client
            .generate_with_model(&request.model, &gemini_request)
            .await
            .map_err(classify_client_error)?;

        let usage = response.usage_metadata.as_ref().map(|u| Usage {
            prompt_tokens: u.prompt_token_count,
            completion_tokens: u.candidates_token_count,
            total_tokens: u.total_token_count,
        });

        Ok(LLMResponse {
            content: response.text(),
            usage,
            finish_reason: FinishReason::from_gemini(response.finish_reason()),
        })
    }

    fn supported_models(&self) -> Vec<String> {
        ModelId::all_models()
            .iter()
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
