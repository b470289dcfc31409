//! Tone-prompt dispatch
//!
//! Takes a sentence and a [`Tone`], fills the tone's template, sends one
//! request to the provider, and hands back the model's text as-is. There is
//! no retry, fallback, or caching: an upstream failure is returned to the
//! caller unchanged.

use crate::config::constants::messages;
use crate::config::core::GenerationSettings;
use crate::config::models::ModelId;
use crate::llm::provider::{FinishReason, LLMError, LLMProvider, LLMRequest, Message};
use crate::prompts::{Tone, build_rewrite_prompt};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RewriteError {
    /// Nothing to rewrite; no request was sent
    #[error("{}", messages::EMPTY_INPUT)]
    EmptyInput,
    /// The model answered without any text
    #[error("The model returned an empty response. Please try again.")]
    EmptyResponse,
    #[error(transparent)]
    Provider(#[from] LLMError),
}

/// Result of one successful rewrite
#[derive(Debug, Clone, PartialEq)]
pub struct Rewrite {
    pub tone: Tone,
    pub model: ModelId,
    /// Model output, unmodified
    pub text: String,
    pub finish_reason: FinishReason,
}

/// Sends rewrite requests through an [`LLMProvider`]
pub struct Rewriter<P: ?Sized> {
    model: ModelId,
    settings: GenerationSettings,
    provider: Box<P>,
}

impl<P: LLMProvider + ?Sized> Rewriter<P> {
    pub fn new(provider: Box<P>, model: ModelId, settings: GenerationSettings) -> Self {
        Self {
            model,
            settings,
            provider,
        }
    }

    pub fn model(&self) -> ModelId {
        self.model
    }

    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// The request that [`Rewriter::rewrite`] would send for `sentence`
    pub fn build_request(&self, sentence: &str, tone: Tone) -> LLMRequest {
        LLMRequest {
            messages: vec![Message::user(build_rewrite_prompt(sentence, tone))],
            model: self.model.as_str().to_string(),
            max_tokens: Some(self.settings.max_output_tokens),
            temperature: Some(self.settings.temperature),
            top_p: Some(self.settings.top_p),
        }
    }

    /// Rewrite `sentence` in `tone`.
    ///
    /// An empty or whitespace-only sentence is rejected before any request
    /// is made.
    pub async fn rewrite(&self, sentence: &str, tone: Tone) -> Result<Rewrite, RewriteError> {
        if sentence.trim().is_empty() {
            return Err(RewriteError::EmptyInput);
        }

        let request = self.build_request(sentence, tone);
        tracing::debug!(
            provider = self.provider.name(),
            model = %self.model,
            %tone,
            chars = sentence.trim().chars().count(),
            "dispatching rewrite"
        );

        let response = self.provider.generate(request).await.map_err(|err| {
            tracing::debug!(error = %err, "rewrite request failed");
            RewriteError::from(err)
        })?;

        let text = match response.content {
            Some(text) if !text.trim().is_empty() => text,
            _ => {
                tracing::debug!(finish_reason = ?response.finish_reason, "empty rewrite response");
                return Err(RewriteError::EmptyResponse);
            }
        };

        Ok(Rewrite {
            tone,
            model: self.model,
            text,
            finish_reason: response.finish_reason,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::provider::LLMResponse;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Echo {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl LLMProvider for Echo {
        fn name(&self) -> &str {
            "echo"
        }

        async fn generate(&self, request: LLMRequest) -> Result<LLMResponse, LLMError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(LLMResponse::text(request.prompt().unwrap_or_default()))
        }

        fn supported_models(&self) -> Vec<String> {
            vec![]
        }
    }

    fn rewriter() -> Rewriter<Echo> {
        Rewriter::new(
            Box::new(Echo {
                calls: AtomicUsize::new(0),
            }),
            ModelId::Gemini25Flash,
            GenerationSettings::default(),
        )
    }

    #[test]
    fn request_carries_model_and_settings() {
        let request = rewriter().build_request("Send me the file.", Tone::Polite);
        assert_eq!(request.model, "gemini-2.5-flash");
        assert_eq!(request.max_tokens, Some(120));
        assert_eq!(request.temperature, Some(0.3));
        assert_eq!(request.top_p, Some(0.95));
        assert_eq!(request.messages.len(), 1);
    }

    #[tokio::test]
    async fn whitespace_input_is_rejected_without_a_call() {
        let rewriter = rewriter();
        for input in ["", "   ", "\n\t"] {
            assert_eq!(
                rewriter.rewrite(input, Tone::Friendly).await,
                Err(RewriteError::EmptyInput)
            );
        }
        assert_eq!(rewriter.provider().calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn returns_provider_text() {
        let rewriter = rewriter();
        let rewrite = rewriter.rewrite("Send me the file.", Tone::Professional).await.unwrap();
        assert_eq!(rewrite.tone, Tone::Professional);
        assert_eq!(rewrite.model, ModelId::Gemini25Flash);
        assert!(rewrite.text.contains(Tone::Professional.instruction()));
        assert_eq!(rewriter.provider().calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn error_messages_are_user_facing() {
        assert_eq!(
            RewriteError::EmptyInput.to_string(),
            "Please type a sentence first."
        );
        let err = RewriteError::from(LLMError::RateLimit("HTTP 429".to_string()));
        assert_eq!(err.to_string(), "Rate limit exceeded: HTTP 429");
    }
}
