pub mod config;

pub use config::ClientConfig;

use crate::gemini::models::{GenerateContentRequest, GenerateContentResponse};
use reqwest::{Client as ReqwestClient, StatusCode};
use std::time::Instant;
use thiserror::Error;

/// Failure of a single `generateContent` call
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced an HTTP response (DNS, connect, timeout, TLS)
    #[error("request to Gemini API failed: {0}")]
    Transport(#[source] reqwest::Error),
    /// The API answered with a non-success status
    #[error("Gemini API error {status}: {body}")]
    Api { status: StatusCode, body: String },
    /// The API answered 2xx but the body was not a `GenerateContentResponse`
    #[error("invalid response JSON from Gemini API: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
}

#[derive(Clone)]
pub struct Client {
    api_key: String,
    model: String,
    http: ReqwestClient,
    config: ClientConfig,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("model", &self.model)
            .field("base_url", &self.config.base_url)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Create a client with custom configuration
    pub fn with_config(
        api_key: String,
        model: String,
        config: ClientConfig,
    ) -> Result<Self, ClientError> {
        let http = ReqwestClient::builder()
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .pool_idle_timeout(config.pool_idle_timeout)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(ClientError::Build)?;

        Ok(Self {
            api_key,
            model,
            http,
            config,
        })
    }

    fn endpoint(&self, model: &str) -> String {
        let model = model.strip_prefix("models/").unwrap_or(model);
        format!("{}/models/{}:generateContent", self.config.base_url, model)
    }

    /// Generate content with the client's model
    pub async fn generate(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ClientError> {
        self.generate_with_model(&self.model, request).await
    }

    /// Generate content with an explicit model. Sends exactly one request.
    pub async fn generate_with_model(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ClientError> {
        let start_time = Instant::now();
        let url = self.endpoint(model);
        tracing::debug!(%model, "sending generateContent request");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(ClientError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = error_body(response.text().await);
            tracing::debug!(%status, "generateContent returned an error status");
            return Err(ClientError::Api { status, body });
        }

        let data = response
            .json::<GenerateContentResponse>()
            .await
            .map_err(ClientError::Decode)?;

        tracing::debug!(
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            finish_reason = data.finish_reason().unwrap_or("none"),
            "generateContent completed"
        );
        Ok(data)
    }
}

/// Body of an error response, or why it could not be read
fn error_body(text: reqwest::Result<String>) -> String {
    text.unwrap_or_else(|e| format!("<failed to read response body: {e}>"))
}
