//! # LLM Integration Layer
//!
//! A small provider abstraction over the hosted model:
//!
//! - [`provider`]: request/response types, the [`LLMProvider`] trait and
//!   the [`LLMError`] taxonomy.
//! - [`providers`]: the Gemini implementation.
//! - [`error_display`]: terminal styling for provider errors.
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use tonecraft_core::config::{ApiConfig, ModelId};
//! use tonecraft_core::llm::{LLMProvider, LLMRequest, make_provider};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = make_provider(
//!     std::env::var("GEMINI_API_KEY")?,
//!     ModelId::Gemini25FlashLite,
//!     &ApiConfig::default(),
//! )?;
//! let request = LLMRequest::from_prompt("gemini-2.5-flash-lite", "Say hi politely.");
//! let response = provider.generate(request).await?;
//! println!("{}", response.content.unwrap_or_default());
//! # Ok(())
//! # }
//! ```
//!
//! There is no retry layer: one call is one request, and its failure is
//! returned as-is.

pub mod client;
pub mod error_display;
pub mod provider;
pub mod providers;

pub use client::{AnyProvider, make_provider};
pub use provider::{FinishReason, LLMError, LLMProvider, LLMRequest, LLMResponse, Message};
pub use providers::GeminiProvider;
