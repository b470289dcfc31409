//! Gemini API client
//!
//! Keeps the HTTP client configuration apart from the request and response
//! models of the `generateContent` endpoint.

pub mod client;
pub mod models;

pub use client::{Client, ClientConfig, ClientError};
pub use models::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
    UsageMetadata,
};
