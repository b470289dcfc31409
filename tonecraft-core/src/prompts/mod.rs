//! Tone-specific prompt templates
//!
//! Three fixed templates, one per [`Tone`], each wrapping the user's sentence
//! with the same rules and a tone-specific task instruction.

pub mod generator;
pub mod templates;
pub mod tone;

pub use generator::build_rewrite_prompt;
pub use templates::PromptTemplates;
pub use tone::{Tone, ToneParseError};
