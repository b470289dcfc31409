//! LLM error display utilities
//!
//! Styling only; the message text itself is passed through unchanged.

use console::style;

/// Get a styled error message
pub fn style_llm_error(message: &str) -> String {
    style(message).red().to_string()
}

/// Get a styled provider name
pub fn style_provider_name(provider: &str) -> String {
    let styled_name = match provider.to_lowercase().as_str() {
        "gemini" => style(provider).blue(),
        _ => style(provider).cyan(),
    };
    styled_name.to_string()
}

/// Format an LLM error for display
pub fn format_llm_error(provider: &str, error: &str) -> String {
    let provider_styled = style_provider_name(provider);
    let error_styled = style_llm_error(error);
    format!("{provider_styled} {error_styled}")
}
