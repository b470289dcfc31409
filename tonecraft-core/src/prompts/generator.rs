use super::templates::PromptTemplates;
use super::tone::Tone;

/// Fill the rewrite template for `tone` around `sentence`.
///
/// The sentence is trimmed; nothing else about it is altered.
pub fn build_rewrite_prompt(sentence: &str, tone: Tone) -> String {
    let prompt = format!(
        "{preamble}\n\n{task}\n{instruction}\n\n{heading}\n{sentence}",
        preamble = PromptTemplates::rewrite_preamble(),
        task = PromptTemplates::task_heading(),
        instruction = tone.instruction(),
        heading = PromptTemplates::sentence_heading(),
        sentence = sentence.trim(),
    );
    prompt.trim().to_string()
}
