use super::tone::Tone;

/// Prompt template collection
pub struct PromptTemplates;

impl PromptTemplates {
    /// Role and rules shared by every tone
    pub fn rewrite_preamble() -> &'static str {
        "You are a helpful writing assistant. Your goal is to rewrite one sentence with a bright, supportive vibe.\n\
         Rules:\n\
         - Preserve the original meaning.\n\
         - Output ONLY the rewritten sentence. No quotes, no bullet points, no explanations.\n\
         - Keep it concise (1 sentence).\n\
         - Avoid harsh language or negativity; keep it calm and kind."
    }

    /// Tone-specific task instruction
    pub fn tone_instruction(tone: Tone) -> &'static str {
        match tone {
            Tone::Polite => {
                "Rewrite the sentence politely. Keep it short, respectful, and kind. \
                 Do not add extra information."
            }
            Tone::Friendly => {
                "Rewrite the sentence in a warm, friendly tone. Keep it natural and gentle. \
                 Do not add extra information."
            }
            Tone::Professional => {
                "Rewrite the sentence in a professional tone (clear, calm, formal). \
                 Do not add extra information."
            }
        }
    }

    pub fn task_heading() -> &'static str {
        "Task:"
    }

    pub fn sentence_heading() -> &'static str {
        "Sentence:"
    }
}
