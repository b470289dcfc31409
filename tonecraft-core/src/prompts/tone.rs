use super::templates::PromptTemplates;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Register the rewritten sentence should be shifted into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Polite,
    Friendly,
    Professional,
}

impl Tone {
    /// Identifier used in configuration and on the command line
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Polite => "polite",
            Self::Friendly => "friendly",
            Self::Professional => "professional",
        }
    }

    /// Label shown in the tone selector
    pub fn label(self) -> &'static str {
        match self {
            Self::Polite => "Polite",
            Self::Friendly => "Friendly",
            Self::Professional => "Professional",
        }
    }

    /// The fixed instruction placed in the `Task:` section of the prompt
    pub fn instruction(self) -> &'static str {
        PromptTemplates::tone_instruction(self)
    }

    /// All tones in selector order
    pub fn all() -> [Tone; 3] {
        [Self::Polite, Self::Friendly, Self::Professional]
    }

    pub fn allowed_values() -> &'static [&'static str] {
        &["polite", "friendly", "professional"]
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Tone {
    type Err = ToneParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim();
        Tone::all()
            .into_iter()
            .find(|tone| normalized.eq_ignore_ascii_case(tone.as_str()))
            .ok_or_else(|| ToneParseError(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for Tone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown tone '{0}'. Expected one of: polite, friendly, professional")]
pub struct ToneParseError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Polite".parse::<Tone>().unwrap(), Tone::Polite);
        assert_eq!("FRIENDLY".parse::<Tone>().unwrap(), Tone::Friendly);
        assert_eq!(" professional ".parse::<Tone>().unwrap(), Tone::Professional);
    }

    #[test]
    fn rejects_unknown_tone() {
        let err = "sarcastic".parse::<Tone>().unwrap_err();
        assert_eq!(err, ToneParseError("sarcastic".to_string()));
        assert!(err.to_string().contains("polite, friendly, professional"));
    }

    #[test]
    fn every_tone_has_a_distinct_instruction() {
        let instructions: Vec<_> = Tone::all().iter().map(|t| t.instruction()).collect();
        assert_eq!(instructions.len(), 3);
        assert_ne!(instructions[0], instructions[1]);
        assert_ne!(instructions[1], instructions[2]);
        for instruction in instructions {
            assert!(instruction.ends_with("Do not add extra information."));
        }
    }

    #[test]
    fn allowed_values_match_identifiers() {
        let ids: Vec<_> = Tone::all().iter().map(|t| t.as_str()).collect();
        assert_eq!(ids, Tone::allowed_values());
    }

    #[test]
    fn deserializes_from_toml_string() {
        #[derive(Deserialize)]
        struct Wrapper {
            tone: Tone,
        }
        let parsed: Wrapper = toml::from_str("tone = \"Friendly\"").unwrap();
        assert_eq!(parsed.tone, Tone::Friendly);
        assert!(toml::from_str::<Wrapper>("tone = \"rude\"").is_err());
    }
}
