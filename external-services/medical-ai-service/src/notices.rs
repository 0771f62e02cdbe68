use serde::{Deserialize, Serialize};

/// Text returned when the model produces nothing usable
pub const FALLBACK_INTERPRETATION: &str = "Error: Could not get a valid response from Gemini API.";

/// Target language for notice interpretation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Hi,
    Te,
    En,
}

impl Language {
    pub fn name(self) -> &'static str {
        match self {
            Language::Hi => "Hindi",
            Language::Te => "Telugu",
            Language::En => "English",
        }
    }

    /// Unicode block the reply is expected to use, if any
    fn script(self) -> Option<(char, char, &'static str)> {
        match self {
            Language::Hi => Some(('\u{0900}', '\u{097F}', "Hindi")),
            Language::Te => Some(('\u{0C00}', '\u{0C7F}', "Telugu")),
            Language::En => None,
        }
    }
}

/// Plain-language reading of a notice
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Interpretation {
    pub text: String,
    pub lang_warning: Option<String>,
}

impl Interpretation {
    pub fn new(language: Language, text: impl Into<String>) -> Self {
        let text = text.into();
        let lang_warning = script_warning(language, &text);
        Self { text, lang_warning }
    }
}

/// Warn when a reply contains no characters of the requested script
pub fn script_warning(language: Language, text: &str) -> Option<String> {
    let (start, end, name) = language.script()?;
    if text.chars().any(|c| (start..=end).contains(&c)) {
        None
    } else {
        Some(format!("Warning: Gemini response may not be in {name} script."))
    }
}
