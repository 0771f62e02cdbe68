use lazy_static::lazy_static;
use regex::Regex;
use serde_json::{Map, Value};

/// Disclaimer every prescription transcription must carry
pub const DISCLAIMER: &str = "This is an AI-generated transcription. Please verify with a medical professional.";

lazy_static! {
    // Greedy: first '{' through last '}'
    static ref JSON_OBJECT_REGEX: Regex = Regex::new(r"\{[\s\S]*\}").unwrap();
}

/// Pull a JSON object out of model output that may carry extra commentary
///
/// The whole text is tried first; failing that, the span from the first `{`
/// to the last `}` is parsed. Anything that is not an object yields `None`.
pub fn extract_json_object(text: &str) -> Option<Map<String, Value>> {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(text.trim()) {
        return Some(map);
    }

    let candidate = JSON_OBJECT_REGEX.find(text)?;
    match serde_json::from_str::<Value>(candidate.as_str()) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

/// Insert the transcription disclaimer if the model left it out or blank
pub fn ensure_disclaimer(transcription: &mut Map<String, Value>) {
    let missing = match transcription.get("disclaimer") {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    };

    if missing {
        transcription.insert("disclaimer".to_string(), Value::String(DISCLAIMER.to_string()));
    }
}
