//! Prompt templates for each kind of model request

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::notices::Language;
use crate::vitals::VitalsEntry;

/// Entries included in a vitals prompt
pub const MAX_VITALS_ENTRIES: usize = 7;

const XRAY_ANALYSIS: &str = r"
You are a highly skilled medical imaging expert with extensive knowledge in radiology and diagnostic imaging. Analyze the medical image and structure your response as follows:

**Make sure to check if the provided image is X-Ray/MRI/CT scan or not, if the provided image is other than these three categories say so, don't do any analysis**

### 1. Image Type & Region
- Identify imaging modality (X-ray/MRI/CT/Ultrasound/etc.).
- Specify anatomical region and positioning.
- Evaluate image quality and technical adequacy.

### 2. Key Findings
- Highlight primary observations systematically.
- Identify potential abnormalities with detailed descriptions.
- Include measurements and densities where relevant.

### 3. Diagnostic Assessment
- Provide primary diagnosis with confidence level.
- List differential diagnoses ranked by likelihood.
- Support each diagnosis with observed evidence.
- Highlight critical/urgent findings.

### 4. Patient-Friendly Explanation
- Simplify findings in clear, non-technical language.
- Avoid medical jargon or provide easy definitions.
- Include relatable visual analogies.
- **Use a kind, empathetic, and supportive tone. Reassure the patient and offer encouragement, especially if findings may be concerning.**

### 5. Research Context
- Use web search to find recent medical literature.
- Search for standard treatment protocols.
- Provide 2-3 key references supporting the analysis.

**Always include all sections above, even if you are unsure. If you cannot provide a section, write a short, supportive message for the patient in that section.**

Ensure a structured and medically accurate response using clear markdown formatting. Do not include any text outside these sections.
";

const PRESCRIPTION_TRANSCRIPTION: &str = r#"
You are a specialized AI assistant for medical prescription transcription. Your task is to analyze the provided image of a prescription and extract all information into a structured JSON format.

**JSON Output Schema:**
The JSON response MUST strictly follow this schema. Do not add any explanatory text outside of the JSON object.

{
  "patientInfo": {
    "name": "Patient's Name",
    "details": "Patient's age/gender (e.g., 28/m)"
  },
  "prescriptionDate": "DD/MM/YY",
  "clinicInfo": {
    "name": "Clinic or Hospital Name"
  },
  "medications": [
    {
      "name": "Medication Name (e.g., Tab Augmentin 625mg)",
      "dosage": "Dosage string (e.g., 1-0-1)",
      "duration": "Duration (e.g., 5 days)",
      "instructions": "Instructions (e.g., After meals)"
    }
  ],
  "additionalAdvice": [
    {
      "item": "Item name (e.g., Hexigel gum paint)",
      "dosage": "Dosage string (e.g., 1-0-1)",
      "duration": "Duration (e.g., 1 week)",
      "instructions": "Instructions (e.g., Massage)"
    }
  ],
  "disclaimer": "This is an AI-generated transcription. Please verify with a medical professional."
}

**Rules:**
1.  Transcribe the text *exactly* as seen.
2.  For "dosage," use the `1-0-1` (Morning-Afternoon-Night) format if present.
3.  If any information (like patient name or clinic) is not visible, return `null` for that specific field.
4.  If a whole section (like `additionalAdvice`) is missing, return an empty array `[]`.
5.  The disclaimer must be included in the response.
Your Task: Return ONLY a valid JSON object that follows the schema above. Do not include any other commentary or markdown.
"#;

/// Patient profile used to personalise a health plan
///
/// Fields are kept as raw JSON so numbers and strings render the way the
/// client sent them.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HealthProfile {
    #[serde(default = "default_name")]
    pub name: Value,
    #[serde(default)]
    pub age: Value,
    #[serde(default)]
    pub weight: Value,
    #[serde(default)]
    pub height: Value,
    #[serde(default)]
    pub gender: Value,
    #[serde(default)]
    pub activity_level: Value,
    #[serde(default)]
    pub dietary_preference: Value,
    #[serde(default)]
    pub fitness_goal: Value,
    #[serde(default)]
    pub medical_conditions: Value,
    #[serde(default)]
    pub allergies: Value,
    #[serde(default)]
    pub medications: Value,
}

fn default_name() -> Value {
    Value::String("Patient".to_string())
}

impl Default for HealthProfile {
    fn default() -> Self {
        Self {
            name: default_name(),
            age: Value::Null,
            weight: Value::Null,
            height: Value::Null,
            gender: Value::Null,
            activity_level: Value::Null,
            dietary_preference: Value::Null,
            fitness_goal: Value::Null,
            medical_conditions: Value::Null,
            allergies: Value::Null,
            medications: Value::Null,
        }
    }
}

/// Render a profile value: strings verbatim, null as `None`
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Render a list field joined with commas, or `None` when empty
pub fn display_list(value: &Value) -> String {
    match value {
        Value::Array(items) if !items.is_empty() => {
            items.iter().map(display_value).collect::<Vec<_>>().join(", ")
        }
        Value::String(s) if !s.trim().is_empty() => s.clone(),
        _ => "None".to_string(),
    }
}

fn display_reading<T: ToString>(value: Option<&T>) -> String {
    value.map_or_else(|| "None".to_string(), ToString::to_string)
}

pub fn xray_analysis() -> &'static str {
    XRAY_ANALYSIS
}

pub fn prescription_transcription() -> &'static str {
    PRESCRIPTION_TRANSCRIPTION
}

pub fn health_plan(profile: &HealthProfile) -> String {
    format!(
        r"
You are a compassionate, evidence-based digital health coach. Create a comprehensive, safe, and actionable health plan for the following patient:

- Name: {name}
- Age: {age}
- Weight: {weight} kg
- Height: {height} cm
- Gender: {gender}
- Activity Level: {activity}
- Dietary Preference: {diet}
- Fitness Goal: {goal}
- Medical Conditions: {conditions}
- Allergies: {allergies}
- Medications: {medications}

**Instructions:**
- Always structure your response in exactly 5 sections, each starting with the following H2 markdown headings (##):
  - ## 1. Personalized Nutrition Plan
  - ## 2. Personalized Fitness Plan
  - ## 3. Lifestyle & Wellness Tips
  - ## 4. Patient-Friendly Explanation
  - ## 5. References & Research
- Use these exact headings and order so the response can be split and paginated in the frontend.
- Personalize all advice to the above profile.
- Ensure all recommendations are safe for the listed medical conditions, allergies, and medications.
- In the Nutrition Plan, provide a daily meal plan (breakfast, lunch, dinner, snacks) with nutritional breakdown (macros, vitamins) using markdown tables where possible.
- In the Fitness Plan, provide a workout plan (warm-up, main exercises, cool-down) tailored to the goal and ability, using lists or tables.
- In Lifestyle & Wellness Tips, suggest healthy habits (hydration, sleep, stress, etc.) in a clear, actionable way.
- In Patient-Friendly Explanation, summarize the plan in simple, supportive language.
- In References & Research, cite reputable sources or guidelines.
- Use supportive, inclusive, and motivating language throughout.
- If unsure, say so and suggest consulting a healthcare professional.
",
        name = display_value(&profile.name),
        age = display_value(&profile.age),
        weight = display_value(&profile.weight),
        height = display_value(&profile.height),
        gender = display_value(&profile.gender),
        activity = display_value(&profile.activity_level),
        diet = display_value(&profile.dietary_preference),
        goal = display_value(&profile.fitness_goal),
        conditions = display_list(&profile.medical_conditions),
        allergies = display_list(&profile.allergies),
        medications = display_list(&profile.medications),
    )
}

/// One summary line per entry, capped at [`MAX_VITALS_ENTRIES`]
pub fn vitals_summary(entries: &[VitalsEntry]) -> String {
    let mut lines = String::new();
    for entry in entries.iter().take(MAX_VITALS_ENTRIES) {
        if !lines.is_empty() {
            lines.push('\n');
        }
        let _ = write!(
            lines,
            "Date: {}, Temp: {}, HR: {}, SpO2: {}, RR: {}, Glucose: {}, Pain: {}, Notes: {}",
            entry.date,
            display_reading(entry.temperature.as_ref()),
            display_reading(entry.heart_rate.as_ref()),
            display_reading(entry.spo2.as_ref()),
            display_reading(entry.respiratory_rate.as_ref()),
            display_reading(entry.glucose.as_ref()),
            display_reading(entry.pain.as_ref()),
            display_reading(entry.notes.as_ref()),
        );
    }
    lines
}

pub fn vitals_analysis(entries: &[VitalsEntry]) -> String {
    format!(
        "You are a helpful, evidence-based medical assistant. The user provided recent vitals (up to 7 entries):\n\n\
         {}\n\n\
         Please provide a structured analysis with these sections (in plain text):\n\
         1) Brief summary of the current status (one paragraph).\n\
         2) Any concerning or urgent findings (list). If any finding indicates immediate/emergency care is recommended, write the word EMERGENCY: followed by reasons.\n\
         3) Actionable suggestions for the patient (triage, home care, when to see a clinician).\n\
         4) If emergency is identified, recommend the patient to seek immediate care and include what to look for (red flags). Be concise and patient-friendly.",
        vitals_summary(entries)
    )
}

pub fn notice_interpretation(text: &str, language: Language) -> String {
    format!(
        "You are assisting citizens who may not be literate. \
         Analyze the following notice board or government circular text. Do the following:\n\n\
         1. Simplify the meaning into easy everyday language.\n\
         2. Translate into {} if needed.\n\
         3. Return ONLY the plain text explanation, nothing else. Keep sentences short and clear.\n\n\
         Notice text: {text}",
        language.name()
    )
}

pub fn video_search(text: &str) -> String {
    format!(
        "You are a strict, factual media-finder assistant with knowledge up to today. For the user's short description below, locate the single BEST public YouTube video that matches the user's intent. Prefer authoritative channels and more recent uploads when relevance is similar. DO NOT hallucinate or invent video IDs or URLs.\n\n\
         REQUIREMENTS (follow exactly):\n\
         1) Return EXACTLY one line containing only a YouTube embed URL in this format: https://www.youtube.com/embed/VIDEO_ID\n\
         2) Do NOT return any other text, punctuation, explanation, or markup. Only the single embed URL and a trailing newline.\n\
         3) If you would naturally return a watch URL (https://www.youtube.com/watch?v=VIDEO_ID) or a short URL (https://youtu.be/VIDEO_ID), convert it to the embed format above.\n\
         4) If no exact match exists, return the MOST CLOSELY RELATED existing YouTube video you can find (partial match acceptable). Under NO CIRCUMSTANCE return an empty string, 'none', or explanatory text; you must return one embed URL.\n\
         5) Prefer videos from official, reputable channels when possible. Prefer more recent videos when relevance is similar.\n\n\
         User input: {text} with Animation or visuals not humans"
    )
}
