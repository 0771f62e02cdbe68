//! Daily vitals check-in: rule-based triage and emergency detection

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of self-reported vitals
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalsEntry {
    #[serde(default)]
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heart_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub respiratory_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spo2: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glucose: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pain: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Patient coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
pub struct Location {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// A map search link shown to the patient
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapLocation {
    pub name: String,
    pub address: String,
    pub map_url: String,
}

impl MapLocation {
    fn new(name: &str, address: &str, map_url: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            address: address.to_string(),
            map_url: map_url.into(),
        }
    }
}

/// Result of the rule-based analysis
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalAnalysis {
    pub summary: String,
    pub unusual: Vec<String>,
    pub suggestions: String,
    pub locations: Vec<MapLocation>,
    pub today_entry: VitalsEntry,
}

/// Raw model output echoed back to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawModelOutput {
    pub gemini: String,
}

/// Result of a model-backed check-in
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelCheckin {
    pub summary: String,
    pub unusual: Vec<String>,
    pub suggestions: Option<String>,
    pub locations: Vec<MapLocation>,
    pub emergency: bool,
    pub raw: RawModelOutput,
}

impl ModelCheckin {
    pub fn new(text: String, entries: &[VitalsEntry], location: Option<&Location>) -> Self {
        let emergency = entries.first().is_some_and(is_emergency);
        Self {
            summary: text.clone(),
            unusual: Vec::new(),
            suggestions: None,
            locations: if emergency { emergency_locations(location) } else { Vec::new() },
            emergency,
            raw: RawModelOutput { gemini: text },
        }
    }
}

/// Check-in response, either model-backed or the local fallback
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CheckinReport {
    Model(ModelCheckin),
    Local(LocalAnalysis),
}

const ROUTINE_SUGGESTION: &str =
    "No specific urgent suggestions. Continue routine monitoring and contact your clinician if you feel unwell.";

/// Rule-based analysis of the entry dated `today`, or the first entry
///
/// Returns `None` when there are no entries.
pub fn analyze_locally(entries: &[VitalsEntry], today: NaiveDate) -> Option<LocalAnalysis> {
    let today = today.format("%Y-%m-%d").to_string();
    let entry = entries.iter().find(|e| e.date == today).or_else(|| entries.first())?;

    let mut unusual = Vec::new();
    let mut suggestions = Vec::new();

    if let Some(temp) = entry.temperature {
        if temp >= 38.0 {
            unusual.push(format!("Fever: {temp} °C"));
            suggestions.push(
                "Consider antipyretics and monitoring closely; seek urgent care if temperature persists >39°C or other red flags appear.",
            );
        } else if temp < 35.0 {
            unusual.push(format!("Low body temperature: {temp} °C"));
        }
    }

    if let Some(spo2) = entry.spo2 {
        if spo2 < 94.0 {
            unusual.push(format!("Low oxygen saturation: {spo2}%"));
            suggestions.push(
                "Low SpO2 may indicate respiratory compromise; seek medical assessment. If shortness of breath or chest pain present, go to emergency.",
            );
        }
    }

    if let Some(hr) = entry.heart_rate {
        if hr > 120.0 {
            unusual.push(format!("Tachycardia: {hr} bpm"));
            suggestions.push(
                "Fast heart rate may need urgent evaluation if associated with dizziness, fainting, or chest pain.",
            );
        } else if hr < 50.0 {
            unusual.push(format!("Bradycardia: {hr} bpm"));
        }
    }

    if let Some(glucose) = entry.glucose {
        if glucose >= 250.0 {
            unusual.push(format!("High blood glucose: {glucose} mg/dL"));
            suggestions.push(
                "Marked hyperglycemia: check for symptoms (thirst, polyuria) and contact your provider urgently.",
            );
        } else if glucose <= 54.0 {
            unusual.push(format!("Low blood glucose: {glucose} mg/dL"));
            suggestions.push("Hypoglycemia: treat with fast-acting carbohydrate and seek care if symptoms persist.");
        }
    }

    if let Some(pain) = entry.pain.filter(|p| *p >= 7.0) {
        unusual.push(format!("High pain score: {pain}/10"));
        suggestions.push("Severe pain: consider urgent evaluation depending on cause and associated signs.");
    }

    let summary = if unusual.is_empty() {
        format!(
            "Analysis for {}: All reported vitals are within expected ranges for routine monitoring.",
            entry.date
        )
    } else {
        format!(
            "Analysis for {}: Found {} notable finding(s): {}.",
            entry.date,
            unusual.len(),
            unusual.join("; ")
        )
    };

    let suggestions = if suggestions.is_empty() {
        ROUTINE_SUGGESTION.to_string()
    } else {
        suggestions.join("\n")
    };

    Some(LocalAnalysis {
        summary,
        unusual,
        suggestions,
        locations: generic_locations(),
        today_entry: entry.clone(),
    })
}

/// Whether an entry crosses any emergency threshold
pub fn is_emergency(entry: &VitalsEntry) -> bool {
    // Zero readings count as not recorded
    let recorded = |value: Option<f64>| value.filter(|v| *v != 0.0);

    recorded(entry.temperature).is_some_and(|t| t >= 39.0)
        || recorded(entry.spo2).is_some_and(|s| s < 92.0)
        || recorded(entry.heart_rate).is_some_and(|hr| hr > 130.0)
        || recorded(entry.glucose).is_some_and(|g| g >= 300.0)
        || recorded(entry.pain).is_some_and(|p| p >= 8.0)
}

/// Map links to nearby care for an emergency
pub fn emergency_locations(location: Option<&Location>) -> Vec<MapLocation> {
    let coordinates = location.and_then(|l| l.lat.zip(l.lon)).filter(|(lat, lon)| *lat != 0.0 && *lon != 0.0);

    match coordinates {
        Some((lat, lon)) => vec![
            MapLocation::new(
                "Nearest Hospital",
                "Nearby hospitals",
                format!("https://www.google.com/maps/search/hospital/@{lat},{lon},13z"),
            ),
            MapLocation::new(
                "Nearest Clinic",
                "Nearby clinics",
                format!("https://www.google.com/maps/search/clinic/@{lat},{lon},13z"),
            ),
        ],
        None => vec![MapLocation::new(
            "Nearest Hospital",
            "Search hospitals near me",
            "https://www.google.com/maps/search/hospital+near+me",
        )],
    }
}

fn generic_locations() -> Vec<MapLocation> {
    vec![
        MapLocation::new(
            "Nearest Clinic",
            "Search for clinics near you",
            "https://www.google.com/maps/search/clinic+near+me",
        ),
        MapLocation::new(
            "Nearby Hospital",
            "Search for hospitals near you",
            "https://www.google.com/maps/search/hospital+near+me",
        ),
        MapLocation::new(
            "Urgent Care",
            "Search for urgent care near you",
            "https://www.google.com/maps/search/urgent+care+near+me",
        ),
    ]
}
