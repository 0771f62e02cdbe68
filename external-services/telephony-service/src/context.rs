use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key-value payload read by an agent's script during a call
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct CallContext(Map<String, Value>);

/// Platform account id derived from a phone number: `PAT-` plus the number without `+`
pub fn account_id(phone: &str) -> String {
    format!("PAT-{}", phone.replace('+', ""))
}

impl CallContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Appointment call placed to a patient
    pub fn patient() -> Self {
        Self::new().with("role", "patient")
    }

    /// Booking approval call placed to a doctor
    pub fn doctor(condition: &str, booking_date: Option<Value>, booking_time: Option<Value>) -> Self {
        Self::new()
            .with("role", "doctor")
            .with("condition", condition)
            .with("booking_date", booking_date.unwrap_or(Value::Null))
            .with("booking_time", booking_time.unwrap_or(Value::Null))
    }

    fn patient_account(patient_name: &str, phone: &str) -> Self {
        Self::new()
            .with("customer_name", patient_name)
            .with("account_id", account_id(phone))
    }

    pub fn symptom_screening(patient_name: &str, phone: &str) -> Self {
        Self::patient_account(patient_name, phone).with("priority", "high")
    }

    pub fn medication_reminder(
        patient_name: &str,
        phone: &str,
        medicine_name: &str,
        dosage: &str,
        reminder_time: &str,
    ) -> Self {
        Self::patient_account(patient_name, phone)
            .with("medicine_name", medicine_name)
            .with("dosage", dosage)
            .with("reminder_time", reminder_time)
            .with("priority", "high")
    }

    /// `days_post_op` is forwarded as sent (string or number)
    pub fn postop_followup(patient_name: &str, phone: &str, surgery_type: &str, days_post_op: Value) -> Self {
        Self::patient_account(patient_name, phone)
            .with("surgery_type", surgery_type)
            .with("days_post_op", days_post_op)
            .with("priority", "high")
    }

    /// Context for a health bot chat turn
    pub fn chat(patient_name: &str) -> Self {
        Self::new().with("customer_name", patient_name)
    }
}
