//! Voice-agent call dispatch, health bot chat and call log handlers

use axum::{extract::State, Json};
use logger_redacted::mask_phone;
use serde::{de::Error as _, Deserialize, Deserializer};
use serde_json::Value;
use telephony_service::{unwrap_json_envelope, AgentKind, CallContext};
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::extractors::{ApiJson, ApiQuery};
use crate::server::CareBridgeServer;
use crate::types::PaginationParams;
use crate::validation::{required, RequestValidation};
use crate::{validate_field, validate_required};

const DEFAULT_PATIENT_NAME: &str = "Demo Patient";
const MISSING_PHONE: &str = "No phoneNumber provided";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallPatientRequest {
    pub phone_number: Option<String>,
    #[serde(rename = "agent_id", default, deserialize_with = "agent_id")]
    pub agent_id: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallDoctorRequest {
    pub phone_number: Option<String>,
    #[serde(rename = "agent_id", default, deserialize_with = "agent_id")]
    pub agent_id: Option<u64>,
    pub condition: Option<String>,
    #[serde(rename = "booking_date")]
    pub booking_date: Option<Value>,
    #[serde(rename = "booking_time")]
    pub booking_time: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomScreenerRequest {
    pub phone_number: Option<String>,
    pub patient_name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedReminderRequest {
    pub phone_number: Option<String>,
    pub patient_name: Option<String>,
    pub medicine_name: Option<String>,
    pub dosage: Option<String>,
    pub reminder_time: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostopFollowupRequest {
    pub phone_number: Option<String>,
    pub patient_name: Option<String>,
    pub surgery_type: Option<String>,
    pub days_post_op: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: Option<String>,
    pub patient_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CallStatusRequest {
    pub call_id: Option<Value>,
}

impl RequestValidation for ChatRequest {
    fn validate(&self) -> Result<(), ApiError> {
        validate_required!(self.message, "No user message provided");
        Ok(())
    }
}

impl CallStatusRequest {
    /// Call id as text; numbers are accepted and stringified
    fn call_id(&self) -> Option<String> {
        match &self.call_id {
            Some(Value::String(id)) if !id.trim().is_empty() => Some(id.trim().to_string()),
            Some(Value::Number(id)) => Some(id.to_string()),
            _ => None,
        }
    }
}

impl RequestValidation for CallStatusRequest {
    fn validate(&self) -> Result<(), ApiError> {
        validate_field!(self.call_id, self.call_id().is_some(), "No call_id provided");
        Ok(())
    }
}

/// Agent id sent as a number or a numeric string
fn agent_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(id)) if id.trim().is_empty() => Ok(None),
        Some(Value::String(id)) => id
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("agent_id must be numeric, got {id:?}"))),
        Some(Value::Number(id)) => id
            .as_u64()
            .map(Some)
            .ok_or_else(|| D::Error::custom("agent_id must be a positive integer")),
        Some(other) => Err(D::Error::custom(format!("agent_id must be numeric, got {other}"))),
    }
}

fn or_default<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    value.unwrap_or(default)
}

async fn dispatch(
    server: &CareBridgeServer,
    agent_id: u64,
    phone: &str,
    context: &CallContext,
) -> ApiResult<Json<Value>> {
    info!(agent_id, phone = %mask_phone(phone), "Dispatching call");
    let response = server.telephony.dispatch_call(agent_id, phone, context).await?;
    Ok(Json(response))
}

/// Appointment call to a patient
pub async fn call_patient(
    State(server): State<CareBridgeServer>,
    ApiJson(request): ApiJson<CallPatientRequest>,
) -> ApiResult<Json<Value>> {
    let phone = required(request.phone_number.as_deref(), MISSING_PHONE)?;
    let agent_id = request
        .agent_id
        .unwrap_or_else(|| server.agents.id(AgentKind::Appointments));

    dispatch(&server, agent_id, phone, &CallContext::patient()).await
}

/// Booking approval call to a doctor
pub async fn call_doctor(
    State(server): State<CareBridgeServer>,
    ApiJson(request): ApiJson<CallDoctorRequest>,
) -> ApiResult<Json<Value>> {
    let phone = required(request.phone_number.as_deref(), MISSING_PHONE)?;
    let agent_id = request
        .agent_id
        .unwrap_or_else(|| server.agents.id(AgentKind::DoctorApproval));
    let context = CallContext::doctor(
        or_default(request.condition.as_deref(), "serious fever"),
        request.booking_date,
        request.booking_time,
    );

    dispatch(&server, agent_id, phone, &context).await
}

pub async fn call_symptom_screener(
    State(server): State<CareBridgeServer>,
    ApiJson(request): ApiJson<SymptomScreenerRequest>,
) -> ApiResult<Json<Value>> {
    let phone = required(request.phone_number.as_deref(), MISSING_PHONE)?;
    let context = CallContext::symptom_screening(
        or_default(request.patient_name.as_deref(), DEFAULT_PATIENT_NAME),
        phone,
    );

    dispatch(&server, server.agents.id(AgentKind::SymptomScreener), phone, &context).await
}

pub async fn call_med_reminder(
    State(server): State<CareBridgeServer>,
    ApiJson(request): ApiJson<MedReminderRequest>,
) -> ApiResult<Json<Value>> {
    let phone = required(request.phone_number.as_deref(), MISSING_PHONE)?;
    let context = CallContext::medication_reminder(
        or_default(request.patient_name.as_deref(), DEFAULT_PATIENT_NAME),
        phone,
        or_default(request.medicine_name.as_deref(), "Paracetamol"),
        or_default(request.dosage.as_deref(), "1 tablet"),
        or_default(request.reminder_time.as_deref(), "20:00"),
    );

    dispatch(&server, server.agents.id(AgentKind::MedReminder), phone, &context).await
}

pub async fn call_postop_followup(
    State(server): State<CareBridgeServer>,
    ApiJson(request): ApiJson<PostopFollowupRequest>,
) -> ApiResult<Json<Value>> {
    let phone = required(request.phone_number.as_deref(), MISSING_PHONE)?;
    let context = CallContext::postop_followup(
        or_default(request.patient_name.as_deref(), DEFAULT_PATIENT_NAME),
        phone,
        or_default(request.surgery_type.as_deref(), "General Surgery"),
        request.days_post_op.unwrap_or_else(|| Value::String("3".to_string())),
    );

    dispatch(&server, server.agents.id(AgentKind::PostopFollowup), phone, &context).await
}

/// One chat turn with the health bot agent
pub async fn chat_healthbot(
    State(server): State<CareBridgeServer>,
    ApiJson(request): ApiJson<ChatRequest>,
) -> ApiResult<Json<Value>> {
    request.validate()?;
    let message = request.message.as_deref().unwrap_or_default();
    let context = CallContext::chat(or_default(request.patient_name.as_deref(), DEFAULT_PATIENT_NAME));

    let response = server
        .telephony
        .chat(server.agents.id(AgentKind::Healthbot), message, &context)
        .await?;
    Ok(Json(unwrap_json_envelope(response)))
}

pub async fn get_call_status(
    State(server): State<CareBridgeServer>,
    ApiJson(request): ApiJson<CallStatusRequest>,
) -> ApiResult<Json<Value>> {
    request.validate()?;
    let call_id = request.call_id().unwrap_or_default();

    let response = server.telephony.get_call(&call_id).await?;
    Ok(Json(unwrap_json_envelope(response)))
}

pub async fn list_agents(
    State(server): State<CareBridgeServer>,
    ApiQuery(params): ApiQuery<PaginationParams>,
) -> ApiResult<Json<Value>> {
    let response = server.telephony.list_agents(params.page(), params.page_size()).await?;
    Ok(Json(unwrap_json_envelope(response)))
}

/// Call logs of the configured call-log agent
pub async fn get_call_logs(
    State(server): State<CareBridgeServer>,
    ApiQuery(params): ApiQuery<PaginationParams>,
) -> ApiResult<Json<Value>> {
    let response = server
        .telephony
        .call_logs(params.page(), params.page_size(), server.call_logs_agent_id)
        .await?;
    Ok(Json(unwrap_json_envelope(response)))
}
