use axum::{extract::State, Json};
use medical_ai_service::{CheckinReport, HealthProfile, Location, VitalsEntry};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{ApiError, ApiResult};
use crate::extractors::ApiJson;
use crate::server::CareBridgeServer;

#[derive(Debug, Deserialize)]
pub struct AnalyzeVitalsRequest {
    #[serde(default)]
    pub entries: Vec<Value>,
}

#[derive(Debug, Deserialize)]
pub struct DailyCheckinRequest {
    #[serde(rename = "cookieStorage", default)]
    pub entries: Vec<VitalsEntry>,
    #[serde(default)]
    pub location: Option<Location>,
}

/// Personalised nutrition, fitness and lifestyle plan
pub async fn health_plan(
    State(server): State<CareBridgeServer>,
    ApiJson(profile): ApiJson<HealthProfile>,
) -> ApiResult<Json<Value>> {
    let plan = server.assistant.health_plan(&profile).await?;
    Ok(Json(json!({ "success": true, "plan": plan })))
}

/// Retired vitals endpoint; the daily check-in replaces it
pub async fn analyze_vitals(ApiJson(request): ApiJson<AnalyzeVitalsRequest>) -> ApiResult<Json<Value>> {
    if request.entries.is_empty() {
        return Err(ApiError::validation("No vitals provided"));
    }
    Err(ApiError::gone(
        "analyze_vitals removed from this service; use the daily check-in endpoint",
    ))
}

pub async fn daily_checkin(
    State(server): State<CareBridgeServer>,
    ApiJson(request): ApiJson<DailyCheckinRequest>,
) -> ApiResult<Json<CheckinReport>> {
    let today = chrono::Utc::now().date_naive();
    let report = server
        .assistant
        .daily_checkin(&request.entries, request.location.as_ref(), today)
        .await
        .ok_or_else(|| ApiError::validation("No data provided"))?;
    Ok(Json(report))
}
