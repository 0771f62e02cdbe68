use std::collections::HashMap;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::server::CareBridgeServer;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub version: String,
    pub uptime: u64,
    pub checks: HashMap<String, String>,
}

/// Version information response
#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub name: String,
    pub version: String,
    pub features: Vec<String>,
}

/// Health check handler
///
/// Reports configuration only; the platform and model are not probed.
pub async fn health_check(State(server): State<CareBridgeServer>) -> Json<HealthResponse> {
    let mut checks = HashMap::new();
    checks.insert("telephony".to_string(), "configured".to_string());
    checks.insert(
        "model_provider".to_string(),
        server.assistant.provider_name().to_string(),
    );

    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime: server.uptime_secs(),
        checks,
    })
}

/// Version information handler
pub async fn version_info(State(server): State<CareBridgeServer>) -> Json<VersionResponse> {
    let features = [
        "voice-agent-calls",
        "healthbot-chat",
        "xray-analysis",
        "prescription-transcription",
        "health-plans",
        "vitals-checkin",
        "notice-interpretation",
        "video-lookup",
    ]
    .iter()
    .map(ToString::to_string)
    .collect();

    Json(VersionResponse {
        name: server.config.name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        features,
    })
}
