use axum::{
    routing::{get, post},
    Router,
};

use crate::{
    handlers::{calls, health, imaging, media, patient},
    server::CareBridgeServer,
};

/// Create health check routes
pub fn health_routes() -> Router<CareBridgeServer> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/version", get(health::version_info))
}

/// Create voice-agent call and chat routes
pub fn call_routes() -> Router<CareBridgeServer> {
    Router::new()
        .route("/call-patient", post(calls::call_patient))
        .route("/call-doctor", post(calls::call_doctor))
        .route("/call-symptom-screener", post(calls::call_symptom_screener))
        .route("/call-med-reminder", post(calls::call_med_reminder))
        .route("/call-postop-followup", post(calls::call_postop_followup))
        .route("/chat-healthbot", post(calls::chat_healthbot))
        .route("/get-call-status", post(calls::get_call_status))
        .route("/list-agents", get(calls::list_agents))
        .route("/get-call-logs", get(calls::get_call_logs))
}

/// Create image upload routes
pub fn imaging_routes() -> Router<CareBridgeServer> {
    Router::new()
        .route("/analyze-xray", post(imaging::analyze_xray))
        .route("/transcribe-prescription", post(imaging::transcribe_prescription))
}

/// Create patient guidance routes
pub fn patient_routes() -> Router<CareBridgeServer> {
    Router::new()
        .route("/patient/health-plan", post(patient::health_plan))
        .route("/patient/daily-checkin", post(patient::daily_checkin))
        .route("/analyze-vitals", post(patient::analyze_vitals))
}

/// Create assistive media routes
pub fn media_routes() -> Router<CareBridgeServer> {
    Router::new()
        .route("/gemini/interpret", post(media::interpret_notice))
        .route("/gemini/video", post(media::find_video))
}

/// Create all application routes
pub fn create_routes() -> Router<CareBridgeServer> {
    Router::new()
        .merge(health_routes())
        .merge(call_routes())
        .merge(imaging_routes())
        .merge(patient_routes())
        .merge(media_routes())
}
