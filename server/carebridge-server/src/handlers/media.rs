//! Assistive media: notice interpretation and explainer video lookup

use axum::{extract::State, Json};
use medical_ai_service::{Interpretation, Language};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiResult;
use crate::extractors::ApiJson;
use crate::server::CareBridgeServer;

#[derive(Debug, Deserialize)]
pub struct InterpretRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub language: Language,
}

#[derive(Debug, Deserialize)]
pub struct VideoRequest {
    #[serde(default)]
    pub text: String,
}

pub async fn interpret_notice(
    State(server): State<CareBridgeServer>,
    ApiJson(request): ApiJson<InterpretRequest>,
) -> ApiResult<Json<Interpretation>> {
    let interpretation = server
        .assistant
        .interpret_notice(&request.text, request.language)
        .await?;
    Ok(Json(interpretation))
}

pub async fn find_video(
    State(server): State<CareBridgeServer>,
    ApiJson(request): ApiJson<VideoRequest>,
) -> ApiResult<Json<Value>> {
    let embed_url = server.assistant.find_video(&request.text).await?;
    Ok(Json(json!({ "embedUrl": embed_url })))
}
