//! Image upload handlers: X-ray analysis and prescription transcription

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use medical_ai_service::{prepare_image, InlineImage, TranscriptionOutcome, PRESCRIPTION_WIDTH, XRAY_WIDTH};
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::error::{ApiError, ApiResult};
use crate::server::CareBridgeServer;

const UPLOAD_FIELD: &str = "file";

/// An uploaded file part
#[derive(Debug)]
pub struct Upload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Read the `file` part of a multipart form
///
/// # Errors
///
/// `No file uploaded` when the body is not a multipart form or has no `file`
/// part, `No selected file` when the part carries no file name.
pub async fn read_upload(multipart: Result<Multipart, MultipartRejection>) -> ApiResult<Upload> {
    let Ok(mut multipart) = multipart else {
        return Err(ApiError::validation("No file uploaded"));
    };

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().trim().to_string();
        if file_name.is_empty() {
            return Err(ApiError::validation("No selected file"));
        }

        let bytes = field.bytes().await?.to_vec();
        debug!(file_name = %file_name, size = bytes.len(), "Received upload");
        return Ok(Upload { file_name, bytes });
    }

    Err(ApiError::validation("No file uploaded"))
}

/// Decode and scale the upload off the async runtime
async fn prepare(upload: Upload, width: u32) -> ApiResult<InlineImage> {
    let image = tokio::task::spawn_blocking(move || prepare_image(&upload.bytes, width))
        .await
        .map_err(|e| ApiError::internal(format!("Image processing task failed: {e}")))??;
    Ok(image)
}

/// Radiology read of an uploaded scan
///
/// Model failures are reported inside the `gemini` text, not as an HTTP error.
pub async fn analyze_xray(
    State(server): State<CareBridgeServer>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<Json<Value>> {
    let upload = read_upload(multipart).await?;
    let image = prepare(upload, XRAY_WIDTH).await?;

    let analysis = match server.assistant.analyze_xray(image).await {
        Ok(text) => text,
        Err(e) => {
            warn!(error = %e, "X-ray analysis failed");
            format!("Analysis error: {e}")
        }
    };

    Ok(Json(json!({ "gemini": analysis })))
}

pub async fn transcribe_prescription(
    State(server): State<CareBridgeServer>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<Json<Value>> {
    let upload = read_upload(multipart).await?;
    let image = prepare(upload, PRESCRIPTION_WIDTH).await?;

    match server.assistant.transcribe_prescription(image).await? {
        TranscriptionOutcome::Parsed(transcription) => Ok(Json(json!({
            "success": true,
            "transcription": transcription,
        }))),
        TranscriptionOutcome::Unparseable { raw } => Err(ApiError::ModelOutput {
            message: "Failed to parse JSON from AI response".to_string(),
            raw,
        }),
    }
}
