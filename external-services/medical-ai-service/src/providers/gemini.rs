//! Google Gemini provider (REST `generateContent`)

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::AiConfig;
use crate::error::{AiError, AiResult};
use crate::providers::{GenerationRequest, GenerativeModel};

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<GeminiTool>,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    role: &'static str,
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum GeminiPart {
    Text { text: String },
    InlineData { inline_data: GeminiBlob },
}

#[derive(Debug, Serialize)]
struct GeminiBlob {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
struct GeminiTool {
    google_search: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    #[serde(default)]
    content: Option<GeminiResponseContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponseContent {
    #[serde(default)]
    parts: Vec<GeminiResponsePart>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorResponse {
    error: GeminiError,
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    message: String,
}

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Google Gemini provider implementation
pub struct GeminiProvider {
    client: Client,
    api_url: String,
    api_key: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider
    ///
    /// # Errors
    ///
    /// Fails if the HTTP client cannot be built.
    pub fn new(config: &AiConfig) -> AiResult<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    fn build_request(request: GenerationRequest) -> GeminiRequest {
        let mut parts = vec![GeminiPart::Text { text: request.prompt }];
        parts.extend(request.images.into_iter().map(|image| GeminiPart::InlineData {
            inline_data: GeminiBlob {
                mime_type: image.mime_type,
                data: STANDARD.encode(image.data),
            },
        }));

        let tools = if request.search_grounding {
            vec![GeminiTool {
                google_search: serde_json::Map::new(),
            }]
        } else {
            Vec::new()
        };

        GeminiRequest {
            contents: vec![GeminiContent { role: "user", parts }],
            tools,
        }
    }

    fn extract_text(response: GeminiResponse) -> AiResult<String> {
        let candidate = response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| AiError::InvalidResponse("No candidates in Gemini response".to_string()))?;

        if candidate.finish_reason.as_deref() == Some("SAFETY") {
            return Err(AiError::ContentFiltered("Gemini stopped generation for safety".to_string()));
        }

        let text: String = candidate
            .content
            .map(|content| content.parts.into_iter().filter_map(|part| part.text).collect())
            .unwrap_or_default();

        Ok(text)
    }
}

#[async_trait]
impl GenerativeModel for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, request: GenerationRequest) -> AiResult<String> {
        let url = format!("{}/models/{}:generateContent", self.api_url, request.model);
        debug!(
            model = %request.model,
            images = request.images.len(),
            search_grounding = request.search_grounding,
            "Calling Gemini"
        );

        let body = Self::build_request(request);
        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GeminiErrorResponse>(&error_text)
                .map(|e| e.error.message)
                .unwrap_or(error_text);
            warn!(status = status.as_u16(), error = %message, "Gemini request failed");
            return Err(AiError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GeminiResponse = response
            .json()
            .await
            .map_err(|e| AiError::InvalidResponse(format!("Failed to parse Gemini response: {e}")))?;

        Self::extract_text(parsed)
    }
}
