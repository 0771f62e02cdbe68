use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{AiError, AiResult};

pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_THUMBNAIL_BASE: &str = "https://img.youtube.com/vi";
pub const DEFAULT_SEARCH_URL: &str = "https://www.googleapis.com/youtube/v3/search";
pub const DEFAULT_FINAL_FALLBACK_VIDEO_ID: &str = "5qap5aO4i9A";

/// Model used for each kind of request
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ModelCatalog {
    /// X-ray analysis, prescription transcription and health plans
    pub vision: String,
    /// Notice interpretation
    pub text: String,
    /// Vitals triage
    pub triage: String,
    /// Video search
    pub media: String,
}

impl Default for ModelCatalog {
    fn default() -> Self {
        Self {
            vision: "gemini-2.0-flash-exp".to_string(),
            text: "gemini-2.0-flash".to_string(),
            triage: "gemini-2.5-flash".to_string(),
            media: "gemini-2.5-pro".to_string(),
        }
    }
}

/// Video link resolution settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VideoLookupConfig {
    pub youtube_api_key: Option<String>,
    pub fallback_video_id: Option<String>,
    pub final_fallback_video_id: String,
    pub thumbnail_base: String,
    pub search_url: String,
    pub timeout_secs: u64,
}

impl Default for VideoLookupConfig {
    fn default() -> Self {
        Self {
            youtube_api_key: None,
            fallback_video_id: None,
            final_fallback_video_id: DEFAULT_FINAL_FALLBACK_VIDEO_ID.to_string(),
            thumbnail_base: DEFAULT_THUMBNAIL_BASE.to_string(),
            search_url: DEFAULT_SEARCH_URL.to_string(),
            timeout_secs: 10,
        }
    }
}

impl VideoLookupConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Multimodal model service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AiConfig {
    pub api_url: String,
    pub api_key: String,
    pub models: ModelCatalog,
    /// Let the model ground X-ray and health-plan answers in web search results
    pub search_grounding: bool,
    pub timeout_secs: u64,
    pub video: VideoLookupConfig,
}

impl AiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: api_key.into(),
            models: ModelCatalog::default(),
            search_grounding: true,
            timeout_secs: 120,
            video: VideoLookupConfig::default(),
        }
    }

    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Fails when `GEMINI_API_KEY` is not set.
    pub fn from_env() -> AiResult<Self> {
        let api_key = non_empty_var("GEMINI_API_KEY")
            .ok_or_else(|| AiError::Config("Please set your Google API key in GEMINI_API_KEY".to_string()))?;

        let mut config = Self::new(api_key);

        if let Some(url) = non_empty_var("GEMINI_API_URL") {
            config.api_url = url;
        }
        if let Some(model) = non_empty_var("GEMINI_VISION_MODEL") {
            config.models.vision = model;
        }
        if let Some(model) = non_empty_var("GEMINI_TEXT_MODEL") {
            config.models.text = model;
        }
        if let Some(model) = non_empty_var("GEMINI_TRIAGE_MODEL") {
            config.models.triage = model;
        }
        if let Some(model) = non_empty_var("GEMINI_MEDIA_MODEL") {
            config.models.media = model;
        }

        config.search_grounding = std::env::var("GEMINI_SEARCH_GROUNDING")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(true);

        config.timeout_secs = std::env::var("GEMINI_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(120);

        config.video.youtube_api_key = non_empty_var("YOUTUBE_API_KEY");
        config.video.fallback_video_id = non_empty_var("FALLBACK_YT_VIDEO_ID");
        if let Some(id) = non_empty_var("FINAL_FALLBACK_YT_VIDEO_ID") {
            config.video.final_fallback_video_id = id;
        }
        if let Some(base) = non_empty_var("YOUTUBE_THUMBNAIL_BASE") {
            config.video.thumbnail_base = base;
        }
        if let Some(url) = non_empty_var("YOUTUBE_SEARCH_URL") {
            config.video.search_url = url;
        }

        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
