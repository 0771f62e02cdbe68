use std::sync::Arc;

use chrono::NaiveDate;
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::config::{AiConfig, ModelCatalog};
use crate::error::{AiError, AiResult};
use crate::extraction::{ensure_disclaimer, extract_json_object};
use crate::notices::{Interpretation, Language, FALLBACK_INTERPRETATION};
use crate::prompts::{self, HealthProfile};
use crate::providers::{GeminiProvider, GenerationRequest, GenerativeModel, InlineImage};
use crate::video::VideoLookup;
use crate::vitals::{analyze_locally, CheckinReport, Location, ModelCheckin, VitalsEntry};

/// Outcome of a prescription transcription
#[derive(Debug, Clone, PartialEq)]
pub enum TranscriptionOutcome {
    /// Parsed object with the disclaimer guaranteed
    Parsed(Map<String, Value>),
    /// Model text that held no JSON object
    Unparseable { raw: String },
}

/// High-level medical assistant operations over a generative model
pub struct MedicalAssistant {
    model: Arc<dyn GenerativeModel>,
    models: ModelCatalog,
    search_grounding: bool,
    video: VideoLookup,
}

impl MedicalAssistant {
    /// # Errors
    ///
    /// Fails if the video lookup HTTP client cannot be built.
    pub fn new(model: Arc<dyn GenerativeModel>, config: &AiConfig) -> AiResult<Self> {
        Ok(Self {
            model,
            models: config.models.clone(),
            search_grounding: config.search_grounding,
            video: VideoLookup::new(config.video.clone())?,
        })
    }

    /// Assistant backed by the Gemini REST provider
    ///
    /// # Errors
    ///
    /// Fails if an HTTP client cannot be built.
    pub fn from_config(config: &AiConfig) -> AiResult<Self> {
        let provider = GeminiProvider::new(config)?;
        Self::new(Arc::new(provider), config)
    }

    pub fn provider_name(&self) -> &str {
        self.model.name()
    }

    /// Radiology read of a prepared X-ray/MRI/CT image
    ///
    /// # Errors
    ///
    /// Propagates model failures.
    pub async fn analyze_xray(&self, image: InlineImage) -> AiResult<String> {
        let request = GenerationRequest::text(&self.models.vision, prompts::xray_analysis())
            .with_image(image)
            .with_search_grounding(self.search_grounding);

        let analysis = self.model.generate(request).await?;
        info!(chars = analysis.len(), "X-ray analysis complete");
        Ok(analysis)
    }

    /// Transcribe a prepared prescription image into structured JSON
    ///
    /// # Errors
    ///
    /// Propagates model failures. Output without a JSON object is reported as
    /// [`TranscriptionOutcome::Unparseable`], not as an error.
    pub async fn transcribe_prescription(&self, image: InlineImage) -> AiResult<TranscriptionOutcome> {
        let request = GenerationRequest::text(&self.models.vision, prompts::prescription_transcription())
            .with_image(image);

        let text = self.model.generate(request).await?;

        match extract_json_object(&text) {
            Some(mut transcription) => {
                ensure_disclaimer(&mut transcription);
                Ok(TranscriptionOutcome::Parsed(transcription))
            }
            None => {
                warn!(chars = text.len(), "Prescription transcription held no JSON object");
                Ok(TranscriptionOutcome::Unparseable { raw: text })
            }
        }
    }

    /// # Errors
    ///
    /// Propagates model failures.
    pub async fn health_plan(&self, profile: &HealthProfile) -> AiResult<String> {
        let request = GenerationRequest::text(&self.models.vision, prompts::health_plan(profile))
            .with_search_grounding(self.search_grounding);
        self.model.generate(request).await
    }

    /// Model-backed check-in, falling back to local rules when the model fails
    ///
    /// Returns `None` for an empty entry list.
    pub async fn daily_checkin(
        &self,
        entries: &[VitalsEntry],
        location: Option<&Location>,
        today: NaiveDate,
    ) -> Option<CheckinReport> {
        if entries.is_empty() {
            return None;
        }

        let request = GenerationRequest::text(&self.models.triage, prompts::vitals_analysis(entries));
        match self.model.generate(request).await {
            Ok(text) => Some(CheckinReport::Model(ModelCheckin::new(text, entries, location))),
            Err(e) => {
                warn!(error = %e, "Triage model failed, using local analysis");
                analyze_locally(entries, today).map(CheckinReport::Local)
            }
        }
    }

    /// Simplify and translate a notice for a low-literacy reader
    ///
    /// # Errors
    ///
    /// Only transport failures are errors; an unusable reply becomes the
    /// fallback message.
    pub async fn interpret_notice(&self, text: &str, language: Language) -> AiResult<Interpretation> {
        let request = GenerationRequest::text(&self.models.text, prompts::notice_interpretation(text, language));

        let reply = match self.model.generate(request).await {
            Ok(reply) if !reply.trim().is_empty() => reply,
            Ok(_) => FALLBACK_INTERPRETATION.to_string(),
            Err(e @ AiError::Network(_)) => return Err(e),
            Err(e) => {
                warn!(error = %e, "Notice interpretation failed");
                FALLBACK_INTERPRETATION.to_string()
            }
        };

        Ok(Interpretation::new(language, reply))
    }

    /// Embed URL for a short description
    ///
    /// # Errors
    ///
    /// Propagates model failures.
    pub async fn find_video(&self, description: &str) -> AiResult<String> {
        let description = description.trim();
        let request = GenerationRequest::text(&self.models.media, prompts::video_search(description));
        let reply = self.model.generate(request).await?;
        Ok(self.video.resolve(&reply, description).await)
    }
}
