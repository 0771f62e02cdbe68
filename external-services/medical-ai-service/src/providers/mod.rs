pub mod gemini;

use async_trait::async_trait;

use crate::error::AiResult;

pub use gemini::GeminiProvider;

/// Image attached to a model request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl InlineImage {
    pub fn png(data: Vec<u8>) -> Self {
        Self {
            mime_type: "image/png".to_string(),
            data,
        }
    }
}

/// One prompt (plus optional images) sent to a model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub model: String,
    pub prompt: String,
    pub images: Vec<InlineImage>,
    pub search_grounding: bool,
}

impl GenerationRequest {
    pub fn text(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            images: Vec::new(),
            search_grounding: false,
        }
    }

    #[must_use]
    pub fn with_image(mut self, image: InlineImage) -> Self {
        self.images.push(image);
        self
    }

    #[must_use]
    pub fn with_search_grounding(mut self, enabled: bool) -> Self {
        self.search_grounding = enabled;
        self
    }
}

/// Trait for text/vision generation providers
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Provider name for logs
    fn name(&self) -> &str;

    /// Run the request and return the model's text output
    async fn generate(&self, request: GenerationRequest) -> AiResult<String>;
}
