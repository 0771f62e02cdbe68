//! # Medical AI Service
//!
//! Multimodal model integration for the CareBridge backend.
//!
//! ## Features
//!
//! - **Radiology reads**: X-ray, MRI and CT images analysed with a vision model
//! - **Prescription transcription**: handwritten prescriptions to structured JSON
//! - **Health plans**: personalised nutrition and fitness guidance
//! - **Vitals triage**: model-backed daily check-ins with a rule-based fallback
//! - **Notice interpretation**: plain-language Hindi/Telugu/English readings
//! - **Video lookup**: YouTube embed links with verification and fallbacks
//!
//! ## Example
//!
//! ```rust,no_run
//! use medical_ai_service::{prepare_image, AiConfig, MedicalAssistant, XRAY_WIDTH};
//!
//! # async fn example(upload: Vec<u8>) -> Result<(), Box<dyn std::error::Error>> {
//! let assistant = MedicalAssistant::from_config(&AiConfig::from_env()?)?;
//! let image = prepare_image(&upload, XRAY_WIDTH)?;
//! let report = assistant.analyze_xray(image).await?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

pub mod assistant;
pub mod config;
pub mod error;
pub mod extraction;
pub mod imaging;
pub mod notices;
pub mod prompts;
pub mod providers;
pub mod video;
pub mod vitals;

pub use assistant::{MedicalAssistant, TranscriptionOutcome};
pub use config::{AiConfig, ModelCatalog, VideoLookupConfig};
pub use error::{AiError, AiResult};
pub use extraction::{ensure_disclaimer, extract_json_object, DISCLAIMER};
pub use imaging::{prepare_image, PRESCRIPTION_WIDTH, XRAY_WIDTH};
pub use notices::{Interpretation, Language};
pub use prompts::HealthProfile;
pub use providers::{GeminiProvider, GenerationRequest, GenerativeModel, InlineImage};
pub use video::VideoLookup;
pub use vitals::{CheckinReport, Location, VitalsEntry};
