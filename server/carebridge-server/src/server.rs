use std::sync::Arc;
use std::time::Instant;

use error_common::{CareBridgeError, Result};
use medical_ai_service::{AiConfig, MedicalAssistant};
use telephony_service::{AgentRegistry, CallPlatform, OmnidimClient, TelephonyConfig};
use tracing::info;

use crate::config::ServerConfig;

/// Main CareBridge server state
#[derive(Clone)]
pub struct CareBridgeServer {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Voice-agent platform client
    pub telephony: Arc<dyn CallPlatform>,
    /// Agent ids per call flow
    pub agents: Arc<AgentRegistry>,
    /// Agent whose call logs `/get-call-logs` lists
    pub call_logs_agent_id: u64,
    /// Multimodal model operations
    pub assistant: Arc<MedicalAssistant>,
    /// Process start, for uptime
    pub started_at: Instant,
}

impl CareBridgeServer {
    pub fn new(
        config: ServerConfig,
        telephony_config: &TelephonyConfig,
        telephony: Arc<dyn CallPlatform>,
        assistant: Arc<MedicalAssistant>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            telephony,
            agents: Arc::new(telephony_config.agents.clone()),
            call_logs_agent_id: telephony_config.call_logs_agent_id,
            assistant,
            started_at: Instant::now(),
        }
    }

    /// Build the server with live platform and model clients from the environment
    ///
    /// # Errors
    ///
    /// Fails when a required API key is missing or a client cannot be built.
    pub fn from_env(config: ServerConfig) -> Result<Self> {
        let telephony_config = TelephonyConfig::from_env().map_err(|e| CareBridgeError::ConfigError(e.to_string()))?;
        let ai_config = AiConfig::from_env().map_err(|e| CareBridgeError::ConfigError(e.to_string()))?;

        let telephony =
            OmnidimClient::new(&telephony_config).map_err(|e| CareBridgeError::ExternalError(e.to_string()))?;
        let assistant =
            MedicalAssistant::from_config(&ai_config).map_err(|e| CareBridgeError::ExternalError(e.to_string()))?;

        info!(
            telephony_url = %telephony_config.api_url,
            vision_model = %ai_config.models.vision,
            search_grounding = ai_config.search_grounding,
            "External clients initialised"
        );

        Ok(Self::new(config, &telephony_config, Arc::new(telephony), Arc::new(assistant)))
    }

    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
