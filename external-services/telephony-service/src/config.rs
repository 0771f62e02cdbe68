use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::agents::{AgentKind, AgentRegistry};
use crate::error::{TelephonyError, TelephonyResult};

pub const DEFAULT_API_URL: &str = "https://backend.omnidim.io/api/v1";

/// Agent whose history is served by the call-log listing
pub const DEFAULT_CALL_LOGS_AGENT_ID: u64 = 3015;

/// Voice-agent platform configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TelephonyConfig {
    pub api_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
    pub agents: AgentRegistry,
    pub call_logs_agent_id: u64,
}

impl TelephonyConfig {
    /// Configuration with platform defaults and the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: api_key.into(),
            timeout_secs: 30,
            agents: AgentRegistry::default(),
            call_logs_agent_id: DEFAULT_CALL_LOGS_AGENT_ID,
        }
    }

    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Fails when `OMNIDIM_API_KEY` is missing or an agent id is not numeric.
    pub fn from_env() -> TelephonyResult<Self> {
        let api_key = std::env::var("OMNIDIM_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| TelephonyError::Config("OMNIDIM_API_KEY is not set".to_string()))?;

        let mut config = Self::new(api_key);

        if let Ok(url) = std::env::var("OMNIDIM_API_URL") {
            config.api_url = url;
        }

        config.timeout_secs = std::env::var("OMNIDIM_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(30);

        for kind in AgentKind::ALL {
            if let Some(id) = parse_id_var(kind.env_var())? {
                config.agents.set(kind, id);
            }
        }

        if let Some(id) = parse_id_var("CALL_LOGS_AGENT_ID")? {
            config.call_logs_agent_id = id;
        }

        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn parse_id_var(name: &str) -> TelephonyResult<Option<u64>> {
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| TelephonyError::Config(format!("{name} must be a numeric agent id, got {raw:?}"))),
        Err(_) => Ok(None),
    }
}
