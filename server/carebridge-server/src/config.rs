use std::env;

/// Default upload ceiling for image endpoints
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server name
    pub name: String,
    /// Largest accepted request body, in bytes
    pub max_upload_bytes: usize,
    /// Origins allowed by CORS; `*` allows any
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "CareBridge".to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "https://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
            ],
        }
    }
}

impl ServerConfig {
    /// Load overrides from `CAREBRIDGE_*` environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(bytes) = env::var("CAREBRIDGE_MAX_UPLOAD_BYTES").ok().and_then(|s| s.parse().ok()) {
            config.max_upload_bytes = bytes;
        }

        if let Ok(origins) = env::var("CAREBRIDGE_ALLOWED_ORIGINS") {
            let origins = parse_origins(&origins);
            if !origins.is_empty() {
                config.allowed_origins = origins;
            }
        }

        config
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
