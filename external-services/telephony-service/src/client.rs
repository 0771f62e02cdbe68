use async_trait::async_trait;
use logger_redacted::{mask_phone, redact};
use reqwest::{RequestBuilder, Url};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::TelephonyConfig;
use crate::context::CallContext;
use crate::envelope::envelope;
use crate::error::{TelephonyError, TelephonyResult};
use crate::platform::CallPlatform;

/// REST client for the Omnidimension voice-agent platform
pub struct OmnidimClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
struct DispatchRequest<'a> {
    agent_id: u64,
    to_number: &'a str,
    call_context: &'a CallContext,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
    context: &'a CallContext,
}

impl OmnidimClient {
    /// Create a new platform client
    ///
    /// # Errors
    ///
    /// Fails if the underlying HTTP client cannot be built.
    pub fn new(config: &TelephonyConfig) -> TelephonyResult<Self> {
        let client = reqwest::Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }

    /// Call detail URL with the id escaped as a single path segment
    fn call_url(&self, call_id: &str) -> TelephonyResult<Url> {
        let call_id = call_id.trim();
        if call_id.is_empty() || call_id == "." || call_id == ".." {
            return Err(TelephonyError::InvalidInput(format!("Invalid call id: {call_id:?}")));
        }

        let mut url = Url::parse(&self.url("calls/logs"))
            .map_err(|e| TelephonyError::Config(format!("Invalid platform URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|()| TelephonyError::Config("Platform URL cannot take path segments".to_string()))?
            .push(call_id);
        Ok(url)
    }

    /// Send an authenticated request and wrap the body in the response envelope
    async fn send(&self, request: RequestBuilder) -> TelephonyResult<Value> {
        let response = request.bearer_auth(&self.api_key).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = error_message(&text).unwrap_or_else(|| {
                status.canonical_reason().unwrap_or("request failed").to_string()
            });
            warn!(status = status.as_u16(), error = %redact(&message), "Voice-agent platform request failed");
            return Err(TelephonyError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(Value::String(text))
        };

        Ok(envelope(status.as_u16(), body))
    }
}

/// Pull a readable message out of a platform error body
fn error_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parsed: Option<Value> = serde_json::from_str(trimmed).ok();
    let from_json = parsed.as_ref().and_then(|value| {
        ["error", "message", "detail"]
            .iter()
            .find_map(|key| value.get(*key))
            .map(|field| match field {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
    });
    Some(from_json.unwrap_or_else(|| trimmed.to_string()))
}

#[async_trait]
impl CallPlatform for OmnidimClient {
    async fn dispatch_call(&self, agent_id: u64, to_number: &str, context: &CallContext) -> TelephonyResult<Value> {
        debug!(agent_id, to = %mask_phone(to_number), "Dispatching outbound call");

        let payload = DispatchRequest {
            agent_id,
            to_number,
            call_context: context,
        };
        self.send(self.client.post(self.url("calls/dispatch")).json(&payload)).await
    }

    async fn get_call(&self, call_id: &str) -> TelephonyResult<Value> {
        debug!(call_id, "Fetching call details");
        let url = self.call_url(call_id)?;
        self.send(self.client.get(url)).await
    }

    async fn list_agents(&self, page: u32, page_size: u32) -> TelephonyResult<Value> {
        debug!(page, page_size, "Listing agents");
        let request = self
            .client
            .get(self.url("agents"))
            .query(&[("pageno", page), ("pagesize", page_size)]);
        self.send(request).await
    }

    async fn call_logs(&self, page: u32, page_size: u32, agent_id: u64) -> TelephonyResult<Value> {
        debug!(page, page_size, agent_id, "Listing call logs");
        let request = self.client.get(self.url("calls/logs")).query(&[
            ("pageno", page.to_string()),
            ("pagesize", page_size.to_string()),
            ("agentid", agent_id.to_string()),
        ]);
        self.send(request).await
    }

    async fn chat(&self, agent_id: u64, message: &str, context: &CallContext) -> TelephonyResult<Value> {
        debug!(agent_id, message_len = message.len(), "Sending chat turn");
        let payload = ChatRequest { message, context };
        self.send(self.client.post(self.url(&format!("agents/{agent_id}/chat"))).json(&payload))
            .await
    }
}
