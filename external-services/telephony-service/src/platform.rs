use async_trait::async_trait;
use serde_json::Value;

use crate::context::CallContext;
use crate::error::TelephonyResult;

/// Operations offered by the voice-agent platform
///
/// All operations return the platform's response envelope
/// (`{"status": .., "json": ..}`).
#[async_trait]
pub trait CallPlatform: Send + Sync {
    /// Place an outbound call handled by `agent_id`
    async fn dispatch_call(&self, agent_id: u64, to_number: &str, context: &CallContext) -> TelephonyResult<Value>;

    /// Fetch the details of a single call
    async fn get_call(&self, call_id: &str) -> TelephonyResult<Value>;

    /// List configured agents
    async fn list_agents(&self, page: u32, page_size: u32) -> TelephonyResult<Value>;

    /// List call logs of one agent
    async fn call_logs(&self, page: u32, page_size: u32, agent_id: u64) -> TelephonyResult<Value>;

    /// Send one chat turn to a text agent
    async fn chat(&self, agent_id: u64, message: &str, context: &CallContext) -> TelephonyResult<Value>;
}
