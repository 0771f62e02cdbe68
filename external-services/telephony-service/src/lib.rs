//! Voice-agent call dispatch for CareBridge
//!
//! Thin client for the hosted voice-agent platform that places scripted
//! outbound calls (symptom screening, medication reminders, post-operative
//! follow-up, appointment booking and doctor approval) and serves the
//! text chat of the health bot agent.
//!
//! Every call is parameterised by a [`CallContext`]: an ad hoc key-value
//! payload the agent's script reads at runtime. Responses are returned in
//! the platform's envelope shape, `{"status": <http status>, "json": <body>}`;
//! [`unwrap_json_envelope`] strips it where callers only want the body.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use telephony_service::{AgentKind, CallContext, CallPlatform, OmnidimClient, TelephonyConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = TelephonyConfig::from_env()?;
//! let client = OmnidimClient::new(&config)?;
//!
//! let context = CallContext::symptom_screening("Asha", "+919876543210");
//! let agent_id = config.agents.id(AgentKind::SymptomScreener);
//! let response = client.dispatch_call(agent_id, "+919876543210", &context).await?;
//! println!("dispatched: {response}");
//! # Ok(())
//! # }
//! ```

pub mod agents;
pub mod client;
pub mod config;
pub mod context;
pub mod envelope;
pub mod error;
pub mod platform;

pub use agents::*;
pub use client::*;
pub use config::*;
pub use context::*;
pub use envelope::*;
pub use error::*;
pub use platform::*;
