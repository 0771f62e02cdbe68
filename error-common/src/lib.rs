//! Common error handling utilities for CareBridge
//!
//! Process-level error types shared by the server binary and the startup
//! paths of the integration crates. Request-level failures are modelled by
//! each crate's own error enum and mapped to HTTP responses by the server.
//!
//! # Example
//!
//! ```rust
//! use error_common::{CareBridgeError, Result};
//!
//! fn require_key(value: Option<String>) -> Result<String> {
//!     value.ok_or_else(|| CareBridgeError::ConfigError("GEMINI_API_KEY is not set".to_string()))
//! }
//!
//! assert!(require_key(None).is_err());
//! ```

pub mod types;

pub use types::*;
