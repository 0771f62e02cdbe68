//! PII redaction for log output
//!
//! Patient and doctor phone numbers flow through nearly every CareBridge
//! request. They must never reach the logs in clear text, but operators
//! still need to correlate the requests of one caller. Values are therefore
//! replaced by a short SHA-256 digest, so the same number always renders as
//! the same token.
//!
//! # Detected Data Types
//!
//! - **Phone Numbers**: `+91 98765 43210` → `PHONE[q1w2e3r4t5Y=]`
//! - **Email Addresses**: `user@example.com` → `EMAIL[...]`
//! - **IP Addresses**: `192.168.1.1` → `IP[...]`
//!
//! With correlation hashing disabled, fixed masks are used instead
//! (`***-***-****`, `u***@e***`, `192.***.***.1`).
//!
//! # Example
//!
//! ```rust
//! use logger_redacted::mask_phone;
//!
//! let token = mask_phone("+919876543210");
//! assert!(token.starts_with("PHONE["));
//! assert!(!token.contains("9876543210"));
//! ```

pub mod redactor;

pub use redactor::*;
