//! Utility modules.

/// Log sanitization utilities to keep large or sensitive payloads out of logs.
pub mod log_sanitizer;
