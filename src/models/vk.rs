//! VK API wire models
//!
//! Defines the response envelope returned by every VK method call

use serde::{Deserialize, Serialize};

/// Envelope wrapping every VK method response
///
/// A successful call carries the payload under `response`; a failed call
/// carries an [`VkErrorPayload`] under `error`. Both fields may be absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VkEnvelope {
    /// Success payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<serde_json::Value>,
    /// Application-level failure reported by the service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<VkErrorPayload>,
}

/// Application-level error payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VkErrorPayload {
    /// Error code defined by the remote service
    pub error_code: i64,
    /// Human-readable error message
    pub error_msg: String,
}
