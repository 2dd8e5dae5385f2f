//! HTTP client service
//!
//! Encapsulates HTTP communication with the VK API

use crate::config::Settings;
use crate::models::VkEnvelope;
use crate::utils::error::{AppError, AppResult};
use anyhow::Context;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error};

/// Query parameter names injected on every call; callers may not supply them
pub const RESERVED_PARAMS: [&str; 2] = ["access_token", "v"];

/// VK API client
#[derive(Debug, Clone)]
pub struct VkClient {
    client: Client,
    settings: Settings,
}

impl VkClient {
    /// Create a new client instance
    pub fn new(settings: Settings) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.vk.timeout))
            .user_agent(format!("{}/{}", crate::NAME, crate::VERSION))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, settings })
    }

    /// Invoke a VK remote method and return its raw success payload
    ///
    /// The access token and API version are injected into the query from
    /// the settings. Transport failures and malformed bodies surface as
    /// [`AppError::ServiceUnavailable`]; an error payload in the envelope
    /// surfaces as [`AppError::Method`] with the code and message copied
    /// verbatim. An envelope without a `response` field yields
    /// `serde_json::Value::Null`.
    pub async fn call(
        &self,
        method: &str,
        params: &[(&str, String)],
    ) -> AppResult<serde_json::Value> {
        if let Some((key, _)) = params.iter().find(|(key, _)| RESERVED_PARAMS.contains(key)) {
            return Err(AppError::ReservedParameter((*key).to_string()));
        }

        debug!("Calling VK method {}", method);

        let url = format!("{}/method/{}", self.settings.vk.base_url, method);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("access_token", self.settings.vk.access_token.as_str()),
                ("v", self.settings.vk.version.as_str()),
            ])
            .query(params)
            .send()
            .await
            .map_err(|e| {
                error!("VK request transport failure: {}", e);
                AppError::ServiceUnavailable(e.to_string())
            })?;

        let envelope: VkEnvelope = response.json().await.map_err(|e| {
            error!("VK response could not be parsed: {}", e);
            AppError::ServiceUnavailable(e.to_string())
        })?;

        if let Some(payload) = envelope.error {
            error!(
                "VK method {} failed: {} ({})",
                method, payload.error_msg, payload.error_code
            );
            return Err(AppError::Method {
                code: payload.error_code,
                message: payload.error_msg,
            });
        }

        debug!("VK method {} completed", method);
        Ok(envelope.response.unwrap_or(serde_json::Value::Null))
    }
}
