//! Application configuration settings
//!
//! Defines all configuration structures and loading logic

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Default VK API version requested when `VK_API_VERSION` is not set
pub const DEFAULT_API_VERSION: &str = "5.85";

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// VK API configuration
    pub vk: VkConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// VK API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VkConfig {
    /// Access token authorizing calls on behalf of an account
    pub access_token: String,
    /// API version string the service uses to select response schema
    pub version: String,
    /// API base URL
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level or filter directive
    pub level: String,
    /// Log format (text/json)
    pub format: String,
}

impl Settings {
    /// Create a new configuration instance from the environment
    pub fn new() -> Result<Self> {
        // Load .env file if it exists
        dotenv::dotenv().ok();

        let settings = Self {
            vk: VkConfig {
                access_token: env::var("VK_API_ACCESS_TOKEN")
                    .context("VK_API_ACCESS_TOKEN environment variable not set")?,
                version: get_env_or_default("VK_API_VERSION", DEFAULT_API_VERSION),
                base_url: get_env_or_default("VK_API_BASE_URL", "https://api.vk.com"),
                timeout: get_env_or_default("REQUEST_TIMEOUT", "30")
                    .parse()
                    .context("Invalid timeout value")?,
            },
            logging: LoggingConfig {
                level: get_env_or_default("RUST_LOG", "info"),
                format: get_env_or_default("LOG_FORMAT", "text"),
            },
        };

        // Validate configuration
        settings.validate()?;

        Ok(settings)
    }

    /// Validate configuration validity
    fn validate(&self) -> Result<()> {
        if self.vk.access_token.is_empty() {
            anyhow::bail!("VK access token cannot be empty");
        }

        if self.vk.access_token.contains(char::is_whitespace) {
            anyhow::bail!("VK access token cannot contain whitespace characters");
        }

        if self.vk.version.is_empty() {
            anyhow::bail!("VK API version cannot be empty");
        }

        // Validate URL format
        if !self.vk.base_url.starts_with("http") {
            anyhow::bail!("Invalid VK base URL format, should start with 'http'");
        }

        if self.vk.timeout == 0 {
            anyhow::bail!("Timeout value cannot be 0");
        }

        // Validate log format
        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            anyhow::bail!("Invalid log format: {}", self.logging.format);
        }

        Ok(())
    }
}

/// Get environment variable or default value
fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
