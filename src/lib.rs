//! VK Friends Online Library
//!
//! Provides the VK API client and the user/friend lookups used by the
//! command-line tool

pub mod config;
pub mod models;
pub mod services;
pub mod utils;

// Re-export common types
pub use config::Settings;
pub use models::User;
pub use services::{normalize_ids, VkClient};
pub use utils::error::{AppError, AppResult};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
