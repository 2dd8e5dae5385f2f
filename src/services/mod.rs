//! Service layer module
//!
//! Contains the raw VK method call wrapper and the domain lookups built
//! on top of it

pub mod api;
pub mod client;

pub use api::normalize_ids;
pub use client::VkClient;
