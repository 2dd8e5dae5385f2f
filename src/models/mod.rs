//! Data models module
//!
//! Defines the VK wire envelope and the domain user entity

pub mod user;
pub mod vk;

pub use user::User;
pub use vk::{VkEnvelope, VkErrorPayload};
