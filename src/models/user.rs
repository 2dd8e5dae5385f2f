//! Domain user entity
//!
//! Defines the `User` record produced from raw VK API responses

use serde::{Deserialize, Serialize};
use std::fmt;

/// A VK user record
///
/// Fields absent from the raw record deserialize to `None`; extra fields
/// in the record are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier assigned by the service
    #[serde(default)]
    pub id: Option<i64>,
    /// First name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl fmt::Display for User {
    /// Renders `id first_name last_name`, with `-` for absent fields
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "{}", id)?,
            None => write!(f, "-")?,
        }
        write!(
            f,
            " {} {}",
            self.first_name.as_deref().unwrap_or("-"),
            self.last_name.as_deref().unwrap_or("-")
        )
    }
}
