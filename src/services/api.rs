//! VK use-case functions
//!
//! Domain-level lookups layered on the raw method call

use crate::models::User;
use crate::services::client::VkClient;
use crate::utils::error::{AppError, AppResult};
use serde_json::Value;
use tracing::debug;

/// Join ids into the comma-separated form VK method parameters expect
///
/// An empty slice yields `None`, which callers translate into "no id
/// filter" (the service then resolves the current authenticated user).
pub fn normalize_ids(ids: &[i64]) -> Option<String> {
    if ids.is_empty() {
        return None;
    }
    Some(
        ids.iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(","),
    )
}

/// Deserialize a success payload into a list, treating `null` as empty
fn into_list<T: serde::de::DeserializeOwned>(raw: Value) -> AppResult<Vec<T>> {
    if raw.is_null() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_value(raw)?)
}

impl VkClient {
    /// Fetch user records for the given ids
    ///
    /// With an empty slice the `user_ids` parameter is omitted and the
    /// service resolves the account behind the access token.
    pub async fn get_users(&self, ids: &[i64]) -> AppResult<Vec<User>> {
        let mut params = Vec::new();
        if let Some(user_ids) = normalize_ids(ids) {
            params.push(("user_ids", user_ids));
        }

        let raw = self.call("users.get", &params).await?;
        into_list(raw)
    }

    /// Fetch a single user by id
    pub async fn get_user(&self, id: i64) -> AppResult<User> {
        self.get_users(&[id])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::UserNotFound(format!("id {}", id)))
    }

    /// Fetch the user behind the configured access token
    pub async fn get_current_user(&self) -> AppResult<User> {
        self.get_users(&[])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::UserNotFound("the current user".to_string()))
    }

    /// Fetch the online friends of the given user
    pub async fn get_friends_online(&self, user_id: i64) -> AppResult<Vec<User>> {
        let raw = self
            .call("friends.getOnline", &[("user_id", user_id.to_string())])
            .await?;
        let friend_ids: Vec<i64> = into_list(raw)?;

        debug!("User {} has {} friends online", user_id, friend_ids.len());

        if friend_ids.is_empty() {
            // A users.get call with no id filter would resolve the token's
            // own account instead of an empty list.
            return Ok(Vec::new());
        }

        self.get_users(&friend_ids).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_ids_empty() {
        assert_eq!(normalize_ids(&[]), None);
    }

    #[test]
    fn test_normalize_ids_joins_with_commas() {
        assert_eq!(normalize_ids(&[1, 2, 3]), Some("1,2,3".to_string()));
        assert_eq!(normalize_ids(&[42]), Some("42".to_string()));
    }

    #[test]
    fn test_into_list_null_is_empty() {
        let ids: Vec<i64> = into_list(Value::Null).unwrap();
        assert!(ids.is_empty());
    }

    #[test]
    fn test_into_list_shape_mismatch_is_serialization_error() {
        let result: AppResult<Vec<i64>> = into_list(json!({"count": 2}));
        assert!(matches!(result, Err(AppError::Serialization(_))));
    }
}
