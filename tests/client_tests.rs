//! API client integration tests
//!
//! Exercise the raw method call wrapper against a mock VK server

use httpmock::prelude::*;
use serde_json::json;
use vkfriends::config::{LoggingConfig, VkConfig};
use vkfriends::{AppError, Settings, VkClient};

/// Create settings pointing at the given base URL
fn test_settings(base_url: String) -> Settings {
    Settings {
        vk: VkConfig {
            access_token: "test-token".to_string(),
            version: "5.85".to_string(),
            base_url,
            timeout: 5,
        },
        logging: LoggingConfig {
            level: "info".to_string(),
            format: "text".to_string(),
        },
    }
}

fn test_client(server: &MockServer) -> VkClient {
    VkClient::new(test_settings(server.base_url())).expect("Failed to create test client")
}

#[tokio::test]
async fn test_success_payload_returned_unchanged() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/method/users.get")
                .query_param("access_token", "test-token")
                .query_param("v", "5.85");
            then.status(200)
                .json_body(json!({"response": [{"id": 1, "first_name": "A"}]}));
        })
        .await;

    let client = test_client(&server);
    let value = client.call("users.get", &[]).await.unwrap();

    mock.assert_async().await;
    assert_eq!(value, json!([{"id": 1, "first_name": "A"}]));
}

#[tokio::test]
async fn test_method_parameters_forwarded_in_query() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/method/friends.getOnline")
                .query_param("access_token", "test-token")
                .query_param("v", "5.85")
                .query_param("user_id", "42");
            then.status(200).json_body(json!({"response": []}));
        })
        .await;

    let client = test_client(&server);
    client
        .call("friends.getOnline", &[("user_id", "42".to_string())])
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_error_payload_maps_to_method_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/method/users.get");
            then.status(200).json_body(json!({
                "error": {"error_code": 5, "error_msg": "User authorization failed"}
            }));
        })
        .await;

    let client = test_client(&server);
    let error = client.call("users.get", &[]).await.unwrap_err();

    match error {
        AppError::Method { code, message } => {
            assert_eq!(code, 5);
            assert_eq!(message, "User authorization failed");
        }
        other => panic!("Expected Method error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_missing_response_field_yields_null() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/method/users.get");
            then.status(200).json_body(json!({}));
        })
        .await;

    let client = test_client(&server);
    let value = client.call("users.get", &[]).await.unwrap();

    assert!(value.is_null());
}

#[tokio::test]
async fn test_malformed_body_maps_to_service_unavailable() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/method/users.get");
            then.status(502).body("<html>bad gateway</html>");
        })
        .await;

    let client = test_client(&server);
    let error = client.call("users.get", &[]).await.unwrap_err();

    assert!(matches!(error, AppError::ServiceUnavailable(_)));
}

#[tokio::test]
async fn test_unreachable_server_maps_to_service_unavailable() {
    // Port 9 (discard) is not listening; the connection is refused
    let client = VkClient::new(test_settings("http://127.0.0.1:9".to_string()))
        .expect("Failed to create test client");

    let error = client.call("users.get", &[]).await.unwrap_err();

    assert!(matches!(error, AppError::ServiceUnavailable(_)));
}

#[tokio::test]
async fn test_reserved_parameter_rejected_without_request() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/method/users.get");
            then.status(200).json_body(json!({"response": []}));
        })
        .await;

    let client = test_client(&server);
    let error = client
        .call("users.get", &[("access_token", "stolen".to_string())])
        .await
        .unwrap_err();

    assert!(matches!(error, AppError::ReservedParameter(_)));
    assert_eq!(mock.hits_async().await, 0);
}
