use crate::client::{
    api::{mock, transport::Method},
    model::error::{ApiError, GENERIC_ERROR_MESSAGE},
    store::{token::TOKEN_KEY, KeyValueStore},
};

/// Tests that every request carries the JSON content type and the stored token.
///
/// Expected: Content-Type is always set; Authorization only when a token exists
#[tokio::test]
async fn attaches_content_type_and_bearer_token() {
    let (client, transport, _) = mock::client_with_token("tok-123");
    transport.on(Method::Get, "/health", 200, r#"{"status":"healthy"}"#);

    let health = client.health().await.unwrap();
    assert!(health.is_operational());

    let request = &transport.requests()[0];
    assert_eq!(request.url, "http://clara.test/health");
    assert_eq!(request.header("content-type"), Some("application/json"));
    assert_eq!(request.header("Authorization"), Some("Bearer tok-123"));
    assert_eq!(request.timeout_ms, 10_000);
}

#[tokio::test]
async fn omits_authorization_without_token() {
    let (client, transport, _) = mock::client();
    transport.on(Method::Get, "/health", 200, r#"{"status":"healthy"}"#);

    client.health().await.unwrap();

    assert!(transport.requests()[0].header("Authorization").is_none());
}

/// Tests that any 401 response removes the stored token.
///
/// Expected: Err with status 401 and the token gone from storage
#[tokio::test]
async fn unauthorized_response_removes_token() {
    let (client, transport, storage) = mock::client_with_token("expired");
    transport.on(
        Method::Get,
        "/api/v1/servers/42/stats",
        401,
        r#"{"detail":"Token expired"}"#,
    );

    let err = client.get_server_stats("42").await.unwrap_err();

    assert_eq!(err.status, 401);
    assert_eq!(err.message, "Token expired");
    assert!(storage.get(TOKEN_KEY).is_none());
}

#[tokio::test]
async fn forbidden_response_keeps_token() {
    let (client, transport, storage) = mock::client_with_token("still-good");
    transport.on(Method::Get, "/api/v1/servers", 403, r#"{"message":"Forbidden"}"#);

    let err = client.get_servers().await.unwrap_err();

    assert_eq!(err.message, "Forbidden");
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("still-good"));
}

/// Tests that a transport failure surfaces as status 0 with the generic message.
///
/// Expected: Err is_transport() and user_message() is the generic message
#[tokio::test]
async fn transport_failure_is_status_zero() {
    let (client, transport, _) = mock::client();
    transport.fail(Method::Get, "/health", ApiError::timeout(10_000));

    let err = client.health().await.unwrap_err();

    assert!(err.is_transport());
    assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
}
