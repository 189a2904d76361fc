use serde_json::Value;

use crate::{
    client::api::{mock, transport::Method},
    model::settings::{BotConfigDto, ServerSettingsDto},
};

fn body_json(body: &Option<String>) -> Value {
    serde_json::from_str(body.as_deref().unwrap_or("null")).unwrap()
}

#[tokio::test]
async fn analytics_and_violations_use_default_query() {
    let (client, transport, _) = mock::client();
    transport
        .on(
            Method::Get,
            "/api/v1/servers/7/analytics?days=7",
            200,
            r#"{"analytics":[{"date":"2025-01-01","messages":10,"violations":1}]}"#,
        )
        .on(
            Method::Get,
            "/api/v1/servers/7/violations?limit=50",
            200,
            r#"{"violations":[]}"#,
        )
        .on(
            Method::Get,
            "/api/v1/servers/7/violations?limit=5",
            200,
            r#"{"violations":[]}"#,
        );

    let analytics = client.get_server_analytics("7", None).await.unwrap();
    assert_eq!(analytics.analytics[0].messages_processed, 10);

    client.get_server_violations("7", None).await.unwrap();
    client.get_server_violations("7", Some(5)).await.unwrap();
}

/// Tests that bot configuration is clamped before it leaves the client.
///
/// Expected: thresholds within 0.1..=1.0 and timeout within 60..=86400 in the body
#[tokio::test]
async fn update_config_sends_clamped_payload() {
    let (client, transport, _) = mock::client();
    transport.on(Method::Post, "/api/v1/servers/9/config", 200, "{}");

    let config = BotConfigDto {
        toxicity_threshold: 0.01,
        timeout_duration: 10,
        ..Default::default()
    };
    client.update_server_config("9", &config).await.unwrap();

    let body = body_json(&transport.requests()[0].body);
    assert_eq!(body["toxicity_threshold"], 0.1);
    assert_eq!(body["timeout_duration"], 60);
    assert_eq!(body["auto_delete"], true);
}

#[tokio::test]
async fn update_settings_raises_escalation_threshold() {
    let (client, transport, _) = mock::client();
    transport.on(Method::Post, "/api/v1/servers/9/settings", 204, "");

    let settings = ServerSettingsDto {
        escalation_threshold: 0,
        ..Default::default()
    };
    client.update_server_settings("9", &settings).await.unwrap();

    let body = body_json(&transport.requests()[0].body);
    assert_eq!(body["escalation_threshold"], 1);
}

#[tokio::test]
async fn name_and_feedback_payloads() {
    let (client, transport, _) = mock::client();
    transport
        .on(Method::Put, "/api/v1/servers/3/name", 200, "{}")
        .on(Method::Post, "/api/v1/servers/3/violations/17/feedback", 200, "{}");

    client.update_server_name("3", "Clara HQ").await.unwrap();
    client.report_violation_feedback("3", 17, true).await.unwrap();

    let requests = transport.requests();
    assert_eq!(body_json(&requests[0].body)["name"], "Clara HQ");
    assert_eq!(body_json(&requests[1].body)["is_false_positive"], true);
}

#[tokio::test]
async fn discord_callback_posts_code_and_state() {
    let (client, transport, _) = mock::client();
    transport.on(
        Method::Post,
        "/api/v1/auth/discord/callback",
        200,
        r#"{"token":"t","user":{"id":1,"username":"clara"}}"#,
    );

    let auth = client.discord_callback("abc", Some("xyz")).await.unwrap();
    assert_eq!(auth.token, "t");
    assert_eq!(auth.user.id, "1");

    let body = body_json(&transport.requests()[0].body);
    assert_eq!(body["code"], "abc");
    assert_eq!(body["state"], "xyz");
}

#[tokio::test]
async fn notifications_mark_all_read_uses_put() {
    let (client, transport, _) = mock::client();
    transport.on(Method::Put, "/api/v1/user/notifications/mark-all-read", 200, "");

    client.mark_all_notifications_read().await.unwrap();
    assert_eq!(
        transport.count(Method::Put, "/api/v1/user/notifications/mark-all-read"),
        1
    );
}
