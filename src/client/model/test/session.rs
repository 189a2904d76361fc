use crate::{
    client::{
        api::{mock, transport::Method},
        model::{auth::AuthState, session},
        store::{token::TOKEN_KEY, KeyValueStore},
    },
    model::user::UpdateProfileDto,
};

const ME: &str = r#"{"user":{"id":"100","username":"clara","email":"c@x.io"}}"#;
const SERVERS: &str = r#"{"servers":[
    {"id":"1","name":"Clara HQ","health_score":0.93,"permissions":["manage_guild"]},
    {"id":"2","name":"New Server","health_score":0,"permissions":null}
]}"#;

/// Tests restoring without a stored token.
///
/// Expected: Unauthenticated and no request sent
#[tokio::test]
async fn restore_without_token_is_unauthenticated() {
    let (api, transport, _) = mock::client();

    assert_eq!(session::restore(&api).await, AuthState::Unauthenticated);
    assert!(transport.requests().is_empty());
}

/// Tests restoring a valid session.
///
/// Expected: Authenticated with servers merged and placeholders filled
#[tokio::test]
async fn restore_merges_servers_with_placeholders() {
    let (api, transport, _) = mock::client_with_token("tok");
    transport
        .on(Method::Get, "/api/v1/auth/me", 200, ME)
        .on(Method::Get, "/api/v1/servers", 200, SERVERS);

    let state = session::restore(&api).await;
    let user = state.user().unwrap();

    assert_eq!(user.username, "clara");
    assert_eq!(user.servers.len(), 2);
    assert!(user.servers.iter().all(|s| s.owner));
    assert_eq!(user.servers[0].permissions, vec!["manage_guild"]);
    assert_eq!(user.servers[0].health_score, 0.93);
    assert_eq!(user.servers[1].permissions, vec!["administrator"]);
    assert_eq!(user.servers[1].health_score, 0.85);
}

/// Tests that a failing server list does not block sign-in.
///
/// Expected: Authenticated with an empty server list
#[tokio::test]
async fn restore_with_failing_server_list() {
    let (api, transport, _) = mock::client_with_token("tok");
    transport
        .on(Method::Get, "/api/v1/auth/me", 200, ME)
        .on(Method::Get, "/api/v1/servers", 500, "boom");

    let state = session::restore(&api).await;

    assert!(state.user().unwrap().servers.is_empty());
}

/// Tests that a 401 during restore clears the token.
///
/// Expected: Unauthenticated, token removed, next restore sends nothing
#[tokio::test]
async fn restore_with_rejected_token_clears_it() {
    let (api, transport, storage) = mock::client_with_token("expired");
    transport.on(Method::Get, "/api/v1/auth/me", 401, r#"{"detail":"Invalid token"}"#);

    assert_eq!(session::restore(&api).await, AuthState::Unauthenticated);
    assert!(storage.get(TOKEN_KEY).is_none());

    assert_eq!(session::restore(&api).await, AuthState::Unauthenticated);
    assert_eq!(transport.requests().len(), 1);
}

#[tokio::test]
async fn restore_with_forbidden_clears_token() {
    let (api, transport, storage) = mock::client_with_token("tok");
    transport.on(Method::Get, "/api/v1/auth/me", 403, "");

    assert_eq!(session::restore(&api).await, AuthState::Unauthenticated);
    assert!(storage.get(TOKEN_KEY).is_none());
}

/// Tests that a server error during restore keeps the token.
///
/// Expected: Unauthenticated, token still stored
#[tokio::test]
async fn restore_with_server_error_keeps_token() {
    let (api, transport, storage) = mock::client_with_token("tok");
    transport.on(Method::Get, "/api/v1/auth/me", 503, "");

    assert_eq!(session::restore(&api).await, AuthState::Unauthenticated);
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("tok"));
}

#[tokio::test]
async fn discord_login_stores_token() {
    let (api, transport, storage) = mock::client();
    transport
        .on(
            Method::Post,
            "/api/v1/auth/discord/callback",
            200,
            r#"{"token":"fresh","user":{"id":"100","username":"clara"}}"#,
        )
        .on(Method::Get, "/api/v1/servers", 200, SERVERS);

    let user = session::login_with_discord(&api, "code", Some("state"))
        .await
        .unwrap();

    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("fresh"));
    assert_eq!(user.servers.len(), 2);
    // Server list fetched with the new token
    assert_eq!(
        transport.requests()[1].header("Authorization"),
        Some("Bearer fresh")
    );
}

/// Tests login failure messages.
///
/// Expected: backend detail when present, "Login failed" otherwise
#[tokio::test]
async fn login_failure_messages() {
    let (api, transport, storage) = mock::client();
    transport
        .on(Method::Post, "/api/v1/auth/google", 400, r#"{"detail":"Invalid Google token"}"#)
        .on(Method::Post, "/api/v1/auth/google", 500, "");

    let first = session::login_with_google(&api, "cred").await.unwrap_err();
    let second = session::login_with_google(&api, "cred").await.unwrap_err();

    assert_eq!(first, "Invalid Google token");
    assert_eq!(second, "Request failed with status 500");
    assert!(storage.get(TOKEN_KEY).is_none());

    let (api, transport, _) = mock::client();
    transport.fail(
        Method::Post,
        "/api/v1/auth/google",
        crate::client::model::error::ApiError::network("offline"),
    );
    assert_eq!(
        session::login_with_google(&api, "cred").await.unwrap_err(),
        session::LOGIN_FAILED
    );
}

/// Tests that logout clears the token even when the backend call fails.
///
/// Expected: token removed
#[tokio::test]
async fn logout_is_best_effort() {
    let (api, transport, storage) = mock::client_with_token("tok");
    transport.on(Method::Post, "/api/v1/auth/logout", 500, "");

    session::logout(&api).await;

    assert!(storage.get(TOKEN_KEY).is_none());
    assert_eq!(transport.count(Method::Post, "/api/v1/auth/logout"), 1);
}

#[tokio::test]
async fn profile_update_keeps_servers() {
    let (api, transport, _) = mock::client_with_token("tok");
    transport
        .on(Method::Get, "/api/v1/auth/me", 200, ME)
        .on(Method::Get, "/api/v1/servers", 200, SERVERS)
        .on(
            Method::Put,
            "/api/v1/auth/profile",
            200,
            r#"{"user":{"id":"100","username":"clara","display_name":"Clara"}}"#,
        )
        .on(Method::Put, "/api/v1/auth/profile", 422, r#"{"message":"Email invalid"}"#);

    let current = session::restore(&api).await.user().cloned().unwrap();
    let profile = UpdateProfileDto {
        display_name: "Clara".to_string(),
        email: "c@x.io".to_string(),
    };

    let updated = session::update_profile(&api, &current, &profile)
        .await
        .unwrap();
    assert_eq!(updated.name(), "Clara");
    assert_eq!(updated.servers.len(), 2);

    let err = session::update_profile(&api, &updated, &profile)
        .await
        .unwrap_err();
    assert_eq!(err, "Email invalid");
}

#[tokio::test]
async fn refresh_servers_failure_leaves_user_unchanged() {
    let (api, transport, _) = mock::client_with_token("tok");
    transport
        .on(Method::Get, "/api/v1/auth/me", 200, ME)
        .on(Method::Get, "/api/v1/servers", 200, SERVERS)
        .on(Method::Get, "/api/v1/servers", 500, "");

    let user = session::restore(&api).await.user().cloned().unwrap();
    let refreshed = session::refresh_servers(&api, user.clone()).await;

    assert_eq!(refreshed, user);
}
