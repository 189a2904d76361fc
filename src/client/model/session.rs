//! Session flows behind [`AuthContext`](super::auth::AuthContext).
//!
//! Kept free of signals so they can run against any [`ApiClient`].

use dioxus_logger::tracing;

use crate::{
    client::{api::ApiClient, model::auth::AuthState, model::error::ApiError},
    model::{
        server::ServerSummaryDto,
        user::{AuthResponseDto, UpdateProfileDto, UserDto},
    },
};

pub const LOGIN_FAILED: &str = "Login failed";
pub const UPDATE_FAILED: &str = "Update failed";

/// Health score shown for servers the backend has not scored yet.
pub const PLACEHOLDER_HEALTH_SCORE: f64 = 0.85;
pub const PLACEHOLDER_PERMISSION: &str = "administrator";

/// Fills fields the server list endpoint may leave empty.
///
/// The list only contains servers the user manages, so ownership and the
/// administrator permission are implied.
pub fn with_placeholders(server: ServerSummaryDto) -> ServerSummaryDto {
    let permissions = if server.permissions.is_empty() {
        vec![PLACEHOLDER_PERMISSION.to_string()]
    } else {
        server.permissions
    };
    let health_score = if server.health_score > 0.0 {
        server.health_score
    } else {
        PLACEHOLDER_HEALTH_SCORE
    };

    ServerSummaryDto {
        owner: true,
        permissions,
        health_score,
        ..server
    }
}

/// Server list for the signed-in user. A failed fetch yields an empty list.
pub async fn fetch_servers(api: &ApiClient) -> Vec<ServerSummaryDto> {
    match api.get_servers().await {
        Ok(list) => list.servers.into_iter().map(with_placeholders).collect(),
        Err(err) => {
            tracing::warn!("Failed to fetch servers: {}", err);
            Vec::new()
        }
    }
}

async fn with_servers(api: &ApiClient, user: UserDto) -> UserDto {
    let servers = fetch_servers(api).await;
    UserDto { servers, ..user }
}

/// Resolves the stored token into an auth state.
pub async fn restore(api: &ApiClient) -> AuthState {
    if !api.tokens().is_present() {
        return AuthState::Unauthenticated;
    }

    match api.get_current_user().await {
        Ok(current) => AuthState::Authenticated(with_servers(api, current.user).await),
        Err(err) if err.is_auth_rejection() => {
            tracing::info!("Stored session rejected ({}); signing out", err.status);
            api.tokens().clear();
            AuthState::Unauthenticated
        }
        Err(err) => {
            // Token kept so a later reload can retry
            tracing::error!("Failed to restore session: {}", err);
            AuthState::Unauthenticated
        }
    }
}

fn failure_message(err: &ApiError, fallback: &str) -> String {
    if err.is_transport() || err.message.trim().is_empty() {
        fallback.to_string()
    } else {
        err.message.clone()
    }
}

async fn complete_login(
    api: &ApiClient,
    result: Result<AuthResponseDto, ApiError>,
) -> Result<UserDto, String> {
    match result {
        Ok(auth) => {
            api.tokens().set(&auth.token);
            tracing::info!("Signed in as {}", auth.user.username);
            Ok(with_servers(api, auth.user).await)
        }
        Err(err) => {
            tracing::error!("Login failed: {}", err);
            Err(failure_message(&err, LOGIN_FAILED))
        }
    }
}

pub async fn login_with_google(api: &ApiClient, credential: &str) -> Result<UserDto, String> {
    let result = api.google_auth(credential).await;
    complete_login(api, result).await
}

pub async fn login_with_discord(
    api: &ApiClient,
    code: &str,
    state: Option<&str>,
) -> Result<UserDto, String> {
    let result = api.discord_callback(code, state).await;
    complete_login(api, result).await
}

/// Best effort: the local token is removed whatever the backend answers.
pub async fn logout(api: &ApiClient) {
    if let Err(err) = api.logout().await {
        tracing::warn!("Logout request failed: {}", err);
    }
    api.tokens().clear();
}

/// Returns the updated user, keeping the already merged server list.
pub async fn update_profile(
    api: &ApiClient,
    current: &UserDto,
    profile: &UpdateProfileDto,
) -> Result<UserDto, String> {
    match api.update_profile(profile).await {
        Ok(updated) => Ok(UserDto {
            servers: current.servers.clone(),
            ..updated.user
        }),
        Err(err) => {
            tracing::error!("Profile update failed: {}", err);
            Err(failure_message(&err, UPDATE_FAILED))
        }
    }
}

/// Re-merges the server list into `user`. Errors leave the user unchanged.
pub async fn refresh_servers(api: &ApiClient, user: UserDto) -> UserDto {
    match api.get_servers().await {
        Ok(list) => UserDto {
            servers: list.servers.into_iter().map(with_placeholders).collect(),
            ..user
        },
        Err(err) => {
            tracing::error!("Failed to refresh servers: {}", err);
            user
        }
    }
}
