use serde::{Deserialize, Serialize};

use crate::model::{
    serde_helper::{deserialize_snowflake, null_as_default},
    server::ServerSummaryDto,
};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct UserDto {
    #[serde(deserialize_with = "deserialize_snowflake")]
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub verified: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub servers: Vec<ServerSummaryDto>,
}

impl UserDto {
    /// Name shown in the navbar and profile header.
    pub fn name(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.username)
    }

    pub fn initial(&self) -> char {
        self.name()
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?')
    }
}

/// Response of the Google and Discord token exchanges.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AuthResponseDto {
    pub user: UserDto,
    pub token: String,
}

/// Response of `/auth/me` and `/auth/profile`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CurrentUserDto {
    pub user: UserDto,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GoogleAuthDto {
    pub token: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DiscordCallbackDto {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct UpdateProfileDto {
    pub display_name: String,
    pub email: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserPreferencesDto {
    pub email_notifications: bool,
    pub violation_alerts: bool,
    pub daily_reports: bool,
    pub system_updates: bool,
}

impl Default for UserPreferencesDto {
    fn default() -> Self {
        Self {
            email_notifications: true,
            violation_alerts: true,
            daily_reports: false,
            system_updates: true,
        }
    }
}
