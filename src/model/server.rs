use serde::{Deserialize, Serialize};

use crate::model::serde_helper::{
    deserialize_optional_snowflake, deserialize_snowflake, null_as_default,
};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ServerSummaryDto {
    #[serde(deserialize_with = "deserialize_snowflake")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub owner: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub permissions: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub health_score: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_messages: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_violations: u64,
}

impl ServerSummaryDto {
    pub fn icon_url(&self) -> Option<String> {
        self.icon
            .as_ref()
            .map(|hash| format!("https://cdn.discordapp.com/icons/{}/{}.png", self.id, hash))
    }

    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ServerListDto {
    #[serde(default, deserialize_with = "null_as_default")]
    pub servers: Vec<ServerSummaryDto>,
    #[serde(default)]
    pub total_count: Option<u64>,
}

/// `/servers/{id}/stats`. Carries both counters and the persisted bot
/// configuration, every field optional.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ServerStatsDto {
    #[serde(default, deserialize_with = "deserialize_optional_snowflake")]
    pub server_id: Option<String>,
    #[serde(default)]
    pub server_name: Option<String>,
    #[serde(default)]
    pub welcome_message: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_messages: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_violations: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub false_positives: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub health_score: f64,
    #[serde(default)]
    pub toxicity_threshold: Option<f64>,
    #[serde(default)]
    pub spam_threshold: Option<f64>,
    #[serde(default)]
    pub harassment_threshold: Option<f64>,
    #[serde(default)]
    pub auto_delete: Option<bool>,
    #[serde(default)]
    pub auto_timeout: Option<bool>,
    #[serde(default)]
    pub timeout_duration: Option<u32>,
    #[serde(default)]
    pub warning_enabled: Option<bool>,
    #[serde(default)]
    pub escalation_enabled: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UpdateServerNameDto {
    pub name: String,
}
