//! Persisted per-server configuration objects. Both are replaced wholesale on
//! every save; the defaults here match what the backend applies to a new
//! server.

use serde::{Deserialize, Serialize};

use crate::model::serde_helper::null_as_default;

pub const DEFAULT_THRESHOLD: f64 = 0.7;
pub const DEFAULT_TIMEOUT_SECS: u32 = 300;
pub const DEFAULT_ESCALATION_THRESHOLD: u32 = 3;

pub const MIN_THRESHOLD: f64 = 0.1;
pub const MAX_THRESHOLD: f64 = 1.0;
pub const MIN_TIMEOUT_SECS: u32 = 60;
pub const MAX_TIMEOUT_SECS: u32 = 86_400;

fn clamp_threshold(value: f64) -> f64 {
    if value.is_nan() {
        DEFAULT_THRESHOLD
    } else {
        value.clamp(MIN_THRESHOLD, MAX_THRESHOLD)
    }
}

/// Automated moderation thresholds and actions (`/servers/{id}/config`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct BotConfigDto {
    /// 0.1..=1.0, higher is more lenient. Default 0.7.
    pub toxicity_threshold: f64,
    /// 0.1..=1.0. Default 0.7.
    pub spam_threshold: f64,
    /// 0.1..=1.0. Default 0.7.
    pub harassment_threshold: f64,
    /// Default true.
    pub auto_delete: bool,
    /// Default false.
    pub auto_timeout: bool,
    /// Seconds, 60..=86400. Default 300.
    pub timeout_duration: u32,
    /// Default true.
    pub warning_enabled: bool,
    /// Default true.
    pub escalation_enabled: bool,
}

impl Default for BotConfigDto {
    fn default() -> Self {
        Self {
            toxicity_threshold: DEFAULT_THRESHOLD,
            spam_threshold: DEFAULT_THRESHOLD,
            harassment_threshold: DEFAULT_THRESHOLD,
            auto_delete: true,
            auto_timeout: false,
            timeout_duration: DEFAULT_TIMEOUT_SECS,
            warning_enabled: true,
            escalation_enabled: true,
        }
    }
}

impl BotConfigDto {
    /// Copy with every value forced into its accepted range.
    pub fn clamped(&self) -> Self {
        Self {
            toxicity_threshold: clamp_threshold(self.toxicity_threshold),
            spam_threshold: clamp_threshold(self.spam_threshold),
            harassment_threshold: clamp_threshold(self.harassment_threshold),
            timeout_duration: self
                .timeout_duration
                .clamp(MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS),
            ..self.clone()
        }
    }
}

/// General server settings (`/servers/{id}/settings`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ServerSettingsDto {
    /// Display name in the dashboard. Default empty.
    #[serde(deserialize_with = "null_as_default")]
    pub server_name: String,
    /// Supports `{{user}}` and `{{server}}`. Default empty.
    #[serde(deserialize_with = "null_as_default")]
    pub welcome_message: String,
    /// Monitored channel names. Default empty.
    #[serde(deserialize_with = "null_as_default")]
    pub moderation_channels: Vec<String>,
    /// Roles that bypass moderation. Default empty.
    #[serde(deserialize_with = "null_as_default")]
    pub exempt_roles: Vec<String>,
    /// Comma-separated extra keywords. Default empty.
    #[serde(deserialize_with = "null_as_default")]
    pub custom_keywords: String,
    /// Default empty.
    #[serde(deserialize_with = "null_as_default")]
    pub violation_log_channel: String,
    /// Violations before escalation, at least 1. Default 3.
    pub escalation_threshold: u32,
    /// Default true.
    pub learning_enabled: bool,
    /// Default true.
    pub privacy_mode: bool,
    /// NSFW images are not violations when set. Default false.
    pub nsfw_allowed: bool,
    /// Default true.
    pub nsfw_auto_delete: bool,
    /// Default false.
    pub nsfw_auto_timeout: bool,
    /// Default false.
    pub nsfw_auto_kick: bool,
    /// Default false.
    pub nsfw_auto_ban: bool,
}

impl Default for ServerSettingsDto {
    fn default() -> Self {
        Self {
            server_name: String::new(),
            welcome_message: String::new(),
            moderation_channels: Vec::new(),
            exempt_roles: Vec::new(),
            custom_keywords: String::new(),
            violation_log_channel: String::new(),
            escalation_threshold: DEFAULT_ESCALATION_THRESHOLD,
            learning_enabled: true,
            privacy_mode: true,
            nsfw_allowed: false,
            nsfw_auto_delete: true,
            nsfw_auto_timeout: false,
            nsfw_auto_kick: false,
            nsfw_auto_ban: false,
        }
    }
}

impl ServerSettingsDto {
    pub fn clamped(&self) -> Self {
        Self {
            escalation_threshold: self.escalation_threshold.max(1),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_settings_fill_defaults() {
        let s: ServerSettingsDto = serde_json::from_str(
            r#"{"server_name":"Clara HQ","exempt_roles":null,"nsfw_allowed":true}"#,
        )
        .unwrap();

        assert_eq!(s.server_name, "Clara HQ");
        assert!(s.exempt_roles.is_empty());
        assert!(s.nsfw_allowed);
        assert!(s.nsfw_auto_delete);
        assert_eq!(s.escalation_threshold, 3);
    }

    #[test]
    fn clamping_forces_ranges() {
        let config = BotConfigDto {
            toxicity_threshold: 0.0,
            spam_threshold: 1.5,
            harassment_threshold: f64::NAN,
            timeout_duration: 5,
            ..Default::default()
        }
        .clamped();

        assert_eq!(config.toxicity_threshold, 0.1);
        assert_eq!(config.spam_threshold, 1.0);
        assert_eq!(config.harassment_threshold, 0.7);
        assert_eq!(config.timeout_duration, 60);

        let long = BotConfigDto {
            timeout_duration: 100_000,
            ..Default::default()
        };
        assert_eq!(long.clamped().timeout_duration, 86_400);

        let settings = ServerSettingsDto {
            escalation_threshold: 0,
            ..Default::default()
        };
        assert_eq!(settings.clamped().escalation_threshold, 1);
    }
}
