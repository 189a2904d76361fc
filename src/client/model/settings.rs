//! Form state behind the bot configuration and server settings pages.

use dioxus_logger::tracing;

use crate::{
    client::{
        api::ApiClient,
        constant::{ERROR_MESSAGE_MS, SUCCESS_MESSAGE_MS},
        model::{error::ApiError, query::QueryKey},
    },
    model::{
        server::ServerStatsDto,
        settings::{BotConfigDto, ServerSettingsDto},
    },
};

pub const CONFIG_SAVED: &str = "Bot configuration saved successfully!";
pub const SETTINGS_SAVED: &str = "Server settings saved successfully!";
pub const SETTINGS_AND_NAME_SAVED: &str = "Server settings and name updated successfully!";
pub const NAME_UPDATE_FAILED: &str = "Settings saved but server name update failed";
pub const CONFIG_RESET: &str = "Configuration reset to defaults";
pub const SETTINGS_RESET: &str = "Settings reset to defaults";
pub const CONFIG_LOAD_FAILED: &str = "Failed to load current configuration. Using defaults.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Warning,
    Info,
    Error,
}

/// Transient message shown above a settings form.
#[derive(Clone, Debug, PartialEq)]
pub struct FlashMessage {
    pub kind: FlashKind,
    pub text: String,
}

impl FlashMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Warning,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            text: text.into(),
        }
    }

    /// Errors stay up for 5 s, everything else for 3 s.
    pub fn dismiss_after_ms(&self) -> u32 {
        match self.kind {
            FlashKind::Error => ERROR_MESSAGE_MS,
            _ => SUCCESS_MESSAGE_MS,
        }
    }

    pub fn alert_class(&self) -> &'static str {
        match self.kind {
            FlashKind::Success => "alert-success",
            FlashKind::Warning => "alert-warning",
            FlashKind::Info => "alert-info",
            FlashKind::Error => "alert-error",
        }
    }
}

/// Result of a save: what to show and which queries to refresh.
#[derive(Clone, Debug, PartialEq)]
pub struct SaveOutcome {
    pub message: FlashMessage,
    pub invalidate: Vec<QueryKey>,
}

impl SaveOutcome {
    fn failed(action: &str, err: &ApiError) -> Self {
        Self {
            message: FlashMessage::error(format!("Failed to {}: {}", action, err.user_message())),
            invalidate: Vec::new(),
        }
    }
}

/// Decides when a freshly loaded copy may replace a form's draft: the first
/// successful load, and the first one after the form's own save. Any other
/// refetch leaves unsaved edits alone.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DraftSync {
    seeded: bool,
    reseed: bool,
}

impl DraftSync {
    /// Call with each successful load. `true` means overwrite the draft.
    pub fn accept(&mut self) -> bool {
        if self.seeded && !self.reseed {
            return false;
        }
        self.seeded = true;
        self.reseed = false;
        true
    }

    /// The next successful load reseeds the draft.
    pub fn saved(&mut self) {
        self.reseed = true;
    }

    pub fn is_seeded(&self) -> bool {
        self.seeded
    }
}

fn threshold_or_default(value: Option<f64>, default: f64) -> f64 {
    value.filter(|v| *v > 0.0).unwrap_or(default)
}

/// Bot configuration from the stats payload. Absent or zero values take defaults.
pub fn bot_config_from_stats(stats: &ServerStatsDto) -> BotConfigDto {
    let defaults = BotConfigDto::default();

    BotConfigDto {
        toxicity_threshold: threshold_or_default(
            stats.toxicity_threshold,
            defaults.toxicity_threshold,
        ),
        spam_threshold: threshold_or_default(stats.spam_threshold, defaults.spam_threshold),
        harassment_threshold: threshold_or_default(
            stats.harassment_threshold,
            defaults.harassment_threshold,
        ),
        auto_delete: stats.auto_delete.unwrap_or(defaults.auto_delete),
        auto_timeout: stats.auto_timeout.unwrap_or(defaults.auto_timeout),
        timeout_duration: stats
            .timeout_duration
            .filter(|d| *d > 0)
            .unwrap_or(defaults.timeout_duration),
        warning_enabled: stats.warning_enabled.unwrap_or(defaults.warning_enabled),
        escalation_enabled: stats
            .escalation_enabled
            .unwrap_or(defaults.escalation_enabled),
    }
}

/// Settings for a server without stored settings: name and welcome message
/// from stats, everything else default.
pub fn server_settings_from_stats(stats: &ServerStatsDto) -> ServerSettingsDto {
    ServerSettingsDto {
        server_name: stats.server_name.clone().unwrap_or_default(),
        welcome_message: stats.welcome_message.clone().unwrap_or_default(),
        ..Default::default()
    }
}

pub async fn load_bot_config(api: &ApiClient, server_id: &str) -> Result<BotConfigDto, ApiError> {
    let stats = api.get_server_stats(server_id).await?;
    Ok(bot_config_from_stats(&stats))
}

/// Stored settings, or the stats fallback when the server has none yet (404).
pub async fn load_server_settings(
    api: &ApiClient,
    server_id: &str,
) -> Result<ServerSettingsDto, ApiError> {
    match api.get_server_settings(server_id).await {
        Ok(settings) => Ok(settings),
        Err(err) if err.is_not_found() => {
            tracing::info!("No stored settings for server {}; using stats", server_id);
            let stats = api.get_server_stats(server_id).await?;
            Ok(server_settings_from_stats(&stats))
        }
        Err(err) => Err(err),
    }
}

pub async fn save_bot_config(api: &ApiClient, server_id: &str, config: &BotConfigDto) -> SaveOutcome {
    match api.update_server_config(server_id, config).await {
        Ok(()) => SaveOutcome {
            message: FlashMessage::success(CONFIG_SAVED),
            invalidate: QueryKey::after_settings_save(server_id, false),
        },
        Err(err) => SaveOutcome::failed("save configuration", &err),
    }
}

/// Whether saving `settings` must also rename the server.
pub fn name_needs_update(settings: &ServerSettingsDto, loaded_name: &str) -> bool {
    let name = settings.server_name.trim();
    !name.is_empty() && name != loaded_name.trim()
}

/// Posts the settings, then renames the server once if the name changed.
pub async fn save_server_settings(
    api: &ApiClient,
    server_id: &str,
    settings: &ServerSettingsDto,
    loaded_name: &str,
) -> SaveOutcome {
    if let Err(err) = api.update_server_settings(server_id, settings).await {
        return SaveOutcome::failed("save settings", &err);
    }

    if !name_needs_update(settings, loaded_name) {
        return SaveOutcome {
            message: FlashMessage::success(SETTINGS_SAVED),
            invalidate: QueryKey::after_settings_save(server_id, false),
        };
    }

    match api
        .update_server_name(server_id, settings.server_name.trim())
        .await
    {
        Ok(()) => SaveOutcome {
            message: FlashMessage::success(SETTINGS_AND_NAME_SAVED),
            invalidate: QueryKey::after_settings_save(server_id, true),
        },
        Err(err) => {
            tracing::warn!("Server name update failed: {}", err);
            SaveOutcome {
                message: FlashMessage::warning(NAME_UPDATE_FAILED),
                invalidate: QueryKey::after_settings_save(server_id, false),
            }
        }
    }
}

/// Defaults, keeping the name the form was loaded with. Not saved.
pub fn reset_server_settings(loaded_name: &str) -> ServerSettingsDto {
    ServerSettingsDto {
        server_name: loaded_name.to_string(),
        ..Default::default()
    }
}

/// Comma-separated input to trimmed, non-empty items.
pub fn parse_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn join_list(items: &[String]) -> String {
    items.join(", ")
}

pub fn sensitivity_label(threshold: f64) -> &'static str {
    match threshold {
        t if t <= 0.3 => "Very Sensitive",
        t if t <= 0.5 => "Sensitive",
        t if t <= 0.7 => "Moderate",
        t if t <= 0.9 => "Lenient",
        _ => "Very Lenient",
    }
}

pub fn threshold_percent(threshold: f64) -> u32 {
    (threshold * 100.0).round().max(0.0) as u32
}

/// The duration control is only shown while auto-timeout is on; the value
/// itself is never cleared.
pub fn shows_timeout_duration(config: &BotConfigDto) -> bool {
    config.auto_timeout
}

/// NSFW actions only apply when NSFW content is not allowed.
pub fn shows_nsfw_actions(settings: &ServerSettingsDto) -> bool {
    !settings.nsfw_allowed
}

/// Preset durations offered by the timeout select, in seconds.
pub const TIMEOUT_PRESETS: &[(u32, &str)] = &[
    (60, "1 minute"),
    (300, "5 minutes"),
    (600, "10 minutes"),
    (1800, "30 minutes"),
    (3600, "1 hour"),
    (86_400, "24 hours"),
];

pub fn format_duration(seconds: u32) -> String {
    match seconds {
        s if s >= 86_400 && s % 86_400 == 0 => plural(s / 86_400, "day"),
        s if s >= 3600 && s % 3600 == 0 => plural(s / 3600, "hour"),
        s if s >= 60 && s % 60 == 0 => plural(s / 60, "minute"),
        s => plural(s, "second"),
    }
}

fn plural(n: u32, unit: &str) -> String {
    if n == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", n, unit)
    }
}
