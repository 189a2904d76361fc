//! Client configuration resolved at compile time from `CLARA_*` variables.

use dioxus_logger::tracing;
use url::Url;

use crate::client::model::error::ConfigError;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_MS: u32 = 10_000;
pub const DEFAULT_REDIRECT_PATH: &str = "/auth/callback";

#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    /// Backend base URL without a trailing slash.
    pub api_url: String,
    pub timeout_ms: u32,
    pub discord_client_id: Option<String>,
    /// Absolute redirect URI, or `None` to derive it from the page origin.
    pub discord_redirect_uri: Option<String>,
    pub google_client_id: Option<String>,
    pub bot_invite_url: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            discord_client_id: None,
            discord_redirect_uri: None,
            google_client_id: None,
            bot_invite_url: None,
        }
    }
}

/// Raw, unvalidated values as they were compiled in.
#[derive(Clone, Debug, Default)]
pub struct RawConfig<'a> {
    pub api_url: Option<&'a str>,
    pub timeout_ms: Option<&'a str>,
    pub discord_client_id: Option<&'a str>,
    pub discord_redirect_uri: Option<&'a str>,
    pub google_client_id: Option<&'a str>,
    pub bot_invite_url: Option<&'a str>,
}

impl ClientConfig {
    /// Reads the compiled-in environment. Invalid values are logged once and
    /// replaced by their defaults.
    pub fn from_env() -> Self {
        let raw = RawConfig {
            api_url: option_env!("CLARA_API_URL"),
            timeout_ms: option_env!("CLARA_API_TIMEOUT_MS"),
            discord_client_id: option_env!("CLARA_DISCORD_CLIENT_ID"),
            discord_redirect_uri: option_env!("CLARA_DISCORD_REDIRECT_URI"),
            google_client_id: option_env!("CLARA_GOOGLE_CLIENT_ID"),
            bot_invite_url: option_env!("CLARA_BOT_INVITE_URL"),
        };

        let (config, errors) = Self::resolve(&raw);
        for err in errors {
            tracing::warn!("{}; using default", err);
        }
        config
    }

    /// Validates raw values, collecting a `ConfigError` for each one rejected.
    pub fn resolve(raw: &RawConfig<'_>) -> (Self, Vec<ConfigError>) {
        let mut errors = Vec::new();
        let mut config = ClientConfig::default();

        if let Some(api_url) = non_blank(raw.api_url) {
            match parse_base_url(api_url) {
                Ok(url) => config.api_url = url,
                Err(reason) => errors.push(ConfigError::InvalidValue {
                    name: "CLARA_API_URL",
                    reason,
                }),
            }
        }

        if let Some(timeout) = non_blank(raw.timeout_ms) {
            match timeout.parse::<u32>() {
                Ok(ms) if ms > 0 => config.timeout_ms = ms,
                Ok(_) => errors.push(ConfigError::InvalidValue {
                    name: "CLARA_API_TIMEOUT_MS",
                    reason: "must be greater than zero".to_string(),
                }),
                Err(e) => errors.push(ConfigError::InvalidValue {
                    name: "CLARA_API_TIMEOUT_MS",
                    reason: e.to_string(),
                }),
            }
        }

        if let Some(redirect) = non_blank(raw.discord_redirect_uri) {
            match Url::parse(redirect) {
                Ok(_) => config.discord_redirect_uri = Some(redirect.to_string()),
                Err(e) => errors.push(ConfigError::InvalidValue {
                    name: "CLARA_DISCORD_REDIRECT_URI",
                    reason: e.to_string(),
                }),
            }
        }

        config.discord_client_id = non_blank(raw.discord_client_id).map(str::to_string);
        config.google_client_id = non_blank(raw.google_client_id).map(str::to_string);
        config.bot_invite_url = non_blank(raw.bot_invite_url).map(str::to_string);

        (config, errors)
    }

    /// Redirect URI sent to Discord. Falls back to `origin` + `/auth/callback`.
    pub fn redirect_uri(&self, origin: &str) -> String {
        match &self.discord_redirect_uri {
            Some(uri) => uri.clone(),
            None => format!(
                "{}{}",
                origin.trim_end_matches('/'),
                DEFAULT_REDIRECT_PATH
            ),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_base_url(value: &str) -> Result<String, String> {
    let url = Url::parse(value).map_err(|e| e.to_string())?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("unsupported scheme '{}'", url.scheme()));
    }
    Ok(url.as_str().trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_environment_uses_defaults() {
        let (config, errors) = ClientConfig::resolve(&RawConfig::default());

        assert!(errors.is_empty());
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api_url, "http://localhost:8000");
        assert_eq!(config.timeout_ms, 10_000);
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let raw = RawConfig {
            api_url: Some("https://api.communityclara.xyz/"),
            timeout_ms: Some("2500"),
            ..Default::default()
        };
        let (config, errors) = ClientConfig::resolve(&raw);

        assert!(errors.is_empty());
        assert_eq!(config.api_url, "https://api.communityclara.xyz");
        assert_eq!(config.timeout_ms, 2500);
    }

    #[test]
    fn invalid_values_fall_back_and_report() {
        let raw = RawConfig {
            api_url: Some("ftp://example.com"),
            timeout_ms: Some("soon"),
            discord_redirect_uri: Some("not a url"),
            ..Default::default()
        };
        let (config, errors) = ClientConfig::resolve(&raw);

        assert_eq!(errors.len(), 3);
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);
        assert!(config.discord_redirect_uri.is_none());
    }

    #[test]
    fn redirect_uri_derives_from_origin() {
        let config = ClientConfig::default();
        assert_eq!(
            config.redirect_uri("http://localhost:8080/"),
            "http://localhost:8080/auth/callback"
        );
    }
}
