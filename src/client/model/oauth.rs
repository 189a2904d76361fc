//! Discord OAuth2 authorize redirect and callback parsing.

use rand::Rng;
use url::{form_urlencoded, Url};

use crate::client::{config::ClientConfig, store::SharedStorage};

pub const DISCORD_AUTHORIZE_URL: &str = "https://discord.com/api/oauth2/authorize";
pub const DISCORD_SCOPES: &str = "identify email guilds";
pub const OAUTH_STATE_KEY: &str = "oauth_state";
const STATE_LENGTH: usize = 32;

/// Authorize URL for the configured client, or `None` when no client id is set.
pub fn discord_authorize_url(config: &ClientConfig, redirect_uri: &str, state: &str) -> Option<String> {
    let client_id = config.discord_client_id.as_deref()?;

    let url = Url::parse_with_params(
        DISCORD_AUTHORIZE_URL,
        &[
            ("client_id", client_id),
            ("redirect_uri", redirect_uri),
            ("response_type", "code"),
            ("scope", DISCORD_SCOPES),
            ("state", state),
        ],
    )
    .ok()?;

    Some(url.into())
}

/// Random 32-character value round-tripped through Discord and checked on
/// return.
pub fn new_state() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                             abcdefghijklmnopqrstuvwxyz\
                             0123456789";

    let mut rng = rand::rng();

    (0..STATE_LENGTH)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

pub fn remember_state(storage: &SharedStorage, state: &str) {
    storage.set(OAUTH_STATE_KEY, state);
}

/// Removes the remembered state and reports whether `returned` matches it.
/// A callback that this browser did not start is rejected.
pub fn take_and_verify_state(storage: &SharedStorage, returned: Option<&str>) -> bool {
    let expected = storage.get(OAUTH_STATE_KEY);
    storage.remove(OAUTH_STATE_KEY);

    match (expected, returned) {
        (Some(expected), Some(returned)) => expected == returned,
        _ => false,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OAuthCallback {
    Code { code: String, state: Option<String> },
    Error(String),
    Missing,
}

impl OAuthCallback {
    /// Parses `code`, `state` and `error` from a query string, with or
    /// without the leading `?`. An `error` wins over a code.
    pub fn from_query(query: &str) -> Self {
        let query = query.trim_start_matches('?');
        let mut code = None;
        let mut state = None;
        let mut error = None;

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "code" if !value.is_empty() => code = Some(value.into_owned()),
                "state" if !value.is_empty() => state = Some(value.into_owned()),
                "error" => error = Some(value.into_owned()),
                _ => {}
            }
        }

        match (error, code) {
            (Some(error), _) => OAuthCallback::Error(error),
            (None, Some(code)) => OAuthCallback::Code { code, state },
            (None, None) => OAuthCallback::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::client::store::MemoryStorage;

    #[test]
    fn authorize_url_carries_all_parameters() {
        let config = ClientConfig {
            discord_client_id: Some("1399".to_string()),
            ..Default::default()
        };
        let url = discord_authorize_url(&config, "http://localhost:8080/auth/callback", "s1")
            .unwrap();
        let parsed = Url::parse(&url).unwrap();
        let pairs: Vec<(String, String)> = parsed.query_pairs().into_owned().collect();

        assert!(url.starts_with(DISCORD_AUTHORIZE_URL));
        assert!(pairs.contains(&("client_id".into(), "1399".into())));
        assert!(pairs.contains(&(
            "redirect_uri".into(),
            "http://localhost:8080/auth/callback".into()
        )));
        assert!(pairs.contains(&("response_type".into(), "code".into())));
        assert!(pairs.contains(&("scope".into(), "identify email guilds".into())));
        assert!(pairs.contains(&("state".into(), "s1".into())));
    }

    #[test]
    fn no_client_id_means_no_url() {
        assert!(discord_authorize_url(&ClientConfig::default(), "http://x", "s").is_none());
    }

    #[test]
    fn callback_error_wins_over_code() {
        assert_eq!(
            OAuthCallback::from_query("?code=abc&state=xyz"),
            OAuthCallback::Code {
                code: "abc".into(),
                state: Some("xyz".into())
            }
        );
        assert_eq!(
            OAuthCallback::from_query("code=abc&error=access_denied"),
            OAuthCallback::Error("access_denied".into())
        );
        assert_eq!(OAuthCallback::from_query(""), OAuthCallback::Missing);
    }

    #[test]
    fn state_is_single_use() {
        let storage: SharedStorage = Rc::new(MemoryStorage::new());
        remember_state(&storage, "abc");

        assert!(!take_and_verify_state(&storage, Some("other")));
        // Already consumed
        assert!(!take_and_verify_state(&storage, Some("abc")));

        remember_state(&storage, "abc");
        assert!(take_and_verify_state(&storage, Some("abc")));
    }

    #[test]
    fn unsolicited_callback_is_rejected() {
        let storage: SharedStorage = Rc::new(MemoryStorage::new());

        assert!(!take_and_verify_state(&storage, Some("abc")));
        assert!(!take_and_verify_state(&storage, None));
    }

    #[test]
    fn states_are_random() {
        let first = new_state();
        let second = new_state();

        assert_eq!(first.len(), 32);
        assert!(first.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(first, second);
    }
}
