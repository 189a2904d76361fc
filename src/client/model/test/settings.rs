use crate::{
    client::{
        api::{mock, transport::Method},
        model::{
            query::QueryKey,
            settings::{self, DraftSync, FlashKind},
        },
    },
    model::{
        server::ServerStatsDto,
        settings::{BotConfigDto, ServerSettingsDto},
    },
};

const SETTINGS_PATH: &str = "/api/v1/servers/5/settings";
const NAME_PATH: &str = "/api/v1/servers/5/name";

fn settings_named(name: &str) -> ServerSettingsDto {
    ServerSettingsDto {
        server_name: name.to_string(),
        ..Default::default()
    }
}

/// Tests that saving with an unchanged name sends no rename.
///
/// Expected: one settings call, zero name calls, success message
#[tokio::test]
async fn unchanged_name_sends_no_rename() {
    let (api, transport, _) = mock::client();
    transport.on(Method::Post, SETTINGS_PATH, 200, "{}");

    let outcome =
        settings::save_server_settings(&api, "5", &settings_named("Clara HQ"), "Clara HQ").await;

    assert_eq!(outcome.message.kind, FlashKind::Success);
    assert_eq!(transport.count(Method::Post, SETTINGS_PATH), 1);
    assert_eq!(transport.count(Method::Put, NAME_PATH), 0);
    assert!(!outcome.invalidate.contains(&QueryKey::Servers));
}

/// Tests that a changed name triggers exactly one rename.
///
/// Expected: one name call and the server list invalidated
#[tokio::test]
async fn changed_name_sends_one_rename() {
    let (api, transport, _) = mock::client();
    transport
        .on(Method::Post, SETTINGS_PATH, 200, "{}")
        .on(Method::Put, NAME_PATH, 200, "{}");

    let outcome =
        settings::save_server_settings(&api, "5", &settings_named("Clara Lounge"), "Clara HQ")
            .await;

    assert_eq!(transport.count(Method::Put, NAME_PATH), 1);
    assert_eq!(outcome.message.text, settings::SETTINGS_AND_NAME_SAVED);
    assert!(outcome.invalidate.contains(&QueryKey::Servers));
}

#[tokio::test]
async fn blank_name_is_never_sent() {
    let (api, transport, _) = mock::client();
    transport.on(Method::Post, SETTINGS_PATH, 200, "{}");

    settings::save_server_settings(&api, "5", &settings_named("  "), "Clara HQ").await;

    assert_eq!(transport.count(Method::Put, NAME_PATH), 0);
}

/// Tests a failing rename after a successful settings save.
///
/// Expected: the partial-success warning
#[tokio::test]
async fn failing_rename_reports_partial_success() {
    let (api, transport, _) = mock::client();
    transport
        .on(Method::Post, SETTINGS_PATH, 200, "{}")
        .on(Method::Put, NAME_PATH, 500, "");

    let outcome =
        settings::save_server_settings(&api, "5", &settings_named("Renamed"), "Clara HQ").await;

    assert_eq!(outcome.message.kind, FlashKind::Warning);
    assert_eq!(
        outcome.message.text,
        "Settings saved but server name update failed"
    );
}

#[tokio::test]
async fn failing_settings_save_skips_rename() {
    let (api, transport, _) = mock::client();
    transport.on(Method::Post, SETTINGS_PATH, 400, r#"{"detail":"Bad channel"}"#);

    let outcome =
        settings::save_server_settings(&api, "5", &settings_named("Renamed"), "Clara HQ").await;

    assert_eq!(outcome.message.kind, FlashKind::Error);
    assert!(outcome.message.text.contains("Bad channel"));
    assert_eq!(outcome.message.dismiss_after_ms(), 5_000);
    assert!(outcome.invalidate.is_empty());
    assert_eq!(transport.count(Method::Put, NAME_PATH), 0);
}

/// Tests the stats fallback when a server has no stored settings.
///
/// Expected: name and welcome message from stats, defaults elsewhere
#[tokio::test]
async fn settings_fall_back_to_stats_on_404() {
    let (api, transport, _) = mock::client();
    transport
        .on(Method::Get, SETTINGS_PATH, 404, r#"{"detail":"Not found"}"#)
        .on(
            Method::Get,
            "/api/v1/servers/5/stats",
            200,
            r#"{"server_name":"Clara HQ","welcome_message":"Hi {{user}}"}"#,
        );

    let loaded = settings::load_server_settings(&api, "5").await.unwrap();

    assert_eq!(loaded.server_name, "Clara HQ");
    assert_eq!(loaded.welcome_message, "Hi {{user}}");
    assert_eq!(loaded.escalation_threshold, 3);
    assert!(loaded.learning_enabled);
}

#[tokio::test]
async fn settings_server_error_is_not_masked() {
    let (api, transport, _) = mock::client();
    transport.on(Method::Get, SETTINGS_PATH, 500, "");

    let err = settings::load_server_settings(&api, "5").await.unwrap_err();
    assert_eq!(err.status, 500);
}

#[test]
fn bot_config_from_stats_defaults_absent_and_zero() {
    let stats = ServerStatsDto {
        toxicity_threshold: Some(0.4),
        spam_threshold: Some(0.0),
        auto_timeout: Some(true),
        timeout_duration: Some(0),
        ..Default::default()
    };

    let config = settings::bot_config_from_stats(&stats);

    assert_eq!(config.toxicity_threshold, 0.4);
    assert_eq!(config.spam_threshold, 0.7);
    assert_eq!(config.harassment_threshold, 0.7);
    assert!(config.auto_timeout);
    assert_eq!(config.timeout_duration, 300);
}

/// Tests that hiding the duration keeps its value.
///
/// Expected: duration hidden when off, same value shown when back on
#[test]
fn auto_timeout_toggle_keeps_duration() {
    let mut config = BotConfigDto {
        auto_timeout: true,
        timeout_duration: 1800,
        ..Default::default()
    };
    assert!(settings::shows_timeout_duration(&config));

    config.auto_timeout = false;
    assert!(!settings::shows_timeout_duration(&config));

    config.auto_timeout = true;
    assert!(settings::shows_timeout_duration(&config));
    assert_eq!(config.timeout_duration, 1800);
}

#[test]
fn nsfw_actions_hidden_when_allowed() {
    let mut s = ServerSettingsDto::default();
    assert!(settings::shows_nsfw_actions(&s));
    s.nsfw_allowed = true;
    assert!(!settings::shows_nsfw_actions(&s));
    assert!(s.nsfw_auto_delete);
}

#[test]
fn list_parsing_and_labels() {
    assert_eq!(
        settings::parse_list(" general, ,memes ,"),
        vec!["general".to_string(), "memes".to_string()]
    );
    assert_eq!(settings::sensitivity_label(0.3), "Very Sensitive");
    assert_eq!(settings::sensitivity_label(0.5), "Sensitive");
    assert_eq!(settings::sensitivity_label(0.7), "Moderate");
    assert_eq!(settings::sensitivity_label(0.85), "Lenient");
    assert_eq!(settings::sensitivity_label(1.0), "Very Lenient");
    assert_eq!(settings::format_duration(300), "5 minutes");
    assert_eq!(settings::format_duration(3600), "1 hour");
}

#[test]
fn reset_keeps_loaded_name() {
    let reset = settings::reset_server_settings("Clara HQ");
    assert_eq!(reset.server_name, "Clara HQ");
    assert_eq!(reset.escalation_threshold, 3);
}

/// Tests which loads may overwrite an edited draft.
///
/// Expected: first load and the load after a save are accepted, background
/// refetches are not
#[test]
fn draft_seeds_on_first_load_and_after_save_only() {
    let mut sync = DraftSync::default();
    assert!(!sync.is_seeded());

    assert!(sync.accept());
    assert!(sync.is_seeded());
    assert!(!sync.accept());
    assert!(!sync.accept());

    sync.saved();
    assert!(sync.accept());
    assert!(!sync.accept());
}
