use dioxus::prelude::*;
use dioxus_logger::tracing;

use super::fields::{TextField, Toggle};
use crate::{
    client::{
        api::ApiClient,
        component::{ErrorMessage, Flash},
        hook::dismiss_later,
        model::{
            query::{QueryClient, QueryKey},
            settings::{
                join_list, load_server_settings, parse_list, reset_server_settings,
                save_server_settings, shows_nsfw_actions, DraftSync, FlashMessage, SETTINGS_RESET,
            },
        },
    },
    model::settings::ServerSettingsDto,
};

/// Editable copy of the settings. List fields are edited as comma-separated
/// text and parsed on save.
#[derive(Clone, Debug, PartialEq)]
struct SettingsDraft {
    settings: ServerSettingsDto,
    channels: String,
    roles: String,
}

impl SettingsDraft {
    fn new(settings: ServerSettingsDto) -> Self {
        Self {
            channels: join_list(&settings.moderation_channels),
            roles: join_list(&settings.exempt_roles),
            settings,
        }
    }

    fn to_settings(&self) -> ServerSettingsDto {
        ServerSettingsDto {
            moderation_channels: parse_list(&self.channels),
            exempt_roles: parse_list(&self.roles),
            ..self.settings.clone()
        }
        .clamped()
    }
}

#[component]
pub fn ServerSettingsForm(server_id: String) -> Element {
    let api = use_context::<ApiClient>();
    let mut queries = use_context::<QueryClient>();
    let mut draft = use_signal(|| None::<SettingsDraft>);
    let mut loaded_name = use_signal(String::new);
    let mut flash = use_signal(|| None::<FlashMessage>);
    let mut saving = use_signal(|| false);
    let mut sync = use_signal(DraftSync::default);

    let key = QueryKey::ServerSettings(server_id.clone());
    let loaded = use_resource({
        let api = api.clone();
        let server_id = server_id.clone();
        let key = key.clone();
        move || {
            let api = api.clone();
            let server_id = server_id.clone();
            let _ = queries.version(&key);
            async move { load_server_settings(&api, &server_id).await }
        }
    });

    use_effect(move || {
        if let Some(Ok(settings)) = &*loaded.read() {
            if !sync.write().accept() {
                return;
            }
            loaded_name.set(settings.server_name.clone());
            draft.set(Some(SettingsDraft::new(settings.clone())));
        }
    });

    let save = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(current) = draft() else {
            return;
        };
        let api = api.clone();
        let server_id = server_id.clone();
        let name = loaded_name();
        saving.set(true);
        spawn(async move {
            let outcome =
                save_server_settings(&api, &server_id, &current.to_settings(), &name).await;
            if !outcome.invalidate.is_empty() {
                sync.write().saved();
            }
            let after_ms = outcome.message.dismiss_after_ms();
            flash.set(Some(outcome.message));
            dismiss_later(flash, after_ms);
            queries.invalidate_all(outcome.invalidate);
            saving.set(false);
        });
    };

    let reset = move |_| {
        tracing::debug!("Resetting server settings form");
        draft.set(Some(SettingsDraft::new(reset_server_settings(&loaded_name()))));
        let message = FlashMessage::info(SETTINGS_RESET);
        let after_ms = message.dismiss_after_ms();
        flash.set(Some(message));
        dismiss_later(flash, after_ms);
    };

    let Some(current) = draft() else {
        let state = loaded.read_unchecked();
        return match &*state {
            Some(Err(err)) => rsx!(ErrorMessage {
                error: err.clone(),
                title: "Failed to load server settings".to_string(),
                on_retry: move |_| queries.invalidate(key.clone()),
            }),
            _ => rsx!(div {
                class: "flex justify-center py-16",
                span { class: "loading loading-spinner loading-lg" }
            }),
        };
    };
    let settings = current.settings.clone();

    rsx!(form {
        class: "flex flex-col gap-6",
        onsubmit: save,
        if let Some(message) = flash() {
            Flash { message }
        }
        div {
            class: "card bg-base-200",
            div {
                class: "card-body gap-2",
                h2 { class: "card-title", "General" }
                TextField {
                    label: "Server name",
                    placeholder: "My Community",
                    hint: "Shown throughout the dashboard",
                    value: settings.server_name.clone(),
                    on_change: move |v| draft.with_mut(|d| {
                        if let Some(d) = d.as_mut() { d.settings.server_name = v }
                    }),
                }
                fieldset {
                    class: "fieldset",
                    legend { class: "fieldset-legend", "Welcome message" }
                    textarea {
                        class: "textarea textarea-bordered w-full",
                        rows: 3,
                        placeholder: "Welcome {{{{user}}}} to {{{{server}}}}!",
                        value: "{settings.welcome_message}",
                        oninput: move |evt| draft.with_mut(|d| {
                            if let Some(d) = d.as_mut() { d.settings.welcome_message = evt.value() }
                        }),
                    }
                    p { class: "label text-xs", "Use {{{{user}}}} and {{{{server}}}} as placeholders" }
                }
            }
        }
        div {
            class: "card bg-base-200",
            div {
                class: "card-body gap-2",
                h2 { class: "card-title", "Moderation" }
                TextField {
                    label: "Moderated channels",
                    placeholder: "general, memes",
                    hint: "Comma-separated. Leave empty to moderate every channel",
                    value: current.channels.clone(),
                    on_change: move |v| draft.with_mut(|d| {
                        if let Some(d) = d.as_mut() { d.channels = v }
                    }),
                }
                TextField {
                    label: "Exempt roles",
                    placeholder: "Moderator, Admin",
                    hint: "Comma-separated",
                    value: current.roles.clone(),
                    on_change: move |v| draft.with_mut(|d| {
                        if let Some(d) = d.as_mut() { d.roles = v }
                    }),
                }
                TextField {
                    label: "Custom keywords",
                    placeholder: "word1, word2",
                    hint: "Extra terms to flag, comma-separated",
                    value: settings.custom_keywords.clone(),
                    on_change: move |v| draft.with_mut(|d| {
                        if let Some(d) = d.as_mut() { d.settings.custom_keywords = v }
                    }),
                }
                TextField {
                    label: "Violation log channel",
                    placeholder: "mod-log",
                    value: settings.violation_log_channel.clone(),
                    on_change: move |v| draft.with_mut(|d| {
                        if let Some(d) = d.as_mut() { d.settings.violation_log_channel = v }
                    }),
                }
                fieldset {
                    class: "fieldset",
                    legend { class: "fieldset-legend", "Escalation threshold" }
                    input {
                        r#type: "number",
                        class: "input input-bordered w-32",
                        min: "1",
                        value: "{settings.escalation_threshold}",
                        oninput: move |evt| {
                            if let Ok(n) = evt.value().parse::<u32>() {
                                draft.with_mut(|d| {
                                    if let Some(d) = d.as_mut() { d.settings.escalation_threshold = n }
                                });
                            }
                        },
                    }
                    p { class: "label text-xs", "Violations before stronger action is taken" }
                }
                Toggle {
                    label: "Adaptive learning",
                    description: "Let moderator feedback tune the detection thresholds",
                    checked: settings.learning_enabled,
                    on_change: move |v| draft.with_mut(|d| {
                        if let Some(d) = d.as_mut() { d.settings.learning_enabled = v }
                    }),
                }
                Toggle {
                    label: "Privacy mode",
                    description: "Do not store message content with violations",
                    checked: settings.privacy_mode,
                    on_change: move |v| draft.with_mut(|d| {
                        if let Some(d) = d.as_mut() { d.settings.privacy_mode = v }
                    }),
                }
            }
        }
        div {
            class: "card bg-base-200",
            div {
                class: "card-body gap-2",
                h2 { class: "card-title", "NSFW Content" }
                Toggle {
                    label: "Allow NSFW content",
                    description: "NSFW images are not treated as violations",
                    checked: settings.nsfw_allowed,
                    on_change: move |v| draft.with_mut(|d| {
                        if let Some(d) = d.as_mut() { d.settings.nsfw_allowed = v }
                    }),
                }
                if shows_nsfw_actions(&settings) {
                    div {
                        class: "pl-4 border-l-2 border-base-300",
                        Toggle {
                            label: "Delete",
                            description: "Remove NSFW images",
                            checked: settings.nsfw_auto_delete,
                            on_change: move |v| draft.with_mut(|d| {
                                if let Some(d) = d.as_mut() { d.settings.nsfw_auto_delete = v }
                            }),
                        }
                        Toggle {
                            label: "Timeout",
                            description: "Mute the member who posted it",
                            checked: settings.nsfw_auto_timeout,
                            on_change: move |v| draft.with_mut(|d| {
                                if let Some(d) = d.as_mut() { d.settings.nsfw_auto_timeout = v }
                            }),
                        }
                        Toggle {
                            label: "Kick",
                            description: "Remove the member from the server",
                            checked: settings.nsfw_auto_kick,
                            on_change: move |v| draft.with_mut(|d| {
                                if let Some(d) = d.as_mut() { d.settings.nsfw_auto_kick = v }
                            }),
                        }
                        Toggle {
                            label: "Ban",
                            description: "Ban the member permanently",
                            checked: settings.nsfw_auto_ban,
                            on_change: move |v| draft.with_mut(|d| {
                                if let Some(d) = d.as_mut() { d.settings.nsfw_auto_ban = v }
                            }),
                        }
                    }
                }
            }
        }
        div {
            class: "flex justify-end gap-2",
            button {
                r#type: "button",
                class: "btn btn-ghost",
                disabled: saving(),
                onclick: reset,
                "Reset to defaults"
            }
            button {
                r#type: "submit",
                class: "btn btn-primary",
                disabled: saving(),
                if saving() {
                    span { class: "loading loading-spinner loading-sm" }
                }
                "Save Settings"
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that list fields edited as text are parsed when the draft is saved.
    ///
    /// Expected: trimmed, non-empty items in order and a clamped threshold
    #[test]
    fn draft_parses_list_fields() {
        let mut draft = SettingsDraft::new(ServerSettingsDto {
            moderation_channels: vec!["general".to_string()],
            ..Default::default()
        });
        assert_eq!(draft.channels, "general");

        draft.channels = " general, , memes ".to_string();
        draft.roles = "Admin,Moderator".to_string();
        draft.settings.escalation_threshold = 0;

        let settings = draft.to_settings();
        assert_eq!(settings.moderation_channels, vec!["general", "memes"]);
        assert_eq!(settings.exempt_roles, vec!["Admin", "Moderator"]);
        assert_eq!(settings.escalation_threshold, 1);
    }
}
