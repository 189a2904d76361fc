use dioxus::prelude::*;
use dioxus_logger::tracing;

use super::fields::{ThresholdSlider, Toggle};
use crate::{
    client::{
        api::ApiClient,
        component::Flash,
        hook::dismiss_later,
        model::{
            query::{QueryClient, QueryKey},
            settings::{
                format_duration, load_bot_config, save_bot_config, shows_timeout_duration,
                DraftSync, FlashMessage, CONFIG_LOAD_FAILED, CONFIG_RESET, TIMEOUT_PRESETS,
            },
        },
    },
    model::settings::BotConfigDto,
};

#[component]
pub fn BotConfigForm(server_id: String) -> Element {
    let api = use_context::<ApiClient>();
    let mut queries = use_context::<QueryClient>();
    let mut form = use_signal(|| None::<BotConfigDto>);
    let mut flash = use_signal(|| None::<FlashMessage>);
    let mut saving = use_signal(|| false);
    let mut sync = use_signal(DraftSync::default);

    let loaded = use_resource({
        let api = api.clone();
        let server_id = server_id.clone();
        move || {
            let api = api.clone();
            let server_id = server_id.clone();
            let _ = queries.version(&QueryKey::BotConfig(server_id.clone()));
            async move { load_bot_config(&api, &server_id).await }
        }
    });

    // Refetches after unrelated changes keep the user's edits
    use_effect(move || match &*loaded.read() {
        Some(Ok(config)) => {
            if sync.write().accept() {
                form.set(Some(config.clone()));
            }
        }
        Some(Err(err)) => {
            tracing::warn!("Failed to load bot configuration: {}", err);
            if !sync.peek().is_seeded() && form.peek().is_none() {
                form.set(Some(BotConfigDto::default()));
                flash.set(Some(FlashMessage::warning(CONFIG_LOAD_FAILED)));
            }
        }
        None => {}
    });

    let save = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(config) = form() else {
            return;
        };
        let api = api.clone();
        let server_id = server_id.clone();
        saving.set(true);
        spawn(async move {
            let outcome = save_bot_config(&api, &server_id, &config.clamped()).await;
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
        form.set(Some(BotConfigDto::default()));
        let message = FlashMessage::info(CONFIG_RESET);
        let after_ms = message.dismiss_after_ms();
        flash.set(Some(message));
        dismiss_later(flash, after_ms);
    };

    let Some(config) = form() else {
        return rsx!(div {
            class: "flex justify-center py-16",
            span { class: "loading loading-spinner loading-lg" }
        });
    };

    rsx!(form {
        class: "flex flex-col gap-6",
        onsubmit: save,
        if let Some(message) = flash() {
            Flash { message }
        }
        div {
            class: "card bg-base-200",
            div {
                class: "card-body gap-4",
                h2 { class: "card-title", "Detection Thresholds" }
                p {
                    class: "text-sm opacity-70",
                    "Lower values flag more content. Higher values only act on clear violations."
                }
                ThresholdSlider {
                    label: "Toxicity",
                    description: "Insults, profanity and hostile language",
                    value: config.toxicity_threshold,
                    on_change: move |v| form.with_mut(|f| {
                        if let Some(f) = f.as_mut() { f.toxicity_threshold = v }
                    }),
                }
                ThresholdSlider {
                    label: "Spam",
                    description: "Repeated messages, advertising and link floods",
                    value: config.spam_threshold,
                    on_change: move |v| form.with_mut(|f| {
                        if let Some(f) = f.as_mut() { f.spam_threshold = v }
                    }),
                }
                ThresholdSlider {
                    label: "Harassment",
                    description: "Targeted abuse aimed at other members",
                    value: config.harassment_threshold,
                    on_change: move |v| form.with_mut(|f| {
                        if let Some(f) = f.as_mut() { f.harassment_threshold = v }
                    }),
                }
            }
        }
        div {
            class: "card bg-base-200",
            div {
                class: "card-body gap-2",
                h2 { class: "card-title", "Automated Actions" }
                Toggle {
                    label: "Auto-delete",
                    description: "Remove messages that cross a threshold",
                    checked: config.auto_delete,
                    on_change: move |v| form.with_mut(|f| {
                        if let Some(f) = f.as_mut() { f.auto_delete = v }
                    }),
                }
                Toggle {
                    label: "Auto-timeout",
                    description: "Temporarily mute members who post violations",
                    checked: config.auto_timeout,
                    on_change: move |v| form.with_mut(|f| {
                        if let Some(f) = f.as_mut() { f.auto_timeout = v }
                    }),
                }
                if shows_timeout_duration(&config) {
                    fieldset {
                        class: "fieldset pl-4",
                        legend { class: "fieldset-legend", "Timeout duration" }
                        select {
                            class: "select select-bordered w-full max-w-xs",
                            value: "{config.timeout_duration}",
                            onchange: move |evt| {
                                if let Ok(secs) = evt.value().parse::<u32>() {
                                    form.with_mut(|f| {
                                        if let Some(f) = f.as_mut() { f.timeout_duration = secs }
                                    });
                                }
                            },
                            for (secs, label) in TIMEOUT_PRESETS.iter().copied() {
                                option {
                                    key: "{secs}",
                                    value: "{secs}",
                                    selected: config.timeout_duration == secs,
                                    "{label}"
                                }
                            }
                            if !TIMEOUT_PRESETS.iter().any(|(secs, _)| *secs == config.timeout_duration) {
                                option {
                                    value: "{config.timeout_duration}",
                                    selected: true,
                                    "{format_duration(config.timeout_duration)}"
                                }
                            }
                        }
                    }
                }
                Toggle {
                    label: "Warnings",
                    description: "Send a warning to members before acting",
                    checked: config.warning_enabled,
                    on_change: move |v| form.with_mut(|f| {
                        if let Some(f) = f.as_mut() { f.warning_enabled = v }
                    }),
                }
                Toggle {
                    label: "Escalation",
                    description: "Apply stronger actions to repeat offenders",
                    checked: config.escalation_enabled,
                    on_change: move |v| form.with_mut(|f| {
                        if let Some(f) = f.as_mut() { f.escalation_enabled = v }
                    }),
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
                "Save Configuration"
            }
        }
    })
}
