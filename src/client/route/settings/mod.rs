mod bot_config;
mod fields;
mod server_settings;

pub use bot_config::BotConfigForm;
pub use server_settings::ServerSettingsForm;

use dioxus::prelude::*;

use crate::client::{
    component::{page::LoadingPage, ErrorMessage, Page, ServerSelector},
    constant::SITE_NAME,
    hook::use_server_list,
    model::{
        query::{QueryClient, QueryKey},
        selection::SelectedServer,
    },
    router::Route,
};

#[derive(Clone, Copy, PartialEq)]
enum SettingsTab {
    BotConfig,
    Server,
}

#[component]
pub fn Settings() -> Element {
    let mut queries = use_context::<QueryClient>();
    let selected = use_context::<SelectedServer>();
    let servers = use_server_list();
    let mut tab = use_signal(|| SettingsTab::BotConfig);

    let state = servers.read_unchecked();

    rsx! {
        Title { "Settings | {SITE_NAME}" }
        match &*state {
            None => rsx!(LoadingPage {}),
            Some(Err(err)) => rsx! {
                Page {
                    class: "max-w-3xl mx-auto",
                    ErrorMessage {
                        error: err.clone(),
                        title: "Failed to load servers".to_string(),
                        on_retry: move |_| queries.invalidate(QueryKey::Servers),
                    }
                }
            },
            Some(Ok(list)) if list.is_empty() => rsx! {
                Page {
                    class: "flex flex-col items-center justify-center gap-4",
                    p { class: "text-xl", "No servers to configure yet." }
                    Link { to: Route::Dashboard {}, class: "btn btn-primary", "Go to Dashboard" }
                }
            },
            Some(Ok(list)) => rsx! {
                Page {
                    class: "max-w-4xl mx-auto flex flex-col gap-6",
                    div {
                        class: "flex flex-wrap items-center justify-between gap-4",
                        div {
                            h1 { class: "text-3xl font-bold", "Settings" }
                            p { class: "opacity-70", "Tune how {SITE_NAME} moderates your server" }
                        }
                        ServerSelector { servers: list.clone() }
                    }
                    div {
                        role: "tablist",
                        class: "tabs tabs-box",
                        button {
                            role: "tab",
                            class: "tab",
                            class: if tab() == SettingsTab::BotConfig { "tab-active" },
                            onclick: move |_| tab.set(SettingsTab::BotConfig),
                            "🤖 Bot Configuration"
                        }
                        button {
                            role: "tab",
                            class: "tab",
                            class: if tab() == SettingsTab::Server { "tab-active" },
                            onclick: move |_| tab.set(SettingsTab::Server),
                            "⚙️ Server Settings"
                        }
                    }
                    if let Some(server_id) = selected.get() {
                        match tab() {
                            SettingsTab::BotConfig => rsx! {
                                BotConfigForm { key: "config-{server_id}", server_id: server_id.clone() }
                            },
                            SettingsTab::Server => rsx! {
                                ServerSettingsForm { key: "settings-{server_id}", server_id: server_id.clone() }
                            },
                        }
                    }
                }
            },
        }
    }
}
