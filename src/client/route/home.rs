use dioxus::prelude::*;

use crate::client::{
    api::ApiClient,
    component::Page,
    config::ClientConfig,
    constant::{SITE_NAME, SITE_TAGLINE},
    content::features::{BOT_COMMANDS, FEATURES, HIGHLIGHTS},
    model::auth::AuthContext,
    router::Route,
};

#[component]
pub fn Home() -> Element {
    let auth = use_context::<AuthContext>();
    let config = use_context::<ClientConfig>();
    let user = auth.user();
    let server_count = user.as_ref().map(|u| u.servers.len());

    rsx! {
        Title { "{SITE_NAME}" }
        Page {
            class: "flex flex-col items-center gap-16",
            section {
                class: "flex flex-col items-center text-center gap-6 max-w-3xl pt-8",
                div {
                    class: "w-24 h-24 rounded-3xl bg-primary flex items-center justify-center text-5xl shadow-xl",
                    "🛡️"
                }
                h1 { class: "text-5xl font-bold", "{SITE_NAME}" }
                p { class: "text-xl opacity-80", "{SITE_TAGLINE}" }
                div {
                    class: "flex flex-wrap justify-center gap-3",
                    if let Some(user) = user.clone() {
                        Link {
                            to: Route::Dashboard {},
                            class: "btn btn-primary btn-lg",
                            "Open Dashboard, {user.name()}"
                        }
                    } else {
                        Link { to: Route::Login {}, class: "btn btn-primary btn-lg", "Get Started" }
                    }
                    if let Some(invite) = config.bot_invite_url.clone() {
                        a {
                            class: "btn btn-outline btn-lg",
                            href: "{invite}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "Add to Discord"
                        }
                    }
                }
                BackendStatus {}
            }
            section {
                class: "stats stats-vertical md:stats-horizontal shadow bg-base-200",
                if let Some(count) = server_count {
                    div {
                        class: "stat place-items-center",
                        div { class: "stat-figure text-3xl", "🏠" }
                        div { class: "stat-title", "Your Servers" }
                        div { class: "stat-value", "{count}" }
                    }
                }
                for highlight in HIGHLIGHTS {
                    div {
                        key: "{highlight.label}",
                        class: "stat place-items-center",
                        div { class: "stat-figure text-3xl", "{highlight.icon}" }
                        div { class: "stat-title", "{highlight.label}" }
                        div { class: "stat-value", "{highlight.value}" }
                    }
                }
            }
            section {
                class: "grid grid-cols-1 md:grid-cols-2 gap-6 max-w-5xl w-full",
                for feature in FEATURES {
                    div {
                        key: "{feature.title}",
                        class: "card bg-base-200",
                        div {
                            class: "card-body",
                            p { class: "text-4xl", "{feature.icon}" }
                            h2 { class: "card-title", "{feature.title}" }
                            p { class: "opacity-80", "{feature.description}" }
                        }
                    }
                }
            }
            section {
                class: "card bg-base-200 max-w-3xl w-full",
                div {
                    class: "card-body",
                    h2 { class: "card-title", "Bot commands" }
                    table {
                        class: "table",
                        tbody {
                            for (command, description) in BOT_COMMANDS.iter() {
                                tr {
                                    key: "{command}",
                                    td { code { "{command}" } }
                                    td { "{description}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Small indicator of whether the backend answers its health check.
#[component]
fn BackendStatus() -> Element {
    let api = use_context::<ApiClient>();
    let health = use_resource(move || {
        let api = api.clone();
        async move { api.health().await }
    });

    let (class, label) = match &*health.read_unchecked() {
        None => ("badge-ghost", "Checking status...".to_string()),
        Some(Ok(status)) if status.is_operational() => {
            ("badge-success", "All systems operational".to_string())
        }
        Some(Ok(status)) => ("badge-warning", format!("Status: {}", status.status)),
        Some(Err(_)) => ("badge-error", "Service unreachable".to_string()),
    };

    rsx!(span { class: "badge {class} badge-outline gap-2", "{label}" })
}
