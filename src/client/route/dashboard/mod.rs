mod analytics;
mod health;
mod insights;
mod stats_overview;
mod violations;

pub use analytics::AnalyticsPanel;
pub use health::HealthPanel;
pub use insights::InsightsPanel;
pub use stats_overview::StatsOverview;
pub use violations::ViolationsList;

use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaArrowsRotate, Icon};
use dioxus_logger::tracing;

use crate::{
    client::{
        api::ApiClient,
        component::{page::LoadingPage, ErrorMessage, Page, ServerSelector},
        config::ClientConfig,
        constant::{POLL_INTERVAL_MS, SITE_NAME},
        hook::{use_last_success, use_polling, use_server_list},
        model::{
            auth::AuthContext,
            query::{QueryClient, QueryKey},
            selection::SelectedServer,
        },
    },
    model::server::ServerSummaryDto,
};

#[component]
pub fn Dashboard() -> Element {
    let mut queries = use_context::<QueryClient>();
    let selected = use_context::<SelectedServer>();
    let servers = use_server_list();

    let state = servers.read_unchecked();

    rsx! {
        Title { "Dashboard | {SITE_NAME}" }
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
            Some(Ok(list)) if list.is_empty() => rsx!(NoServers {}),
            Some(Ok(list)) => rsx! {
                Page {
                    class: "max-w-6xl mx-auto flex flex-col gap-6",
                    DashboardHeader { servers: list.clone() }
                    if let Some(server_id) = selected.get() {
                        ServerDashboard { key: "{server_id}", server_id: server_id.clone() }
                    }
                }
            },
        }
    }
}

#[component]
fn DashboardHeader(servers: Vec<ServerSummaryDto>) -> Element {
    let mut queries = use_context::<QueryClient>();
    let selected = use_context::<SelectedServer>();

    let refresh = move |_| {
        if let Some(server_id) = selected.get() {
            tracing::debug!("Manual dashboard refresh for server {}", server_id);
            queries.invalidate_all([
                QueryKey::Dashboard(server_id.clone()),
                QueryKey::Analytics(server_id.clone()),
                QueryKey::Insights(server_id),
            ]);
        }
    };

    rsx!(div {
        class: "flex flex-wrap items-center justify-between gap-4",
        div {
            h1 { class: "text-3xl font-bold", "Dashboard" }
            p { class: "opacity-70", "Moderation activity for your communities" }
        }
        div {
            class: "flex items-center gap-2",
            ServerSelector { servers }
            button {
                class: "btn btn-square btn-outline",
                title: "Refresh",
                onclick: refresh,
                Icon { width: 16, height: 16, icon: FaArrowsRotate }
            }
        }
    })
}

#[component]
fn ServerDashboard(server_id: String) -> Element {
    let api = use_context::<ApiClient>();
    let mut queries = use_context::<QueryClient>();

    let key = QueryKey::Dashboard(server_id.clone());
    let dashboard = use_resource({
        let server_id = server_id.clone();
        let key = key.clone();
        move || {
            let api = api.clone();
            let server_id = server_id.clone();
            let _ = queries.version(&key);
            async move { api.get_dashboard_data(&server_id).await }
        }
    });

    use_polling(POLL_INTERVAL_MS, {
        let key = key.clone();
        move || queries.invalidate(key.clone())
    });

    // Keep showing the previous payload while a refetch is in flight
    let last = use_last_success(dashboard);

    let state = dashboard.read_unchecked();

    let error = match &*state {
        Some(Err(err)) => Some(err.clone()),
        _ => None,
    };

    let Some(data) = last() else {
        return match error {
            Some(err) => rsx!(ErrorMessage {
                error: err,
                title: "Failed to load dashboard".to_string(),
                on_retry: move |_| queries.invalidate(key.clone()),
            }),
            None => rsx!(div {
                class: "flex justify-center py-16",
                span { class: "loading loading-spinner loading-lg" }
            }),
        };
    };

    let stats = data.server_stats.clone().unwrap_or_default();

    rsx! {
        if let Some(err) = error {
            ErrorMessage {
                error: err,
                title: "Showing the last loaded data".to_string(),
                on_retry: move |_| queries.invalidate(key.clone()),
            }
        }
        StatsOverview { stats: stats.clone() }
        div {
            class: "grid grid-cols-1 lg:grid-cols-3 gap-6",
            div {
                class: "lg:col-span-2",
                AnalyticsPanel { server_id: server_id.clone(), initial: data.recent_analytics.clone() }
            }
            HealthPanel {
                server_id: server_id.clone(),
                health: data.health_score.clone(),
                fallback_score: stats.health_score,
            }
        }
        InsightsPanel { server_id: server_id.clone() }
        ViolationsList { server_id: server_id.clone(), violations: data.recent_violations.clone() }
    }
}

#[component]
fn NoServers() -> Element {
    let api = use_context::<ApiClient>();
    let config = use_context::<ClientConfig>();
    let mut auth = use_context::<AuthContext>();
    let mut queries = use_context::<QueryClient>();
    let mut refreshing = use_signal(|| false);

    let refresh = move |_| {
        let api = api.clone();
        refreshing.set(true);
        spawn(async move {
            auth.refresh_servers(&api).await;
            queries.invalidate(QueryKey::Servers);
            refreshing.set(false);
        });
    };

    rsx!(Page {
        class: "flex items-center justify-center",
        div {
            class: "card bg-base-200 max-w-lg text-center",
            div {
                class: "card-body items-center gap-4",
                p { class: "text-5xl", "🤖" }
                h2 { class: "card-title", "No servers found" }
                p {
                    class: "opacity-70",
                    "Invite {SITE_NAME} to a server you manage, then refresh this page."
                }
                div {
                    class: "card-actions",
                    if let Some(invite) = config.bot_invite_url.clone() {
                        a {
                            class: "btn btn-primary",
                            href: "{invite}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "Invite Bot"
                        }
                    }
                    button {
                        class: "btn btn-outline",
                        disabled: refreshing(),
                        onclick: refresh,
                        if refreshing() {
                            span { class: "loading loading-spinner loading-sm" }
                        }
                        "Refresh Servers"
                    }
                }
            }
        }
    })
}
