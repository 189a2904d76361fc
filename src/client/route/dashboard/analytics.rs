use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        api::ApiClient,
        component::{AnalyticsChart, ErrorMessage},
        constant::DEFAULT_ANALYTICS_DAYS,
        model::query::{QueryClient, QueryKey},
    },
    model::dashboard::AnalyticsPointDto,
};

const DAY_RANGES: [u32; 3] = [7, 14, 30];

/// Analytics chart with a day-range selector. `initial` is the dashboard's
/// embedded series, shown for the default range until the fetch completes.
#[component]
pub fn AnalyticsPanel(server_id: String, initial: Vec<AnalyticsPointDto>) -> Element {
    let api = use_context::<ApiClient>();
    let mut queries = use_context::<QueryClient>();
    let mut days = use_signal(|| DEFAULT_ANALYTICS_DAYS);
    let mut generating = use_signal(|| false);

    let analytics = use_resource({
        let api = api.clone();
        let server_id = server_id.clone();
        move || {
            let api = api.clone();
            let server_id = server_id.clone();
            let days = days();
            let _ = queries.version(&QueryKey::Analytics(server_id.clone()));
            async move { api.get_server_analytics(&server_id, Some(days)).await }
        }
    });

    let generate = {
        let server_id = server_id.clone();
        move |_| {
            let api = api.clone();
            let server_id = server_id.clone();
            generating.set(true);
            spawn(async move {
                match api.generate_analytics_data(&server_id).await {
                    Ok(()) => queries.invalidate_all([
                        QueryKey::Analytics(server_id.clone()),
                        QueryKey::Dashboard(server_id),
                    ]),
                    Err(err) => tracing::error!("Failed to generate analytics data: {}", err),
                }
                generating.set(false);
            });
        }
    };

    let state = analytics.read_unchecked();
    let points = match &*state {
        Some(Ok(data)) => Some(data.analytics.clone()),
        None if days() == DEFAULT_ANALYTICS_DAYS && !initial.is_empty() => Some(initial.clone()),
        _ => None,
    };

    rsx!(div {
        class: "card bg-base-200 h-full",
        div {
            class: "card-body",
            div {
                class: "flex flex-wrap items-center justify-between gap-2",
                h2 { class: "card-title", "Analytics" }
                select {
                    class: "select select-sm select-bordered",
                    value: "{days}",
                    onchange: move |evt| {
                        if let Ok(value) = evt.value().parse::<u32>() {
                            days.set(value);
                        }
                    },
                    for range in DAY_RANGES {
                        option {
                            key: "{range}",
                            value: "{range}",
                            selected: days() == range,
                            "Last {range} days"
                        }
                    }
                }
            }
            match (points, &*state) {
                (Some(points), _) if !points.is_empty() => rsx!(AnalyticsChart { points }),
                (Some(_), _) => rsx! {
                    div {
                        class: "flex flex-col items-center gap-3 py-8 text-center",
                        p { class: "opacity-70", "No analytics recorded for this period." }
                        button {
                            class: "btn btn-sm btn-outline",
                            disabled: generating(),
                            onclick: generate,
                            if generating() {
                                span { class: "loading loading-spinner loading-xs" }
                            }
                            "Generate sample data"
                        }
                    }
                },
                (None, Some(Err(err))) => rsx!(ErrorMessage {
                    error: err.clone(),
                    title: "Failed to load analytics".to_string(),
                    on_retry: move |_| queries.invalidate(QueryKey::Analytics(server_id.clone())),
                }),
                (None, _) => rsx!(div {
                    class: "flex justify-center py-12",
                    span { class: "loading loading-spinner" }
                }),
            }
        }
    })
}
