use dioxus::prelude::*;

use crate::{
    client::{
        api::ApiClient,
        component::HealthGauge,
        model::query::{QueryClient, QueryKey},
    },
    model::dashboard::{HealthScoreDto, HealthStatus},
};

/// Health gauge with recommendations. Uses the score embedded in the
/// dashboard payload and only calls the health endpoint when it is missing.
#[component]
pub fn HealthPanel(server_id: String, health: Option<HealthScoreDto>, fallback_score: f64) -> Element {
    let api = use_context::<ApiClient>();
    let queries = use_context::<QueryClient>();
    let needs_fetch = health.is_none();

    let fetched = use_resource({
        let server_id = server_id.clone();
        move || {
            let api = api.clone();
            let server_id = server_id.clone();
            let _ = queries.version(&QueryKey::Dashboard(server_id.clone()));
            async move {
                if needs_fetch {
                    api.get_server_health(&server_id).await.ok()
                } else {
                    None
                }
            }
        }
    });

    let health = health
        .or_else(|| (*fetched.read_unchecked()).clone().flatten())
        .unwrap_or_else(|| HealthScoreDto {
            health_score: fallback_score,
            status: HealthStatus::from_score(fallback_score),
            recommendations: Vec::new(),
        });

    let status = match health.status {
        HealthStatus::Unknown => HealthStatus::from_score(health.health_score),
        status => status,
    };

    rsx!(div {
        class: "card bg-base-200 h-full",
        div {
            class: "card-body items-center",
            h2 { class: "card-title self-start", "Community Health" }
            HealthGauge { score: health.health_score, status }
            if !health.recommendations.is_empty() {
                ul {
                    class: "list-disc list-inside text-sm opacity-80 self-start",
                    for (i, recommendation) in health.recommendations.iter().enumerate() {
                        li { key: "{i}", "{recommendation}" }
                    }
                }
            }
        }
    })
}
