use dioxus::prelude::*;

use crate::{
    client::{
        api::ApiClient,
        constant::INSIGHTS_POLL_INTERVAL_MS,
        hook::use_polling,
        model::{
            format::{format_number, format_percentage},
            query::{QueryClient, QueryKey},
            violation::type_label,
        },
    },
    model::violation::ViolationType,
};

#[component]
pub fn InsightsPanel(server_id: String) -> Element {
    let api = use_context::<ApiClient>();
    let mut queries = use_context::<QueryClient>();
    let key = QueryKey::Insights(server_id.clone());

    let insights = use_resource({
        let key = key.clone();
        move || {
            let api = api.clone();
            let server_id = server_id.clone();
            let _ = queries.version(&key);
            async move { api.get_learning_insights(&server_id).await }
        }
    });

    use_polling(INSIGHTS_POLL_INTERVAL_MS, move || queries.invalidate(key.clone()));

    // Insights are supplementary; failures only hide the panel
    let state = insights.read_unchecked();
    let Some(Ok(insights)) = &*state else {
        return rsx!();
    };

    rsx!(div {
        class: "card bg-base-200",
        div {
            class: "card-body",
            h2 { class: "card-title", "Learning Insights" }
            div {
                class: "grid grid-cols-2 md:grid-cols-4 gap-4",
                InsightFigure { label: "Violations analysed", value: format_number(insights.total_violations) }
                InsightFigure { label: "Average confidence", value: format_percentage(insights.average_confidence, 0) }
                InsightFigure { label: "False positive rate", value: format_percentage(insights.false_positive_rate, 1) }
                InsightFigure { label: "Health score", value: format_percentage(insights.health_score, 0) }
            }
            div {
                class: "grid grid-cols-1 md:grid-cols-2 gap-6 mt-4",
                if !insights.violation_types.is_empty() {
                    div {
                        h3 { class: "font-semibold mb-2", "Violation types" }
                        ul {
                            class: "flex flex-col gap-1 text-sm",
                            for (kind, count) in insights.violation_types.iter() {
                                li {
                                    key: "{kind}",
                                    class: "flex justify-between",
                                    span { "{type_label(&ViolationType::from(kind.clone()))}" }
                                    span { class: "font-mono", "{format_number(*count)}" }
                                }
                            }
                        }
                    }
                }
                if !insights.current_thresholds.is_empty() {
                    div {
                        h3 { class: "font-semibold mb-2", "Current thresholds" }
                        ul {
                            class: "flex flex-col gap-1 text-sm",
                            for (name, value) in insights.current_thresholds.iter() {
                                li {
                                    key: "{name}",
                                    class: "flex justify-between",
                                    span { "{type_label(&ViolationType::from(name.clone()))}" }
                                    span { class: "font-mono", "{value:.2}" }
                                }
                            }
                        }
                    }
                }
            }
            if !insights.recommendations.is_empty() {
                div {
                    class: "mt-4",
                    h3 { class: "font-semibold mb-2", "Recommendations" }
                    ul {
                        class: "list-disc list-inside text-sm opacity-80",
                        for (i, recommendation) in insights.recommendations.iter().enumerate() {
                            li { key: "{i}", "{recommendation}" }
                        }
                    }
                }
            }
        }
    })
}

#[component]
fn InsightFigure(label: &'static str, value: String) -> Element {
    rsx!(div {
        class: "flex flex-col",
        span { class: "text-xs opacity-60", "{label}" }
        span { class: "text-xl font-bold", "{value}" }
    })
}
