use dioxus::prelude::*;

use crate::{
    client::model::{
        format::{format_number, format_percentage},
        stats::{consistency_report, DerivedStats},
    },
    model::server::ServerStatsDto,
};

#[component]
pub fn StatsOverview(stats: ServerStatsDto) -> Element {
    let derived = DerivedStats::from_stats(&stats);
    let warnings = consistency_report(&stats);

    rsx!(div {
        class: "flex flex-col gap-3",
        div {
            class: "stats stats-vertical md:stats-horizontal shadow bg-base-200 w-full",
            div {
                class: "stat",
                div { class: "stat-figure text-3xl", "💬" }
                div { class: "stat-title", "Messages Processed" }
                div { class: "stat-value", "{format_number(stats.total_messages)}" }
            }
            div {
                class: "stat",
                div { class: "stat-figure text-3xl", "🛡️" }
                div { class: "stat-title", "Violations" }
                div { class: "stat-value", "{format_number(stats.total_violations)}" }
                div { class: "stat-desc", "{format_percentage(derived.violation_rate, 2)} of messages" }
            }
            div {
                class: "stat",
                div { class: "stat-figure text-3xl", "🎯" }
                div { class: "stat-title", "Accuracy" }
                div { class: "stat-value", "{format_percentage(derived.accuracy, 1)}" }
                div { class: "stat-desc", "{format_number(stats.false_positives)} false positives" }
            }
            div {
                class: "stat",
                div { class: "stat-figure text-3xl", "{derived.status.icon()}" }
                div { class: "stat-title", "Community Health" }
                div {
                    class: "stat-value {derived.status.text_class()}",
                    "{format_percentage(stats.health_score, 0)}"
                }
                div {
                    class: "stat-desc",
                    if derived.is_healthy { "Healthy" } else { "Needs attention" }
                }
            }
        }
        for warning in warnings {
            div {
                key: "{warning.message()}",
                role: "alert",
                class: "alert alert-warning alert-soft text-sm",
                span { "⚠️ {warning.message()}" }
            }
        }
    })
}
