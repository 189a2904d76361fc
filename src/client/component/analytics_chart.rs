use dioxus::prelude::*;

use crate::{
    client::model::{
        chart::{AnalyticsTotals, ChartSeries, Metric},
        format::{format_number, format_percentage},
    },
    model::dashboard::AnalyticsPointDto,
};

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 200.0;

#[component]
pub fn AnalyticsChart(points: Vec<AnalyticsPointDto>) -> Element {
    let mut metric = use_signal(|| Metric::Messages);

    if points.is_empty() {
        return rsx!(div {
            class: "flex flex-col items-center justify-center h-48 opacity-60",
            p { "No analytics data yet" }
            p { class: "text-sm", "Data appears once the bot has processed messages." }
        });
    }

    let series = ChartSeries::new(&points, metric());
    let totals = AnalyticsTotals::from_points(&points);
    let polyline = series.polyline(WIDTH, HEIGHT);
    let max = series.max();

    rsx!(div {
        class: "flex flex-col gap-4",
        div {
            class: "join",
            for m in Metric::ALL {
                button {
                    key: "{m.label()}",
                    class: "btn btn-sm join-item",
                    class: if metric() == m { "btn-active" },
                    onclick: move |_| metric.set(m),
                    "{m.label()}"
                }
            }
        }
        svg {
            class: "w-full h-56",
            view_box: "-10 -10 {WIDTH + 20.0} {HEIGHT + 40.0}",
            preserve_aspect_ratio: "none",
            line {
                x1: "0", y1: "{HEIGHT}", x2: "{WIDTH}", y2: "{HEIGHT}",
                stroke: "currentColor", stroke_opacity: "0.2",
            }
            polyline {
                points: "{polyline}",
                fill: "none",
                stroke: "{series.metric.color()}",
                stroke_width: "3",
                stroke_linejoin: "round",
            }
            for (i, label) in series.labels.iter().enumerate() {
                text {
                    key: "{i}",
                    x: "{label_x(i, series.labels.len())}",
                    y: "{HEIGHT + 24.0}",
                    font_size: "12",
                    text_anchor: "middle",
                    fill: "currentColor",
                    "{label}"
                }
            }
        }
        p { class: "text-xs opacity-60 text-right", "Peak: {max:.0}" }
        div {
            class: "stats stats-vertical sm:stats-horizontal bg-base-200",
            div {
                class: "stat",
                div { class: "stat-title", "Messages" }
                div { class: "stat-value text-2xl", "{format_number(totals.messages)}" }
            }
            div {
                class: "stat",
                div { class: "stat-title", "Violations" }
                div { class: "stat-value text-2xl", "{format_number(totals.violations)}" }
            }
            div {
                class: "stat",
                div { class: "stat-title", "False Positives" }
                div { class: "stat-value text-2xl", "{format_number(totals.false_positives)}" }
            }
            div {
                class: "stat",
                div { class: "stat-title", "Avg. Health" }
                div { class: "stat-value text-2xl", "{format_percentage(totals.average_health, 0)}" }
            }
        }
    })
}

fn label_x(index: usize, count: usize) -> f64 {
    if count > 1 {
        index as f64 * WIDTH / (count - 1) as f64
    } else {
        WIDTH / 2.0
    }
}
