use dioxus::prelude::*;

use crate::model::dashboard::HealthStatus;

const RADIUS: f64 = 52.0;

/// Circular gauge for a 0.0-1.0 health score.
#[component]
pub fn HealthGauge(score: f64, status: HealthStatus) -> Element {
    let fraction = if score.is_finite() { score.clamp(0.0, 1.0) } else { 0.0 };
    let circumference = 2.0 * std::f64::consts::PI * RADIUS;
    let offset = circumference * (1.0 - fraction);
    let percent = (fraction * 100.0).round() as u32;

    rsx!(div {
        class: "relative w-36 h-36",
        svg {
            class: "w-36 h-36 -rotate-90",
            view_box: "0 0 120 120",
            circle {
                cx: "60",
                cy: "60",
                r: "{RADIUS}",
                fill: "none",
                stroke: "currentColor",
                stroke_opacity: "0.1",
                stroke_width: "10",
            }
            circle {
                cx: "60",
                cy: "60",
                r: "{RADIUS}",
                fill: "none",
                stroke: "{status.stroke()}",
                stroke_width: "10",
                stroke_linecap: "round",
                stroke_dasharray: "{circumference:.2}",
                stroke_dashoffset: "{offset:.2}",
            }
        }
        div {
            class: "absolute inset-0 flex flex-col items-center justify-center",
            span { class: "text-3xl font-bold", "{percent}%" }
            span { class: "text-sm {status.text_class()}", "{status.icon()} {status.label()}" }
        }
    })
}
