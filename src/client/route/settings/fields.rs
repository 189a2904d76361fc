use dioxus::prelude::*;

use crate::{
    client::model::settings::{sensitivity_label, threshold_percent},
    model::settings::{MAX_THRESHOLD, MIN_THRESHOLD},
};

#[component]
pub fn ThresholdSlider(
    label: &'static str,
    description: &'static str,
    value: f64,
    on_change: EventHandler<f64>,
) -> Element {
    rsx!(div {
        class: "flex flex-col gap-1",
        div {
            class: "flex justify-between items-baseline",
            span { class: "font-semibold", "{label}" }
            span {
                class: "text-sm",
                "{threshold_percent(value)}% · {sensitivity_label(value)}"
            }
        }
        input {
            r#type: "range",
            class: "range range-primary range-sm",
            min: "{MIN_THRESHOLD}",
            max: "{MAX_THRESHOLD}",
            step: "0.05",
            value: "{value}",
            oninput: move |evt| {
                if let Ok(v) = evt.value().parse::<f64>() {
                    on_change.call(v);
                }
            },
        }
        p { class: "text-xs opacity-60", "{description}" }
    })
}

#[component]
pub fn Toggle(
    label: &'static str,
    description: &'static str,
    checked: bool,
    on_change: EventHandler<bool>,
) -> Element {
    rsx!(label {
        class: "flex items-start justify-between gap-4 cursor-pointer py-2",
        div {
            span { class: "font-semibold", "{label}" }
            p { class: "text-xs opacity-60", "{description}" }
        }
        input {
            r#type: "checkbox",
            class: "toggle toggle-primary",
            checked,
            onchange: move |evt| on_change.call(evt.checked()),
        }
    })
}

#[component]
pub fn TextField(
    label: &'static str,
    #[props(default)] placeholder: &'static str,
    #[props(default)] hint: Option<&'static str>,
    value: String,
    on_change: EventHandler<String>,
) -> Element {
    rsx!(fieldset {
        class: "fieldset",
        legend { class: "fieldset-legend", "{label}" }
        input {
            r#type: "text",
            class: "input input-bordered w-full",
            placeholder,
            value: "{value}",
            oninput: move |evt| on_change.call(evt.value()),
        }
        if let Some(hint) = hint {
            p { class: "label text-xs", "{hint}" }
        }
    })
}
