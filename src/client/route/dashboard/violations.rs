use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        api::ApiClient,
        constant::DEFAULT_VIOLATION_LIMIT,
        model::{
            format::format_relative_time,
            query::{QueryClient, QueryKey},
            violation::{
                dedup_violations, row_key, type_label, FeedbackTracker, FeedbackView, ViolationDetail,
            },
        },
    },
    model::violation::ViolationDto,
};

/// Recent violations with per-row feedback. `violations` comes from the
/// dashboard payload; "Show all" switches to the violations endpoint.
#[component]
pub fn ViolationsList(server_id: String, violations: Vec<ViolationDto>) -> Element {
    let api = use_context::<ApiClient>();
    let queries = use_context::<QueryClient>();
    let tracker = use_signal(FeedbackTracker::default);
    let expanded = use_signal(|| None::<String>);
    let mut show_all = use_signal(|| false);

    let all = use_resource({
        let server_id = server_id.clone();
        move || {
            let api = api.clone();
            let server_id = server_id.clone();
            let show_all = show_all();
            let _ = queries.version(&QueryKey::Violations(server_id.clone()));
            async move {
                if !show_all {
                    return None;
                }
                Some(
                    api.get_server_violations(&server_id, Some(DEFAULT_VIOLATION_LIMIT))
                        .await
                        .map(|list| list.violations),
                )
            }
        }
    });

    let source = match &*all.read_unchecked() {
        Some(Some(Ok(list))) if show_all() => list.clone(),
        Some(Some(Err(err))) if show_all() => {
            tracing::warn!("Falling back to recent violations: {}", err);
            violations.clone()
        }
        _ => violations.clone(),
    };
    let rows = dedup_violations(source);
    let now = Utc::now();

    rsx!(div {
        class: "card bg-base-200",
        div {
            class: "card-body",
            div {
                class: "flex items-center justify-between",
                h2 { class: "card-title", "Recent Violations" }
                button {
                    class: "btn btn-sm btn-ghost",
                    onclick: move |_| show_all.set(!show_all()),
                    if show_all() { "Show recent" } else { "Show all" }
                }
            }
            if rows.is_empty() {
                div {
                    class: "py-8 text-center opacity-60",
                    p { "No violations recorded. Your community is behaving!" }
                }
            } else {
                div {
                    class: "overflow-x-auto",
                    table {
                        class: "table",
                        thead {
                            tr {
                                th { "Type" }
                                th { "Confidence" }
                                th { "Action" }
                                th { "When" }
                                th { "Feedback" }
                            }
                        }
                        tbody {
                            for (key, violation) in keyed_rows(rows) {
                                ViolationRow {
                                    key: "{key}",
                                    server_id: server_id.clone(),
                                    violation,
                                    now,
                                    tracker,
                                    expanded,
                                }
                            }
                        }
                    }
                }
            }
        }
    })
}

fn keyed_rows(rows: Vec<ViolationDto>) -> impl Iterator<Item = (String, ViolationDto)> {
    rows.into_iter().map(|violation| (row_key(&violation), violation))
}

#[component]
fn ViolationRow(
    server_id: String,
    violation: ViolationDto,
    now: DateTime<Utc>,
    mut tracker: Signal<FeedbackTracker>,
    mut expanded: Signal<Option<String>>,
) -> Element {
    let api = use_context::<ApiClient>();
    let mut queries = use_context::<QueryClient>();

    let feedback = tracker.read().view(&violation);
    let key = row_key(&violation);
    let is_open = expanded.read().as_deref() == Some(key.as_str());
    let when = violation
        .created_at()
        .map(|ts| format_relative_time(ts, now))
        .unwrap_or_default();
    let action = violation
        .action_taken
        .clone()
        .unwrap_or_else(|| "none".to_string());

    let submit = {
        let violation = violation.clone();
        move |is_false_positive: bool| {
            if !tracker.write().begin(&violation) {
                return;
            }
            let api = api.clone();
            let server_id = server_id.clone();
            let violation_id = violation.id;
            spawn(async move {
                let result = api
                    .report_violation_feedback(&server_id, violation_id, is_false_positive)
                    .await;
                if let Err(err) = &result {
                    tracing::error!("Failed to record feedback for violation {}: {}", violation_id, err);
                }
                let recorded = result.is_ok();
                tracker.write().finish(violation_id, is_false_positive, result);
                if recorded {
                    queries.invalidate_all([
                        QueryKey::Dashboard(server_id.clone()),
                        QueryKey::Violations(server_id),
                    ]);
                }
            });
        }
    };
    let mut mark_false = submit.clone();
    let mut mark_correct = submit;

    let toggle = move |_| {
        let next = if is_open { None } else { Some(key.clone()) };
        expanded.set(next);
    };

    rsx! {
        tr {
            class: "hover cursor-pointer",
            onclick: toggle,
            td {
                span {
                    class: "badge {violation.violation_type.badge_class()} gap-1",
                    "{violation.violation_type.icon()} {type_label(&violation.violation_type)}"
                }
            }
            td { "{violation.confidence_percent()}%" }
            td { "{action}" }
            td { class: "text-sm opacity-70", "{when}" }
            td {
                onclick: move |evt| evt.stop_propagation(),
                match &feedback {
                    FeedbackView::Recorded(_) => rsx! {
                        span { class: "badge badge-outline", "{feedback.label().unwrap_or_default()}" }
                    },
                    FeedbackView::Submitting => rsx! {
                        span { class: "loading loading-spinner loading-sm" }
                    },
                    FeedbackView::Actionable { error } => rsx! {
                        div {
                            class: "flex items-center gap-1",
                            button {
                                class: "btn btn-xs btn-outline btn-warning",
                                title: "Mark as false positive",
                                onclick: move |_| mark_false(true),
                                "False"
                            }
                            button {
                                class: "btn btn-xs btn-outline btn-success",
                                title: "Confirm as correct",
                                onclick: move |_| mark_correct(false),
                                "Correct"
                            }
                            if let Some(error) = error {
                                span { class: "text-error", title: "{error}", "⚠️" }
                            }
                        }
                    },
                }
            }
        }
        if is_open {
            tr {
                td {
                    colspan: 5,
                    ViolationDetailPanel { detail: ViolationDetail::new(&violation, &feedback) }
                }
            }
        }
    }
}

#[component]
fn ViolationDetailPanel(detail: ViolationDetail) -> Element {
    rsx!(div {
        class: "grid grid-cols-1 md:grid-cols-2 gap-2 p-4 bg-base-100 rounded-box text-sm",
        DetailField { label: "Type", value: format!("{} {}", detail.icon, detail.type_label) }
        DetailField { label: "Confidence", value: format!("{}%", detail.confidence_percent) }
        DetailField { label: "Action taken", value: detail.action.clone() }
        DetailField { label: "User", value: detail.user.clone() }
        DetailField { label: "Channel", value: detail.channel.clone() }
        DetailField { label: "Timestamp", value: detail.timestamp.clone() }
        DetailField { label: "Verdict", value: detail.verdict.to_string() }
        if let Some(content) = detail.content.clone() {
            div {
                class: "md:col-span-2",
                span { class: "opacity-60", "Content" }
                p { class: "font-mono whitespace-pre-wrap break-words", "{content}" }
            }
        }
    })
}

#[component]
fn DetailField(label: &'static str, value: String) -> Element {
    rsx!(div {
        span { class: "opacity-60", "{label}: " }
        span { class: "font-semibold", "{value}" }
    })
}
