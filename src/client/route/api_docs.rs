use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        api::ApiClient,
        component::{ErrorMessage, Page},
        constant::SITE_NAME,
        content::api_docs::{find_group, generate_curl, GROUPS, PLACEHOLDER_API_KEY},
        model::{error::ApiError, format::format_percentage, violation::type_label},
    },
    model::{api::AnalyzeResponseDto, violation::ViolationType},
};

#[component]
pub fn ApiDocs() -> Element {
    let api = use_context::<ApiClient>();
    let mut active = use_signal(|| GROUPS[0].id);
    let mut api_key = use_signal(String::new);
    let group = find_group(active());
    let base_url = api.base_url().to_string();

    rsx! {
        Title { "API Reference | {SITE_NAME}" }
        Page {
            class: "max-w-6xl mx-auto flex flex-col gap-6",
            div {
                h1 { class: "text-4xl font-bold", "API Reference" }
                p {
                    class: "opacity-70",
                    "Every request is authenticated with a bearer token. Base URL: "
                    code { "{base_url}" }
                }
            }
            fieldset {
                class: "fieldset max-w-md",
                legend { class: "fieldset-legend", "API key for examples" }
                input {
                    r#type: "text",
                    class: "input input-bordered w-full font-mono",
                    placeholder: PLACEHOLDER_API_KEY,
                    value: "{api_key}",
                    oninput: move |evt| api_key.set(evt.value()),
                }
            }
            div {
                role: "tablist",
                class: "tabs tabs-box",
                for g in GROUPS {
                    button {
                        key: "{g.id}",
                        role: "tab",
                        class: "tab",
                        class: if g.id == group.id { "tab-active" },
                        onclick: move |_| active.set(g.id),
                        "{g.title}"
                    }
                }
            }
            p { class: "opacity-70", "{group.description}" }
            div {
                class: "flex flex-col gap-4",
                for endpoint in group.endpoints {
                    div {
                        key: "{endpoint.method}{endpoint.path}",
                        class: "card bg-base-200",
                        div {
                            class: "card-body gap-3",
                            div {
                                class: "flex items-center gap-3",
                                span { class: "badge badge-primary font-mono", "{endpoint.method}" }
                                code { class: "font-mono", "{endpoint.path}" }
                            }
                            p { "{endpoint.description}" }
                            if let Some(body) = endpoint.body {
                                div {
                                    p { class: "text-sm font-semibold", "Request body" }
                                    pre { class: "bg-base-300 rounded-box p-3 text-sm overflow-x-auto", "{body}" }
                                }
                            }
                            div {
                                p { class: "text-sm font-semibold", "Response" }
                                pre { class: "bg-base-300 rounded-box p-3 text-sm overflow-x-auto", "{endpoint.response}" }
                            }
                            div {
                                p { class: "text-sm font-semibold", "Example" }
                                pre {
                                    class: "bg-neutral text-neutral-content rounded-box p-3 text-sm overflow-x-auto",
                                    "{generate_curl(&base_url, endpoint, &api_key())}"
                                }
                            }
                        }
                    }
                }
            }
            AnalyzePlayground {}
        }
    }
}

/// Sends sample text to `/api/v1/analyze` and shows the verdict.
#[component]
fn AnalyzePlayground() -> Element {
    let api = use_context::<ApiClient>();
    let mut content = use_signal(String::new);
    let mut result = use_signal(|| None::<Result<AnalyzeResponseDto, ApiError>>);
    let mut running = use_signal(|| false);

    let analyze = move |_| {
        let text = content();
        if text.trim().is_empty() {
            return;
        }
        let api = api.clone();
        running.set(true);
        spawn(async move {
            let response = api.analyze_content(&text, "text").await;
            if let Err(err) = &response {
                tracing::error!("Content analysis failed: {}", err);
            }
            result.set(Some(response));
            running.set(false);
        });
    };

    rsx!(div {
        class: "card bg-base-200",
        div {
            class: "card-body gap-3",
            h2 { class: "card-title", "Try the analyzer" }
            p { class: "opacity-70 text-sm", "Paste a message to see how it would be classified." }
            textarea {
                class: "textarea textarea-bordered w-full",
                rows: 3,
                placeholder: "Type a message...",
                value: "{content}",
                oninput: move |evt| content.set(evt.value()),
            }
            div {
                class: "card-actions justify-end",
                button {
                    class: "btn btn-primary",
                    disabled: running() || content().trim().is_empty(),
                    onclick: analyze,
                    if running() {
                        span { class: "loading loading-spinner loading-sm" }
                    }
                    "Analyze"
                }
            }
            match result() {
                Some(Ok(verdict)) => rsx! {
                    div {
                        class: "flex flex-col gap-2",
                        div {
                            class: "flex items-center gap-2",
                            if verdict.flagged {
                                span { class: "badge badge-error", "Flagged" }
                            } else {
                                span { class: "badge badge-success", "Clean" }
                            }
                            span { "Confidence {format_percentage(verdict.confidence, 0)}" }
                            if let Some(label) = verdict_label(verdict.violation_type.as_deref()) {
                                span { class: "badge badge-outline", "{label}" }
                            }
                        }
                        ul {
                            class: "text-sm",
                            for (category, score) in verdict.categories.iter() {
                                li {
                                    key: "{category}",
                                    class: "flex justify-between max-w-xs",
                                    span { "{type_label(&ViolationType::from(category.clone()))}" }
                                    span { class: "font-mono", "{format_percentage(*score, 0)}" }
                                }
                            }
                        }
                    }
                },
                Some(Err(err)) => rsx!(ErrorMessage { error: err, title: "Analysis failed".to_string() }),
                None => rsx!(),
            }
        }
    })
}

fn verdict_label(kind: Option<&str>) -> Option<String> {
    kind.map(|kind| type_label(&ViolationType::from(kind.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_label_humanizes_type() {
        assert_eq!(verdict_label(Some("hate_speech")).as_deref(), Some("Hate Speech"));
        assert_eq!(verdict_label(Some("brand_new")).as_deref(), Some("Brand New"));
        assert_eq!(verdict_label(None), None);
    }
}
