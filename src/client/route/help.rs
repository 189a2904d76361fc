use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        api::ApiClient,
        component::{Flash, Markdown, Page},
        constant::{SITE_NAME, SUPPORT_EMAIL},
        content::faq::{filter_faqs, FaqCategory},
        hook::dismiss_later,
        model::settings::FlashMessage,
        router::Route,
    },
    model::api::ContactMessageDto,
};

#[component]
pub fn HelpCenter() -> Element {
    let mut category = use_signal(|| FaqCategory::All);
    let mut query = use_signal(String::new);
    let mut open = use_signal(|| None::<u32>);

    let faqs = filter_faqs(category(), &query());

    rsx! {
        Title { "Help Center | {SITE_NAME}" }
        Page {
            class: "max-w-4xl mx-auto flex flex-col gap-6",
            div {
                class: "text-center",
                h1 { class: "text-4xl font-bold", "Help Center" }
                p { class: "opacity-70", "Answers to common questions about {SITE_NAME}" }
            }
            input {
                r#type: "search",
                class: "input input-bordered w-full",
                placeholder: "Search questions, answers and tags...",
                value: "{query}",
                oninput: move |evt| query.set(evt.value()),
            }
            div {
                class: "flex flex-wrap gap-2",
                for c in FaqCategory::ALL {
                    button {
                        key: "{c.name()}",
                        class: "btn btn-sm",
                        class: if category() == c { "btn-primary" } else { "btn-ghost" },
                        onclick: move |_| category.set(c),
                        "{c.icon()} {c.name()}"
                    }
                }
            }
            if faqs.is_empty() {
                div {
                    class: "py-12 text-center opacity-60",
                    p { class: "text-4xl", "🔍" }
                    p { "No questions match your search." }
                }
            } else {
                div {
                    class: "flex flex-col gap-2",
                    for faq in faqs {
                        div {
                            key: "{faq.id}",
                            class: "collapse collapse-arrow bg-base-200",
                            class: if open() == Some(faq.id) { "collapse-open" },
                            div {
                                class: "collapse-title font-semibold cursor-pointer",
                                onclick: move |_| {
                                    let next = if open() == Some(faq.id) { None } else { Some(faq.id) };
                                    open.set(next);
                                },
                                "{faq.question}"
                            }
                            div {
                                class: "collapse-content",
                                Markdown { source: faq.answer }
                                div {
                                    class: "flex flex-wrap gap-1 mt-2",
                                    for tag in faq.tags.iter() {
                                        span { key: "{tag}", class: "badge badge-ghost badge-sm", "{tag}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            div {
                class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                Link {
                    to: Route::Documentation {},
                    class: "card bg-base-200 hover:bg-base-300",
                    div {
                        class: "card-body",
                        h2 { class: "card-title", "📚 Documentation" }
                        p { class: "opacity-70", "Guides for setup, configuration and troubleshooting" }
                    }
                }
                Link {
                    to: Route::ApiDocs {},
                    class: "card bg-base-200 hover:bg-base-300",
                    div {
                        class: "card-body",
                        h2 { class: "card-title", "🔌 API Reference" }
                        p { class: "opacity-70", "Integrate with the REST API" }
                    }
                }
            }
            ContactForm {}
        }
    }
}

#[component]
fn ContactForm() -> Element {
    let api = use_context::<ApiClient>();
    let mut form = use_signal(ContactMessageDto::default);
    let mut flash = use_signal(|| None::<FlashMessage>);
    let mut sending = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let message = form();
        if message.email.trim().is_empty() || message.message.trim().is_empty() {
            flash.set(Some(FlashMessage::error("Email and message are required")));
            return;
        }
        let api = api.clone();
        sending.set(true);
        spawn(async move {
            let result = match api.send_contact_message(&message).await {
                Ok(ack) => {
                    form.set(ContactMessageDto::default());
                    FlashMessage::success(
                        ack.message
                            .unwrap_or_else(|| "Thanks! We'll get back to you soon.".to_string()),
                    )
                }
                Err(err) => {
                    tracing::error!("Failed to send contact message: {}", err);
                    FlashMessage::error(format!(
                        "Could not send your message. Email us at {} instead.",
                        SUPPORT_EMAIL
                    ))
                }
            };
            let after_ms = result.dismiss_after_ms();
            flash.set(Some(result));
            dismiss_later(flash, after_ms);
            sending.set(false);
        });
    };

    let current = form();

    rsx!(form {
        class: "card bg-base-200",
        onsubmit: submit,
        div {
            class: "card-body gap-2",
            h2 { class: "card-title", "Still need help?" }
            p { class: "opacity-70 text-sm", "Send us a message and we'll reply by email." }
            if let Some(message) = flash() {
                Flash { message }
            }
            div {
                class: "grid grid-cols-1 md:grid-cols-2 gap-2",
                input {
                    class: "input input-bordered w-full",
                    placeholder: "Name",
                    value: "{current.name}",
                    oninput: move |evt| form.with_mut(|f| f.name = evt.value()),
                }
                input {
                    r#type: "email",
                    class: "input input-bordered w-full",
                    placeholder: "Email",
                    value: "{current.email}",
                    oninput: move |evt| form.with_mut(|f| f.email = evt.value()),
                }
            }
            input {
                class: "input input-bordered w-full",
                placeholder: "Subject",
                value: "{current.subject}",
                oninput: move |evt| form.with_mut(|f| f.subject = evt.value()),
            }
            textarea {
                class: "textarea textarea-bordered w-full",
                rows: 4,
                placeholder: "How can we help?",
                value: "{current.message}",
                oninput: move |evt| form.with_mut(|f| f.message = evt.value()),
            }
            div {
                class: "card-actions justify-end",
                button {
                    r#type: "submit",
                    class: "btn btn-primary",
                    disabled: sending(),
                    "Send Message"
                }
            }
        }
    })
}
