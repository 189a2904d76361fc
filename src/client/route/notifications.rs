use chrono::Utc;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        api::ApiClient,
        component::{page::LoadingPage, ErrorMessage, Page},
        constant::SITE_NAME,
        model::{
            error::ApiError,
            format::format_relative_time,
            notification::{NotificationFilter, NotificationStore},
            query::{QueryClient, QueryKey},
        },
    },
    model::notification::NotificationDto,
};

/// Notification center. Reads the `NotificationStore` the navbar bell keeps
/// fresh, so both show the same unread count.
#[component]
pub fn Notifications() -> Element {
    let api = use_context::<ApiClient>();
    let mut queries = use_context::<QueryClient>();
    let mut store = use_context::<NotificationStore>();
    let mut filter = use_signal(NotificationFilter::default);
    let mut mark_error = use_signal(|| None::<ApiError>);

    let mark_all_read = move |_| {
        if !store.begin_mark_all_read() {
            return;
        }
        mark_error.set(None);
        let api = api.clone();
        spawn(async move {
            let result = api.mark_all_notifications_read().await;
            store.settle_mark_all_read(result.is_ok());
            match result {
                Ok(()) => queries.invalidate(QueryKey::Notifications),
                Err(err) => {
                    tracing::error!("Failed to mark notifications as read: {}", err);
                    mark_error.set(Some(err));
                }
            }
        });
    };

    let Some(current) = store.feed() else {
        return match store.error() {
            Some(err) => rsx! {
                Title { "Notifications | {SITE_NAME}" }
                Page {
                    class: "max-w-3xl mx-auto",
                    ErrorMessage {
                        error: err,
                        title: "Failed to load notifications".to_string(),
                        on_retry: move |_| queries.invalidate(QueryKey::Notifications),
                    }
                }
            },
            None => rsx!(LoadingPage {}),
        };
    };

    let visible = current.filtered(filter());
    let unread = current.unread_count();
    let now = Utc::now();

    rsx! {
        Title { "Notifications | {SITE_NAME}" }
        Page {
            class: "max-w-3xl mx-auto flex flex-col gap-4",
            div {
                class: "flex flex-wrap items-center justify-between gap-4",
                div {
                    h1 { class: "text-3xl font-bold", "Notifications" }
                    p {
                        class: "opacity-70",
                        if unread > 0 { "{unread} unread" } else { "You're all caught up" }
                    }
                }
                button {
                    class: "btn btn-outline btn-sm",
                    disabled: unread == 0 || current.is_pending(),
                    onclick: mark_all_read,
                    if current.is_pending() {
                        span { class: "loading loading-spinner loading-xs" }
                    }
                    "Mark all as read"
                }
            }
            if let Some(err) = mark_error() {
                ErrorMessage { error: err, title: "Could not mark notifications as read".to_string() }
            }
            div {
                role: "tablist",
                class: "tabs tabs-box",
                for f in NotificationFilter::ALL {
                    button {
                        key: "{f.label()}",
                        role: "tab",
                        class: "tab",
                        class: if filter() == f { "tab-active" },
                        onclick: move |_| filter.set(f),
                        "{f.label()}"
                    }
                }
            }
            if visible.is_empty() {
                div {
                    class: "py-16 text-center opacity-60",
                    p { class: "text-4xl", "🔔" }
                    p { "No notifications here" }
                }
            } else {
                ul {
                    class: "flex flex-col gap-2",
                    for notification in visible {
                        NotificationItem {
                            key: "{notification.id}",
                            notification: notification.clone(),
                            when: notification
                                .timestamp()
                                .map(|ts| format_relative_time(ts, now))
                                .unwrap_or_default(),
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NotificationItem(notification: NotificationDto, when: String) -> Element {
    let title = notification
        .title
        .clone()
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| notification.message.clone());
    let show_message = notification.title.as_deref().is_some_and(|t| !t.is_empty());

    rsx!(li {
        class: "card card-compact bg-base-200",
        class: if !notification.read { "border-l-4 border-primary" },
        div {
            class: "card-body flex-row items-start gap-3",
            span { class: "text-2xl", "{notification.icon()}" }
            div {
                class: "flex-1",
                div {
                    class: "flex flex-wrap items-center gap-2",
                    h3 { class: "font-semibold", "{title}" }
                    if let Some(severity) = notification.severity {
                        span { class: "text-xs font-bold {severity.text_class()}", "{severity.label()}" }
                    }
                    if !notification.read {
                        span { class: "badge badge-primary badge-xs" }
                    }
                }
                if show_message {
                    p { class: "text-sm opacity-80", "{notification.message}" }
                }
                div {
                    class: "flex gap-3 text-xs opacity-60 mt-1",
                    span { "{when}" }
                    if let Some(server) = notification.server.clone() {
                        span { "{server}" }
                    }
                }
            }
        }
    })
}
