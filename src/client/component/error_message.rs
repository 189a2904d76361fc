use dioxus::prelude::*;

use crate::client::model::error::ApiError;

/// Inline error with an optional manual retry.
#[component]
pub fn ErrorMessage(
    error: ApiError,
    #[props(default)] title: Option<String>,
    on_retry: Option<EventHandler<()>>,
) -> Element {
    let title = title.unwrap_or_else(|| "Something went wrong".to_string());

    rsx!(div {
        role: "alert",
        class: "alert alert-error",
        span { "❌" }
        div {
            h3 { class: "font-bold", "{title}" }
            p { class: "text-sm", "{error.user_message()}" }
        }
        if let Some(on_retry) = on_retry {
            button {
                class: "btn btn-sm",
                onclick: move |_| on_retry.call(()),
                "Try again"
            }
        }
    })
}
