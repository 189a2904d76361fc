use dioxus::prelude::*;

use crate::client::model::settings::FlashMessage;

#[component]
pub fn Flash(message: FlashMessage) -> Element {
    rsx!(div {
        role: "status",
        class: "alert {message.alert_class()}",
        span { "{message.text}" }
    })
}
