use dioxus::prelude::*;

use crate::client::content::render_markdown;

/// Renders trusted, compiled-in Markdown.
#[component]
pub fn Markdown(source: &'static str, #[props(default)] class: Option<&'static str>) -> Element {
    let html = render_markdown(source);
    let class = class.unwrap_or("prose max-w-none");

    rsx!(div {
        class: "{class}",
        dangerous_inner_html: html
    })
}
