use dioxus::prelude::*;

use crate::client::{component::Page, constant::SITE_NAME, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        Title { "Not Found | {SITE_NAME}" }
        Page {
            class: "flex items-center justify-center",
            div {
                class: "flex flex-col items-center gap-4 text-center",
                p { class: "text-7xl font-bold opacity-30", "404" }
                h1 { class: "text-2xl font-bold", "Page not found" }
                p { class: "opacity-70", "There is nothing at /{path}." }
                div {
                    class: "flex gap-2",
                    Link { to: Route::Home {}, class: "btn btn-primary", "Back to Home" }
                    Link { to: Route::HelpCenter {}, class: "btn btn-ghost", "Help Center" }
                }
            }
        }
    }
}
