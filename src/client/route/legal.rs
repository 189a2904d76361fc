use dioxus::prelude::*;

use crate::client::{
    component::{Markdown, Page},
    constant::SITE_NAME,
    content::{
        legal::{contact_line, LegalSection, LAST_UPDATED, PRIVACY, TERMS},
        render_markdown,
    },
};

#[component]
pub fn Terms() -> Element {
    rsx! {
        Title { "Terms of Service | {SITE_NAME}" }
        LegalPage { title: "Terms of Service", sections: TERMS }
    }
}

#[component]
pub fn Privacy() -> Element {
    rsx! {
        Title { "Privacy Policy | {SITE_NAME}" }
        LegalPage { title: "Privacy Policy", sections: PRIVACY }
    }
}

#[component]
fn LegalPage(title: &'static str, sections: &'static [LegalSection]) -> Element {
    rsx!(Page {
        class: "max-w-4xl mx-auto flex flex-col gap-6",
        div {
            class: "text-center",
            h1 { class: "text-4xl font-bold", "{title}" }
            p { class: "opacity-60 text-sm", "Last updated: {LAST_UPDATED}" }
        }
        for section in sections {
            div {
                key: "{section.title}",
                class: "card bg-base-200",
                div {
                    class: "card-body",
                    h2 { class: "card-title", "{section.icon} {section.title}" }
                    Markdown { source: section.body }
                }
            }
        }
        div {
            class: "prose max-w-none text-center",
            dangerous_inner_html: render_markdown(&contact_line()),
        }
    })
}
