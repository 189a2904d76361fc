use dioxus::prelude::*;

use crate::client::{
    component::{Markdown, Page},
    constant::SITE_NAME,
    content::docs::{find_section, SECTIONS},
};

#[component]
pub fn Documentation() -> Element {
    let mut active = use_signal(|| SECTIONS[0].slug);
    let section = find_section(active());

    rsx! {
        Title { "Documentation | {SITE_NAME}" }
        Page {
            class: "max-w-6xl mx-auto flex flex-col md:flex-row gap-6",
            aside {
                class: "md:w-64 shrink-0",
                ul {
                    class: "menu bg-base-200 rounded-box w-full",
                    for s in SECTIONS {
                        li {
                            key: "{s.slug}",
                            a {
                                class: if s.slug == section.slug { "menu-active" },
                                onclick: move |_| active.set(s.slug),
                                "{s.title}"
                            }
                        }
                    }
                }
            }
            article {
                class: "flex-1 card bg-base-200",
                div {
                    class: "card-body",
                    Markdown { source: section.body }
                }
            }
        }
    }
}
