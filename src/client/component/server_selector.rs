use dioxus::prelude::*;

use crate::{client::model::selection::SelectedServer, model::server::ServerSummaryDto};

#[component]
pub fn ServerSelector(servers: Vec<ServerSummaryDto>) -> Element {
    let mut selected = use_context::<SelectedServer>();
    let current = selected.get().unwrap_or_default();

    rsx!(select {
        class: "select select-bordered w-full max-w-xs",
        value: "{current}",
        onchange: move |evt| selected.select(evt.value()),
        for server in servers {
            option {
                key: "{server.id}",
                value: "{server.id}",
                selected: server.id == current,
                "{server.name}"
            }
        }
    })
}
