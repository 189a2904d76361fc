use dioxus::prelude::*;

use crate::model::server::ServerSummaryDto;

/// Server the dashboard and settings pages operate on, shared between them.
#[derive(Clone, Copy, PartialEq)]
pub struct SelectedServer {
    inner: Signal<Option<String>>,
}

impl SelectedServer {
    pub fn new() -> Self {
        Self {
            inner: Signal::new(None),
        }
    }

    pub fn get(&self) -> Option<String> {
        self.inner.read().clone()
    }

    pub fn select(&mut self, server_id: String) {
        self.inner.set(Some(server_id));
    }

    /// Keeps the current choice while it is still in `servers`, otherwise
    /// falls back to the first server.
    pub fn sync(&mut self, servers: &[ServerSummaryDto]) {
        let current = self.inner.peek().clone();
        let resolved = resolve_selection(servers, current.as_deref());
        if resolved != current {
            self.inner.set(resolved);
        }
    }
}

pub fn resolve_selection(servers: &[ServerSummaryDto], current: Option<&str>) -> Option<String> {
    match current {
        Some(id) if servers.iter().any(|s| s.id == id) => Some(id.to_string()),
        _ => servers.first().map(|s| s.id.clone()),
    }
}
