//! Query keys and invalidation versions.
//!
//! Every fetched resource reads the version of its key; invalidating a key
//! bumps that version so each dependent `use_resource` re-runs.

use std::collections::HashMap;

use dioxus::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Servers,
    CurrentUser,
    Notifications,
    ServerStats(String),
    Dashboard(String),
    Analytics(String),
    Violations(String),
    Insights(String),
    ServerSettings(String),
    BotConfig(String),
}

impl QueryKey {
    /// Keys refreshed after a successful settings or configuration save.
    pub fn after_settings_save(server_id: &str, name_changed: bool) -> Vec<QueryKey> {
        let mut keys = vec![
            QueryKey::ServerStats(server_id.to_string()),
            QueryKey::Dashboard(server_id.to_string()),
            QueryKey::ServerSettings(server_id.to_string()),
            QueryKey::BotConfig(server_id.to_string()),
        ];
        if name_changed {
            keys.push(QueryKey::Servers);
        }
        keys
    }
}

/// Shared invalidation state, provided once at the app root.
///
/// Each key owns its own version signal, so invalidating one key only wakes
/// the readers of that key. The map itself is not reactive.
#[derive(Clone, Copy, PartialEq)]
pub struct QueryClient {
    slots: CopyValue<HashMap<QueryKey, Signal<u64>>>,
}

impl QueryClient {
    pub fn new() -> Self {
        Self {
            slots: CopyValue::new(HashMap::new()),
        }
    }

    fn slot(&self, key: &QueryKey) -> Signal<u64> {
        if let Some(slot) = self.slots.peek().get(key) {
            return *slot;
        }

        // Versions outlive the component that first asked for them
        let slot = Signal::new_in_scope(0, ScopeId::ROOT);
        let mut slots = self.slots;
        slots.write().insert(key.clone(), slot);
        slot
    }

    /// Reading subscribes the caller to future invalidations of `key` only.
    pub fn version(&self, key: &QueryKey) -> u64 {
        *self.slot(key).read()
    }

    pub fn invalidate(&mut self, key: QueryKey) {
        let mut slot = self.slot(&key);
        *slot.write() += 1;
    }

    pub fn invalidate_all(&mut self, keys: impl IntoIterator<Item = QueryKey>) {
        for key in keys {
            self.invalidate(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use dioxus::dioxus_core::NoOpMutations;

    use super::*;

    thread_local! {
        static CLIENT: Cell<Option<QueryClient>> = const { Cell::new(None) };
        static SETTINGS_RENDERS: Cell<usize> = const { Cell::new(0) };
    }

    #[component]
    fn SettingsReader() -> Element {
        let queries = use_context::<QueryClient>();
        let _ = queries.version(&QueryKey::ServerSettings("1".to_string()));
        SETTINGS_RENDERS.with(|renders| renders.set(renders.get() + 1));
        rsx! {}
    }

    fn app() -> Element {
        let queries = use_context_provider(QueryClient::new);
        use_hook(|| CLIENT.with(|client| client.set(Some(queries))));
        rsx! { SettingsReader {} }
    }

    fn mount() -> (VirtualDom, QueryClient) {
        SETTINGS_RENDERS.with(|renders| renders.set(0));
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let queries = CLIENT.with(Cell::get).unwrap();
        (dom, queries)
    }

    fn renders() -> usize {
        SETTINGS_RENDERS.with(Cell::get)
    }

    /// Tests invalidating a key the component does not read.
    ///
    /// Expected: The settings reader is not rendered again
    #[test]
    fn unrelated_invalidation_does_not_rerun_reader() {
        let (mut dom, mut queries) = mount();
        assert_eq!(renders(), 1);

        dom.in_runtime(|| queries.invalidate(QueryKey::Notifications));
        dom.render_immediate(&mut NoOpMutations);
        dom.in_runtime(|| queries.invalidate(QueryKey::ServerSettings("2".to_string())));
        dom.render_immediate(&mut NoOpMutations);

        assert_eq!(renders(), 1);
    }

    /// Tests invalidating the key the component reads.
    ///
    /// Expected: Version goes up by one per invalidation and the reader
    /// renders again
    #[test]
    fn invalidation_reruns_only_the_given_key() {
        let (mut dom, mut queries) = mount();
        let settings = QueryKey::ServerSettings("1".to_string());

        dom.in_runtime(|| {
            queries.invalidate_all([settings.clone(), QueryKey::Servers]);
            queries.invalidate(settings.clone());
        });
        dom.render_immediate(&mut NoOpMutations);

        assert_eq!(renders(), 2);
        dom.in_runtime(|| {
            assert_eq!(queries.version(&settings), 2);
            assert_eq!(queries.version(&QueryKey::Servers), 1);
            assert_eq!(queries.version(&QueryKey::ServerSettings("2".to_string())), 0);
        });
    }

    #[test]
    fn server_list_refreshes_only_on_rename() {
        assert!(!QueryKey::after_settings_save("1", false).contains(&QueryKey::Servers));
        assert!(QueryKey::after_settings_save("1", true).contains(&QueryKey::Servers));
    }
}
