use dioxus::prelude::*;

use crate::client::store::{
    theme::{apply_theme, Theme, ThemeStore},
    SharedStorage,
};

/// Current theme plus its persistence, provided at the app root.
#[derive(Clone)]
pub struct ThemeContext {
    theme: Signal<Theme>,
    store: ThemeStore,
}

impl ThemeContext {
    /// Loads the stored theme and applies it to the document.
    pub fn new(storage: SharedStorage) -> Self {
        let store = ThemeStore::new(storage);
        let theme = store.load();
        apply_theme(theme);

        Self {
            theme: Signal::new(theme),
            store,
        }
    }

    pub fn current(&self) -> Theme {
        *self.theme.read()
    }

    pub fn toggle(&mut self) {
        let next = self.theme.peek().toggled();
        self.store.save(next);
        apply_theme(next);
        self.theme.set(next);
    }
}
