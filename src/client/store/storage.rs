//! Persistent key/value storage.
//!
//! In the browser this is `window.localStorage`; every other target (and the
//! test suite) gets an in-memory map that lives as long as the process.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    /// Returns `false` when the backing store rejected the write.
    fn set(&self, key: &str, value: &str) -> bool;

    fn remove(&self, key: &str) -> bool;
}

pub type SharedStorage = Rc<dyn KeyValueStore>;

#[derive(Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        true
    }

    fn remove(&self, key: &str) -> bool {
        self.entries.borrow_mut().remove(key);
        true
    }
}

#[cfg(feature = "web")]
pub use web::LocalStorage;

#[cfg(feature = "web")]
mod web {
    use super::KeyValueStore;

    /// Browser `localStorage`. Every operation degrades to a no-op when the
    /// storage is unavailable (private mode, sandboxed iframe).
    #[derive(Clone, Copy, Default)]
    pub struct LocalStorage;

    impl LocalStorage {
        fn storage() -> Option<web_sys::Storage> {
            web_sys::window()?.local_storage().ok()?
        }
    }

    impl KeyValueStore for LocalStorage {
        fn get(&self, key: &str) -> Option<String> {
            Self::storage()?.get_item(key).ok()?
        }

        fn set(&self, key: &str, value: &str) -> bool {
            Self::storage()
                .and_then(|s| s.set_item(key, value).ok())
                .is_some()
        }

        fn remove(&self, key: &str) -> bool {
            Self::storage()
                .and_then(|s| s.remove_item(key).ok())
                .is_some()
        }
    }
}

pub fn default_storage() -> SharedStorage {
    #[cfg(feature = "web")]
    {
        Rc::new(LocalStorage)
    }

    #[cfg(not(feature = "web"))]
    {
        Rc::new(MemoryStorage::new())
    }
}
