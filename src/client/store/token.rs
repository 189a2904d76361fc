use crate::client::store::storage::SharedStorage;

/// Storage key of the backend bearer token.
pub const TOKEN_KEY: &str = "safespace_token";

/// Typed access to the persisted bearer token.
#[derive(Clone)]
pub struct TokenStore {
    storage: SharedStorage,
}

impl TokenStore {
    pub fn new(storage: SharedStorage) -> Self {
        Self { storage }
    }

    /// Blank values are treated as absent.
    pub fn get(&self) -> Option<String> {
        self.storage
            .get(TOKEN_KEY)
            .filter(|token| !token.trim().is_empty())
    }

    pub fn set(&self, token: &str) {
        self.storage.set(TOKEN_KEY, token);
    }

    pub fn clear(&self) {
        self.storage.remove(TOKEN_KEY);
    }

    pub fn is_present(&self) -> bool {
        self.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::client::store::storage::{KeyValueStore, MemoryStorage};

    #[test]
    fn stores_under_fixed_key() {
        let memory = MemoryStorage::new();
        let tokens = TokenStore::new(Rc::new(memory.clone()));

        tokens.set("abc");
        assert_eq!(memory.get("safespace_token").as_deref(), Some("abc"));
        assert!(tokens.is_present());

        tokens.clear();
        assert!(tokens.get().is_none());
    }

    #[test]
    fn blank_token_is_absent() {
        let memory = MemoryStorage::new();
        memory.set(TOKEN_KEY, "  ");
        let tokens = TokenStore::new(Rc::new(memory));

        assert!(tokens.get().is_none());
    }
}
