pub mod storage;
pub mod theme;
pub mod token;

pub use storage::{default_storage, KeyValueStore, MemoryStorage, SharedStorage};
pub use theme::{Theme, ThemeStore};
pub use token::TokenStore;
