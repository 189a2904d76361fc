use std::fmt;

use crate::client::store::storage::SharedStorage;

pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone)]
pub struct ThemeStore {
    storage: SharedStorage,
}

impl ThemeStore {
    pub fn new(storage: SharedStorage) -> Self {
        Self { storage }
    }

    /// Unknown or missing values read as light.
    pub fn load(&self) -> Theme {
        self.storage
            .get(THEME_KEY)
            .and_then(|value| Theme::parse(&value))
            .unwrap_or_default()
    }

    pub fn save(&self, theme: Theme) {
        self.storage.set(THEME_KEY, theme.as_str());
    }
}

/// Sets `data-theme` on the document root so daisyUI picks up the palette.
#[cfg(feature = "web")]
pub fn apply_theme(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());

    if let Some(root) = root {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

#[cfg(not(feature = "web"))]
pub fn apply_theme(_theme: Theme) {}
