//! Thin wrappers over `window.location`. Inert outside the browser.

#[cfg(feature = "web")]
pub fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(not(feature = "web"))]
pub fn page_origin() -> Option<String> {
    None
}

/// Full-page navigation to an external URL.
#[cfg(feature = "web")]
pub fn redirect_to(url: &str) -> bool {
    web_sys::window()
        .map(|window| window.location().set_href(url).is_ok())
        .unwrap_or(false)
}

#[cfg(not(feature = "web"))]
pub fn redirect_to(_url: &str) -> bool {
    false
}
