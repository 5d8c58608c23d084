//! Opening citation sources outside the app.

#[cfg(test)]
#[path = "external_link_test.rs"]
mod external_link_test;

/// Open `url` in a new browsing context.
///
/// Returns `false` without doing anything when `url` is blank or there is no
/// browser window. The target is passed through unvalidated.
pub fn open_in_new_tab(url: &str) -> bool {
    if url.trim().is_empty() {
        return false;
    }
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        window.open_with_url_and_target(url, "_blank").is_ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}
