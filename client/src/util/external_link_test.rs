use super::*;

#[test]
fn blank_url_is_ignored() {
    assert!(!open_in_new_tab(""));
    assert!(!open_in_new_tab("   "));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn no_browser_window_outside_hydrate() {
    assert!(!open_in_new_tab("https://example.com/doc.pdf"));
}
