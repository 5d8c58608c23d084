//! Keyboard bindings for the chat input and the citation viewer.

#[cfg(test)]
#[path = "keys_test.rs"]
mod keys_test;

/// Enter submits the question; Shift+Enter falls through to a newline.
pub fn is_submit_key(key: &str, shift: bool) -> bool {
    key == "Enter" && !shift
}

/// Escape closes the viewer, but only while a citation is shown.
pub fn is_close_key(key: &str, viewer_open: bool) -> bool {
    viewer_open && key == "Escape"
}
