//! Auto-growing textarea sizing.

#[cfg(test)]
#[path = "textarea_test.rs"]
mod textarea_test;

pub const MIN_HEIGHT_PX: i32 = 48;
pub const MAX_HEIGHT_PX: i32 = 120;

/// Height for a textarea whose content measures `scroll_height` pixels.
///
/// Grows with content up to `MAX_HEIGHT_PX`; past that the textarea scrolls.
pub fn clamped_height(scroll_height: i32) -> i32 {
    scroll_height.clamp(MIN_HEIGHT_PX, MAX_HEIGHT_PX)
}

/// Resize `el` to fit its content.
#[cfg(feature = "hydrate")]
pub fn fit_to_content(el: &web_sys::HtmlTextAreaElement) {
    let style = el.style();
    // Collapse first so scrollHeight reflects the content, not the old height.
    let _ = style.set_property("height", "auto");
    let height = clamped_height(el.scroll_height());
    let _ = style.set_property("height", &format!("{height}px"));
}
