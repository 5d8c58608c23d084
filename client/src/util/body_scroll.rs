//! Page scroll locking for modal overlays.
//!
//! Adds or removes the `overflow-hidden` class on `<body>`. Requires a
//! browser environment; SSR paths no-op.

#[cfg(test)]
#[path = "body_scroll_test.rs"]
mod body_scroll_test;

pub const LOCK_CLASS: &str = "overflow-hidden";

/// Class list `<body>` should carry for the given overlay state.
pub fn body_classes(overlay_open: bool) -> &'static [&'static str] {
    if overlay_open { &[LOCK_CLASS] } else { &[] }
}

/// Lock page scrolling while an overlay is open, unlock otherwise.
///
/// Returns whether scrolling is now locked.
pub fn sync(overlay_open: bool) -> bool {
    set_locked(!body_classes(overlay_open).is_empty())
}

/// Re-enable page scrolling. Safe to call when not locked.
pub fn unlock() {
    sync(false);
}

fn set_locked(locked: bool) -> bool {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let class_list = body.class_list();
            if locked {
                let _ = class_list.add_1(LOCK_CLASS);
            } else {
                let _ = class_list.remove_1(LOCK_CLASS);
            }
        }
    }
    locked
}
