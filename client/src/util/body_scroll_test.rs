use super::*;

#[test]
fn open_overlay_locks_body() {
    assert_eq!(body_classes(true), &[LOCK_CLASS]);
    assert!(sync(true));
}

#[test]
fn closed_overlay_restores_scrolling() {
    assert!(body_classes(false).is_empty());
    assert!(!sync(false));
}

#[test]
fn open_then_close_ends_unlocked() {
    let states: Vec<bool> = [true, false].into_iter().map(sync).collect();
    assert_eq!(states, vec![true, false]);
}

#[test]
fn lock_class_matches_stylesheet() {
    assert_eq!(LOCK_CLASS, "overflow-hidden");
}
