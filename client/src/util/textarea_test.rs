use super::*;

#[test]
fn clamped_height_grows_with_content() {
    assert_eq!(clamped_height(72), 72);
}

#[test]
fn clamped_height_caps_at_maximum() {
    assert_eq!(clamped_height(400), MAX_HEIGHT_PX);
}

#[test]
fn clamped_height_respects_minimum() {
    assert_eq!(clamped_height(0), MIN_HEIGHT_PX);
    assert_eq!(clamped_height(-5), MIN_HEIGHT_PX);
}
