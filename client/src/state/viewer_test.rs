use super::*;

fn citation(paragraph: u32) -> Citation {
    Citation {
        text: "quoted".to_owned(),
        source: "Case_Name.pdf".to_owned(),
        paragraph,
        link: "https://example.com/case.pdf".to_owned(),
    }
}

#[test]
fn viewer_default_is_hidden() {
    let viewer = ViewerState::default();
    assert!(!viewer.is_visible());
    assert!(viewer.selected().is_none());
}

#[test]
fn open_replaces_previous_selection() {
    let mut viewer = ViewerState::default();
    viewer.open(citation(1));
    viewer.open(citation(2));
    assert_eq!(viewer.selected().map(|c| c.paragraph), Some(2));
}

#[test]
fn close_is_idempotent() {
    let mut viewer = ViewerState::default();
    viewer.open(citation(3));
    viewer.close();
    viewer.close();
    assert_eq!(viewer, ViewerState::default());
}
