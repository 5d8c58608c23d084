//! Citation viewer selection.

#[cfg(test)]
#[path = "viewer_test.rs"]
mod viewer_test;

use crate::state::chat::Citation;

/// The citation currently shown in the document modal, if any.
///
/// Visibility is derived from the selection, so the viewer can never be open
/// without a citation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewerState {
    selected: Option<Citation>,
}

impl ViewerState {
    pub fn is_visible(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected(&self) -> Option<&Citation> {
        self.selected.as_ref()
    }

    pub fn open(&mut self, citation: Citation) {
        self.selected = Some(citation);
    }

    pub fn close(&mut self) {
        self.selected = None;
    }
}
