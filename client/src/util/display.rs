//! Human-readable labels for citation metadata.

#[cfg(test)]
#[path = "display_test.rs"]
mod display_test;

const DOCUMENT_SUFFIX: &str = ".pdf";

/// Turn a source filename into a document title.
///
/// Strips a trailing `.pdf` (any case) and replaces underscores with spaces:
/// `Dani_Devi_v_Pritam_Singh.pdf` becomes `Dani Devi v Pritam Singh`.
pub fn source_title(source: &str) -> String {
    let stem = source
        .len()
        .checked_sub(DOCUMENT_SUFFIX.len())
        .filter(|&cut| source.is_char_boundary(cut) && source[cut..].eq_ignore_ascii_case(DOCUMENT_SUFFIX))
        .map_or(source, |cut| &source[..cut]);
    stem.replace('_', " ")
}

/// Footer/header caption naming the highlighted paragraph.
pub fn paragraph_caption(paragraph: u32) -> String {
    format!("Paragraph {paragraph} highlighted")
}
