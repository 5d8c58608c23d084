//! Static stand-in for a cited judgment.
//!
//! The viewer has no PDF renderer. It shows these ten fixed paragraphs and
//! highlights the one the citation points at, embedding the quoted text.

#[cfg(test)]
#[path = "mock_document_test.rs"]
mod mock_document_test;

use crate::state::chat::Citation;

pub const COURT_NAME: &str = "Motor Vehicle Accident Claims Tribunal";

pub const HIGHLIGHT_LEAD: &str =
    "Upon careful consideration of the evidence and legal precedents, this tribunal finds that";
pub const HIGHLIGHT_TRAIL: &str = "This approach aligns with established jurisprudence in similar cases.";

/// Number of paragraphs in the mock document.
pub const PARAGRAPH_COUNT: u32 = 10;

const PARAGRAPHS: [&str; PARAGRAPH_COUNT as usize] = [
    "This case involves a motor vehicle accident claim where the deceased was self-employed at the time of the incident. The tribunal must determine the appropriate compensation under Section 166 of the Motor Vehicles Act, 1988.",
    "The deceased was earning a substantial income from his self-employed business activities. The claimants have provided evidence of his annual earnings and business prospects.",
    "The learned counsel for the claimants argued that future prospects should be considered even in cases where the deceased was self-employed, contrary to the respondent's contention.",
    "The court examined various precedents and legal principles applicable to compensation calculations under the Motor Vehicles Act.",
    "Evidence was presented regarding the deceased's age, occupation, and earning capacity at the time of the accident.",
    "The tribunal considered the applicable legal framework and established jurisprudence in similar cases.",
    "The tribunal now turns to the question of future prospects for a self-employed deceased.",
    "The tribunal therefore directs that the compensation be calculated including the 10% addition for future prospects as outlined in the preceding paragraph.",
    "This judgment sets a precedent for similar cases involving self-employed individuals in motor vehicle accident claims.",
    "The award is hereby modified to include the additional 10% for future prospects, and the parties are directed to comply with this order.",
];

/// Body of one rendered paragraph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParagraphBody {
    Plain(&'static str),
    /// The cited paragraph: lead-in, verbatim quote, trailer.
    Highlighted { lead: &'static str, quote: String, trail: &'static str },
}

/// A numbered paragraph of the mock document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Paragraph {
    pub number: u32,
    pub body: ParagraphBody,
}

impl Paragraph {
    pub fn is_highlighted(&self) -> bool {
        matches!(self.body, ParagraphBody::Highlighted { .. })
    }
}

/// The document as displayed for `citation`.
///
/// Paragraph numbers outside the document highlight nothing.
pub fn paragraphs(citation: &Citation) -> Vec<Paragraph> {
    (1..=PARAGRAPH_COUNT)
        .zip(PARAGRAPHS)
        .map(|(number, text)| {
            let body = if number == citation.paragraph {
                ParagraphBody::Highlighted {
                    lead: HIGHLIGHT_LEAD,
                    quote: citation.text.clone(),
                    trail: HIGHLIGHT_TRAIL,
                }
            } else {
                ParagraphBody::Plain(text)
            };
            Paragraph { number, body }
        })
        .collect()
}
