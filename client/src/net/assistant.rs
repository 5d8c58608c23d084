//! Mock research assistant.
//!
//! Every question receives the same canned answer about future prospects
//! under Section 166 of the Motor Vehicles Act, with one citation, after
//! `RESPONSE_DELAY_MS`. `AssistantReply` is the shape a real backend would
//! return.

#[cfg(test)]
#[path = "assistant_test.rs"]
mod assistant_test;

use crate::state::chat::Citation;

/// Simulated research latency.
pub const RESPONSE_DELAY_MS: u32 = 2500;

const MOCK_ANSWER: &str = "Yes, under Section 166 of the Motor Vehicles Act, 1988, the claimants are entitled to an addition for future prospects even when the deceased was self-employed and aged 54–55 years at the time of the accident. In Dani Devi v. Pritam Singh, the Court held that 10% of the deceased's annual income should be added as future prospects.";

const MOCK_CITATION_TEXT: &str = "as the age of the deceased at the time of accident was held to be about 54–55 years by the learned Tribunal, being self-employed, as such, 10% of annual income should have been awarded on account of future prospects.";
const MOCK_CITATION_SOURCE: &str = "Dani_Devi_v_Pritam_Singh.pdf";
const MOCK_CITATION_PARAGRAPH: u32 = 7;
const MOCK_CITATION_LINK: &str = "https://lexisingapore-my.sharepoint.com/:b:/g/personal/harshit_lexi_sg/EdOegeiR_gdBvQxdyW4xE6oBCDgj5E4Bo5wjvhPHpqgIuQ?e=TEu4vz";

/// Answer text plus the citations supporting it.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AssistantReply {
    pub answer: String,
    #[serde(default)]
    pub citations: Vec<Citation>,
}

/// Build the canned reply. The question is ignored.
pub fn mock_reply(_question: &str) -> AssistantReply {
    AssistantReply {
        answer: MOCK_ANSWER.to_owned(),
        citations: vec![Citation {
            text: MOCK_CITATION_TEXT.to_owned(),
            source: MOCK_CITATION_SOURCE.to_owned(),
            paragraph: MOCK_CITATION_PARAGRAPH,
            link: MOCK_CITATION_LINK.to_owned(),
        }],
    }
}

/// Wait out the simulated latency, then answer `question`.
#[cfg(feature = "hydrate")]
pub async fn ask(question: String) -> AssistantReply {
    gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(RESPONSE_DELAY_MS))).await;
    mock_reply(&question)
}
