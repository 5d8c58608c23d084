use super::*;

#[test]
fn mock_reply_ignores_question() {
    assert_eq!(mock_reply("anything"), mock_reply("something else entirely"));
}

#[test]
fn mock_reply_has_single_paragraph_seven_citation() {
    let reply = mock_reply("q");
    assert!(reply.answer.starts_with("Yes, under Section 166 of the Motor Vehicles Act, 1988"));
    assert_eq!(reply.citations.len(), 1);
    let citation = &reply.citations[0];
    assert_eq!(citation.source, "Dani_Devi_v_Pritam_Singh.pdf");
    assert_eq!(citation.paragraph, 7);
    assert!(citation.text.contains("10% of annual income"));
    assert!(citation.link.starts_with("https://"));
}

#[test]
fn response_delay_is_two_and_a_half_seconds() {
    assert_eq!(RESPONSE_DELAY_MS, 2500);
}
