use super::*;
use crate::net::assistant::mock_reply;
use crate::util::mock_document;

const QUESTION: &str = "Is future prospects applicable for self-employed deceased?";

// =============================================================
// ChatState defaults
// =============================================================

#[test]
fn chat_state_default_empty_and_idle() {
    let state = ChatState::default();
    assert!(state.messages().is_empty());
    assert!(!state.is_busy());
    assert!(!state.viewer().is_visible());
}

#[test]
fn with_welcome_seeds_single_assistant_message() {
    let state = ChatState::with_welcome(1.0);
    assert_eq!(state.messages().len(), 1);
    let msg = &state.messages()[0];
    assert_eq!(
        msg.body,
        MessageBody::Assistant { content: WELCOME_MESSAGE.to_owned(), citations: Vec::new() }
    );
    assert_eq!(msg.timestamp, 1.0);
    assert!(!state.is_busy());
}

// =============================================================
// submit
// =============================================================

#[test]
fn submit_appends_user_message_and_sets_busy() {
    let mut state = ChatState::with_welcome(0.0);
    assert!(state.submit(QUESTION, 5.0));
    assert_eq!(state.messages().len(), 2);
    let last = state.messages().last().unwrap();
    assert_eq!(last.body, MessageBody::User { content: QUESTION.to_owned() });
    assert_eq!(last.timestamp, 5.0);
    assert!(state.is_busy());
}

#[test]
fn submit_keeps_content_verbatim() {
    let mut state = ChatState::default();
    let text = "  first line\nsecond line  ";
    assert!(state.submit(text, 0.0));
    assert_eq!(state.messages()[0].body, MessageBody::User { content: text.to_owned() });
}

#[test]
fn submit_rejects_blank_input() {
    let mut state = ChatState::with_welcome(0.0);
    assert!(!state.submit("", 0.0));
    assert!(!state.submit("   \n\t ", 0.0));
    assert_eq!(state.messages().len(), 1);
    assert!(!state.is_busy());
}

#[test]
fn submit_rejects_while_busy() {
    let mut state = ChatState::with_welcome(0.0);
    assert!(state.submit("first", 0.0));
    assert!(!state.submit("second", 0.0));
    assert_eq!(state.messages().len(), 2);
}

#[test]
fn can_submit_tracks_input_and_busy_flag() {
    let mut state = ChatState::default();
    assert!(!state.can_submit(" "));
    assert!(state.can_submit("hello"));
    state.submit("hello", 0.0);
    assert!(!state.can_submit("again"));
}

// =============================================================
// receive_reply
// =============================================================

#[test]
fn receive_reply_appends_assistant_message_and_clears_busy() {
    let mut state = ChatState::with_welcome(0.0);
    state.submit(QUESTION, 0.0);
    state.receive_reply(mock_reply(QUESTION), 2500.0);

    assert_eq!(state.messages().len(), 3);
    assert!(!state.is_busy());
    let last = state.messages().last().unwrap();
    assert!(!last.is_user());
    assert_eq!(last.citations().len(), 1);
    assert_eq!(last.timestamp, 2500.0);
}

#[test]
fn submit_accepted_again_after_reply() {
    let mut state = ChatState::default();
    state.submit("one", 0.0);
    state.receive_reply(mock_reply("one"), 0.0);
    assert!(state.submit("two", 0.0));
    assert_eq!(state.messages().len(), 3);
}

#[test]
fn message_ids_increase_in_insertion_order() {
    let mut state = ChatState::with_welcome(0.0);
    state.submit("one", 0.0);
    state.receive_reply(mock_reply("one"), 0.0);
    let ids: Vec<u64> = state.messages().iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

// =============================================================
// transcript
// =============================================================

#[test]
fn transcript_appends_loading_placeholder_while_busy() {
    let mut state = ChatState::with_welcome(0.0);
    state.submit(QUESTION, 0.0);

    let transcript = state.transcript();
    assert_eq!(transcript.len(), 3);
    let last = transcript.last().unwrap();
    assert_eq!(last.body, MessageBody::Loading);
    let ids: std::collections::HashSet<u64> = transcript.iter().map(|m| m.id).collect();
    assert_eq!(ids.len(), 3);
}

#[test]
fn transcript_matches_messages_when_idle() {
    let mut state = ChatState::with_welcome(0.0);
    state.submit(QUESTION, 0.0);
    state.receive_reply(mock_reply(QUESTION), 0.0);
    assert_eq!(state.transcript(), state.messages().to_vec());
}

// =============================================================
// Viewer selection
// =============================================================

#[test]
fn open_citation_shows_viewer_and_close_clears_it() {
    let mut state = ChatState::default();
    let citation = mock_reply("q").citations.remove(0);

    state.open_citation(citation.clone());
    assert!(state.viewer().is_visible());
    assert_eq!(state.viewer().selected(), Some(&citation));

    state.close_viewer();
    assert!(!state.viewer().is_visible());
    assert_eq!(state.viewer().selected(), None);
}

// =============================================================
// End-to-end flow
// =============================================================

#[test]
fn question_reply_and_citation_flow() {
    let mut state = ChatState::with_welcome(0.0);

    assert!(state.submit(QUESTION, 10.0));
    assert_eq!(state.messages().len(), 2);
    assert!(state.messages()[1].is_user());

    state.receive_reply(mock_reply(QUESTION), 2510.0);
    assert_eq!(state.messages().len(), 3);
    let citation = state.messages()[2].citations()[0].clone();

    state.open_citation(citation.clone());
    let selected = state.viewer().selected().unwrap();
    let doc = mock_document::paragraphs(selected);
    let highlighted: Vec<_> = doc.iter().filter(|p| p.is_highlighted()).collect();
    assert_eq!(highlighted.len(), 1);
    assert_eq!(highlighted[0].number, 7);
    match &highlighted[0].body {
        mock_document::ParagraphBody::Highlighted { quote, .. } => assert_eq!(quote, &citation.text),
        other => panic!("expected highlighted paragraph, got {other:?}"),
    }

    state.close_viewer();
    assert!(!state.viewer().is_visible());
}

// =============================================================
// Transcript stability across viewer changes
// =============================================================

#[test]
fn viewer_changes_leave_transcript_unchanged() {
    let mut state = ChatState::with_welcome(0.0);
    state.submit(QUESTION, 0.0);
    state.receive_reply(mock_reply(QUESTION), 0.0);
    let before = state.transcript();

    let citation = state.messages()[2].citations()[0].clone();
    state.open_citation(citation);
    assert_eq!(state.transcript(), before);

    state.close_viewer();
    assert_eq!(state.transcript(), before);
}

#[test]
fn transcript_changes_with_each_turn_and_ends_at_newest() {
    let mut state = ChatState::with_welcome(0.0);
    let seeded = state.transcript();

    state.submit(QUESTION, 0.0);
    let pending = state.transcript();
    assert_ne!(pending, seeded);
    assert_eq!(pending.last().map(|m| &m.body), Some(&MessageBody::Loading));

    state.receive_reply(mock_reply(QUESTION), 0.0);
    let answered = state.transcript();
    assert_ne!(answered, pending);
    assert_eq!(answered.last(), state.messages().last());
}
