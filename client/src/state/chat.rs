//! Conversation state for the chat interface.
//!
//! DESIGN
//! ======
//! The conversation list only ever grows. The loading placeholder is not
//! stored; `transcript` appends it while a reply is pending so the list keeps
//! exactly one entry per user turn and one per reply.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::assistant::AssistantReply;
use crate::state::viewer::ViewerState;

pub const WELCOME_MESSAGE: &str = "Hello! I'm Lexi, your legal research assistant. I can help you find answers to legal questions with proper citations from case law and legal documents. How can I assist you today?";

/// A quoted excerpt from a source document backing an assistant answer.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Citation {
    pub text: String,
    pub source: String,
    pub paragraph: u32,
    pub link: String,
}

/// Role-specific payload of a chat message.
#[derive(Clone, Debug, PartialEq)]
pub enum MessageBody {
    User { content: String },
    Assistant { content: String, citations: Vec<Citation> },
    /// Placeholder shown while a reply is pending. Never stored.
    Loading,
}

/// A single entry in the conversation list.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: u64,
    pub body: MessageBody,
    pub timestamp: f64,
}

impl ChatMessage {
    pub fn is_user(&self) -> bool {
        matches!(self.body, MessageBody::User { .. })
    }

    pub fn citations(&self) -> &[Citation] {
        match &self.body {
            MessageBody::Assistant { citations, .. } => citations,
            _ => &[],
        }
    }
}

/// State owned by the chat interface: messages, busy flag, viewer selection.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    messages: Vec<ChatMessage>,
    busy: bool,
    next_id: u64,
    viewer: ViewerState,
}

impl ChatState {
    /// State seeded with the assistant's welcome message.
    pub fn with_welcome(now: f64) -> Self {
        let mut state = Self::default();
        state.push(
            MessageBody::Assistant { content: WELCOME_MESSAGE.to_owned(), citations: Vec::new() },
            now,
        );
        state
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn viewer(&self) -> &ViewerState {
        &self.viewer
    }

    /// Whether `input` would be accepted by `submit` right now.
    pub fn can_submit(&self, input: &str) -> bool {
        !self.busy && !input.trim().is_empty()
    }

    /// Append a user message and mark a reply as pending.
    ///
    /// Returns `false` and leaves the state untouched when the input is blank
    /// or a reply is already pending. The content is stored verbatim.
    pub fn submit(&mut self, input: &str, now: f64) -> bool {
        if !self.can_submit(input) {
            return false;
        }
        self.push(MessageBody::User { content: input.to_owned() }, now);
        self.busy = true;
        true
    }

    /// Append the assistant's reply and clear the busy flag.
    pub fn receive_reply(&mut self, reply: AssistantReply, now: f64) {
        self.push(MessageBody::Assistant { content: reply.answer, citations: reply.citations }, now);
        self.busy = false;
    }

    /// Messages as rendered: the conversation plus a loading entry while busy.
    pub fn transcript(&self) -> Vec<ChatMessage> {
        let mut out = self.messages.clone();
        if self.busy {
            out.push(ChatMessage { id: self.next_id + 1, body: MessageBody::Loading, timestamp: 0.0 });
        }
        out
    }

    pub fn open_citation(&mut self, citation: Citation) {
        self.viewer.open(citation);
    }

    pub fn close_viewer(&mut self) {
        self.viewer.close();
    }

    fn push(&mut self, body: MessageBody, now: f64) {
        self.next_id += 1;
        self.messages.push(ChatMessage { id: self.next_id, body, timestamp: now });
    }
}
