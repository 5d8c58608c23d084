//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `chat_interface` owns the conversation state and hands the current citation
//! selection down to `citation_viewer` as a read-only signal plus a close
//! callback.

pub mod chat_interface;
pub mod citation_viewer;
