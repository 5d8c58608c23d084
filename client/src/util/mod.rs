//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod body_scroll;
pub mod clock;
pub mod display;
pub mod external_link;
pub mod keys;
pub mod mock_document;
pub mod textarea;
