//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is plain data with pure transition methods so it can be unit tested
//! natively; components wrap it in `RwSignal` and drive it from events.

pub mod chat;
pub mod viewer;
