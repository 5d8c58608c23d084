//! Assistant request plumbing.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no research backend yet. `assistant` defines the reply shape and
//! answers every question with a canned response after a fixed delay.

pub mod assistant;
