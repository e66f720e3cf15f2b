//! Controller layer: UI actions, queueing, and reducer-like state transitions.

pub mod events;
pub mod orchestration;
pub mod reducer;
