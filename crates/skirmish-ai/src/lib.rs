//! Enemy behavior for the skirmish simulation.
//!
//! Pure functions that compute perception results and patrol/detect/combat
//! state transitions for a single enemy. No registry dependency — the sim
//! crate feeds plain data in and applies the returned update. Line-of-sight
//! is injected as a callback so the physics engine stays at arm's length.

pub mod fsm;
