//! Core types and definitions for the skirmish simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, constants, events, snapshot types, and the contract the
//! simulation uses to talk to an external rigid-body engine. It has no
//! dependency on any windowing, rendering, or physics runtime.

pub mod components;
pub mod constants;
pub mod events;
pub mod physics;
pub mod state;
pub mod types;
