//! Fundamental identifier and time types.

use serde::{Deserialize, Serialize};

/// Identifier for an entity in the registry.
///
/// Ids are allocated monotonically and never reused for the lifetime of a
/// registry, so a stale id can never alias a newer entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(u32);

impl EntityId {
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Index into the registry's per-kind component arrays.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "E{}", self.0)
    }
}

/// Handle to externally-owned drawable geometry.
///
/// The registry never manages mesh lifetime; many entities may share one
/// handle (all bullets reference the same bullet mesh).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeshHandle(u64);

impl MeshHandle {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Simulation time tracking. Frames advance by a variable `dt` supplied by
/// the host loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Frame number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f32,
}

impl SimTime {
    /// Advance by one frame of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}
