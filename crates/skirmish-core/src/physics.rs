//! Contract with the external rigid-body engine.
//!
//! The simulation never inspects engine internals; it registers bodies,
//! steps the world, asks for line-of-sight rays, and reads poses back.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Opaque reference to a rigid body owned by the external engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BodyHandle(u64);

impl BodyHandle {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Construction parameters for a dynamic sphere body (the only shape the
/// simulation itself registers; scene geometry is the host's business).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyDescriptor {
    pub position: Vec3,
    pub velocity: Vec3,
    pub mass: f32,
    pub radius: f32,
}

/// The operations the simulation is allowed to perform against the engine.
pub trait PhysicsEngine {
    /// Register a new dynamic body and return its handle.
    fn add_body(&mut self, desc: BodyDescriptor) -> BodyHandle;

    /// Deregister a body. Must be idempotent: removing an already-removed
    /// handle is a no-op.
    fn remove_body(&mut self, handle: BodyHandle);

    /// Advance the rigid-body simulation by `dt` seconds.
    fn step(&mut self, dt: f32);

    /// Returns true when nothing blocks the segment from `from` to `to`.
    fn raycast(&self, from: Vec3, to: Vec3) -> bool;

    /// Current position of a body, or `None` if the handle is stale.
    fn body_position(&self, handle: BodyHandle) -> Option<Vec3>;
}
