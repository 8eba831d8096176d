//! Copy authoritative poses from the external engine into transforms.
//!
//! Runs right after the engine steps, before collision resolution, so every
//! externally-simulated entity is tested at its true position this frame.

use skirmish_core::physics::PhysicsEngine;

use crate::ecs::Registry;

pub fn run(registry: &mut Registry, physics: &dyn PhysicsEngine) {
    for idx in registry.alive_entities() {
        let Some(body) = registry.physics_bodies[idx] else {
            continue;
        };
        // Stale handles are skipped rather than treated as an error.
        let Some(position) = physics.body_position(body.body) else {
            continue;
        };
        if let Some(transform) = registry.transforms[idx].as_mut() {
            transform.position = position;
        }
    }
}
