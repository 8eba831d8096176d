//! Per-frame systems that operate on the registry.
//!
//! Systems take the registry (and collaborators) explicitly as parameters;
//! they own no state of their own. Every system that removes entities
//! collects a batch during its sweep and applies it through
//! [`despawn_batch`] afterwards, never mid-iteration.

pub mod ai;
pub mod cleanup;
pub mod collision;
pub mod explosion;
pub mod physics_sync;
pub mod projectile;
pub mod snapshot;

use skirmish_core::physics::PhysicsEngine;
use skirmish_core::types::EntityId;

use crate::ecs::Registry;

/// Apply one removal batch: deregister any external rigid body first, then
/// drop the entity and its components atomically.
pub fn despawn_batch(registry: &mut Registry, physics: &mut dyn PhysicsEngine, batch: &[EntityId]) {
    for &id in batch {
        if !registry.is_alive(id) {
            continue;
        }
        if let Some(body) = registry.physics_bodies[id.index()] {
            physics.remove_body(body.body);
        }
        log::debug!("{id} despawned");
        registry.despawn(id);
    }
}
