//! Out-of-bounds cleanup.
//!
//! Bounds the lifetime of anything that escapes the playfield — in practice
//! physics-backed rounds, which carry no expiry of their own.

use skirmish_core::constants::WORLD_BOUND;
use skirmish_core::physics::PhysicsEngine;
use skirmish_core::types::EntityId;

use crate::ecs::Registry;
use crate::systems::despawn_batch;

pub fn run(registry: &mut Registry, physics: &mut dyn PhysicsEngine) {
    for idx in registry.alive_entities() {
        let Some(transform) = registry.transforms[idx].as_ref() else {
            continue;
        };
        let p = transform.position;
        if p.x.abs() > WORLD_BOUND || p.y.abs() > WORLD_BOUND || p.z.abs() > WORLD_BOUND {
            registry.schedule_despawn(EntityId::new(idx as u32));
        }
    }

    let batch = registry.drain_despawns();
    despawn_batch(registry, physics, &batch);
}
