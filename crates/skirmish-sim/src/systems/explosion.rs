//! Explosion effect aging and expiry.
//!
//! Only the lifetime counter is mutated here; the fade and growth values the
//! renderer consumes are derived read-only by the snapshot builder.

use skirmish_core::physics::PhysicsEngine;
use skirmish_core::types::EntityId;

use crate::ecs::Registry;
use crate::systems::despawn_batch;

pub fn run(registry: &mut Registry, physics: &mut dyn PhysicsEngine, dt: f32) {
    for idx in registry.alive_entities() {
        let Some(explosion) = registry.explosions[idx].as_mut() else {
            continue;
        };

        explosion.lifetime -= dt;
        if explosion.lifetime <= 0.0 {
            registry.schedule_despawn(EntityId::new(idx as u32));
        }
    }

    let batch = registry.drain_despawns();
    despawn_batch(registry, physics, &batch);
}
