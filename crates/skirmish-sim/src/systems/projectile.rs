//! Bullet kinematic integration and lifetime expiry.

use skirmish_core::physics::PhysicsEngine;
use skirmish_core::types::EntityId;

use crate::ecs::Registry;
use crate::systems::despawn_batch;

/// Semi-implicit Euler step for every entity with bullet kinematics and a
/// transform: velocity first, then position from the updated velocity.
/// Expired bullets are removed in one batch after the full sweep.
pub fn run(registry: &mut Registry, physics: &mut dyn PhysicsEngine, dt: f32) {
    for idx in registry.alive_entities() {
        let Some(bullet) = registry.bullets[idx].as_mut() else {
            continue;
        };
        let Some(transform) = registry.transforms[idx].as_mut() else {
            continue;
        };

        bullet.velocity += bullet.acceleration * dt;
        transform.position += bullet.velocity * dt;
        bullet.lifetime -= dt;

        if bullet.lifetime <= 0.0 {
            registry.schedule_despawn(EntityId::new(idx as u32));
        }
    }

    let batch = registry.drain_despawns();
    despawn_batch(registry, physics, &batch);
}
