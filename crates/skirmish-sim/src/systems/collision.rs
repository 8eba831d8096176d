//! Bullet-versus-target collision resolution.
//!
//! Pairwise AABB test between every bullet and every non-bullet collidable.
//! First matching target wins; a bullet lands at most one hit per frame.
//! All removals are applied in a single batch after the full scan.

use glam::Vec3;

use skirmish_core::components::{Explosion, MeshRef, Transform};
use skirmish_core::constants::{BULLET_DAMAGE, EXPLOSION_LIFETIME_SECS};
use skirmish_core::events::GameEvent;
use skirmish_core::physics::PhysicsEngine;
use skirmish_core::types::{EntityId, MeshHandle};

use crate::ecs::Registry;
use crate::systems::despawn_batch;

/// Closed-interval overlap on all three axes; touching counts.
pub fn aabb_overlap(a_pos: Vec3, a_half: Vec3, b_pos: Vec3, b_half: Vec3) -> bool {
    let a_min = a_pos - a_half;
    let a_max = a_pos + a_half;
    let b_min = b_pos - b_half;
    let b_max = b_pos + b_half;

    a_min.x <= b_max.x
        && a_max.x >= b_min.x
        && a_min.y <= b_max.y
        && a_max.y >= b_min.y
        && a_min.z <= b_max.z
        && a_max.z >= b_min.z
}

/// Resolve all bullet/target overlaps for this frame. `effect_mesh` is the
/// shared geometry stamped onto spawned explosion effects.
pub fn run(
    registry: &mut Registry,
    physics: &mut dyn PhysicsEngine,
    effect_mesh: MeshHandle,
    events: &mut Vec<GameEvent>,
) {
    // Gather bullet data: (idx, position, half extents)
    let bullets: Vec<(usize, Vec3, Vec3)> = registry
        .alive_entities()
        .iter()
        .filter_map(|&idx| {
            registry.bullets[idx].as_ref()?;
            let t = registry.transforms[idx].as_ref()?;
            let c = registry.colliders[idx].as_ref()?;
            Some((idx, t.position, c.half_extents))
        })
        .collect();

    // Gather targets: every other collidable that is not itself a bullet
    let targets: Vec<(usize, Vec3, Vec3)> = registry
        .alive_entities()
        .iter()
        .filter_map(|&idx| {
            if registry.bullets[idx].is_some() {
                return None;
            }
            let t = registry.transforms[idx].as_ref()?;
            let c = registry.colliders[idx].as_ref()?;
            Some((idx, t.position, c.half_extents))
        })
        .collect();

    for &(bullet_idx, bullet_pos, bullet_half) in &bullets {
        for &(target_idx, target_pos, target_half) in &targets {
            if target_idx == bullet_idx {
                continue;
            }
            if !aabb_overlap(bullet_pos, bullet_half, target_pos, target_half) {
                continue;
            }

            let target_id = EntityId::new(target_idx as u32);
            registry.schedule_despawn(EntityId::new(bullet_idx as u32));
            spawn_explosion(registry, bullet_pos, effect_mesh);
            events.push(GameEvent::BulletImpact {
                position: bullet_pos,
                target: target_id,
            });
            log::debug!("bullet impact at {bullet_pos} on {target_id}");

            if let Some(health) = registry.healths[target_idx].as_mut() {
                let was_standing = health.current > 0;
                health.current -= BULLET_DAMAGE;
                if health.current <= 0 {
                    registry.schedule_despawn(target_id);
                    if was_standing {
                        events.push(GameEvent::TargetDestroyed { entity: target_id });
                        log::debug!("{target_id} destroyed");
                    }
                }
            }

            // One hit per bullet per frame.
            break;
        }
    }

    let batch = registry.drain_despawns();
    despawn_batch(registry, physics, &batch);
}

/// Spawn an expiring impact effect at the hit position.
fn spawn_explosion(registry: &mut Registry, position: Vec3, effect_mesh: MeshHandle) {
    let effect = registry.spawn();
    registry.attach_transform(effect, Transform::new(position));
    registry.attach_mesh(effect, MeshRef { mesh: effect_mesh });
    registry.attach_explosion(effect, Explosion::new(EXPLOSION_LIFETIME_SECS));
    log::debug!("explosion spawned at {position}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_is_symmetric() {
        let a = (Vec3::new(0.0, 0.0, 0.0), Vec3::splat(0.5));
        let b = (Vec3::new(0.7, 0.2, -0.3), Vec3::splat(0.5));
        assert_eq!(
            aabb_overlap(a.0, a.1, b.0, b.1),
            aabb_overlap(b.0, b.1, a.0, a.1)
        );

        let far = (Vec3::new(5.0, 0.0, 0.0), Vec3::splat(0.5));
        assert_eq!(
            aabb_overlap(a.0, a.1, far.0, far.1),
            aabb_overlap(far.0, far.1, a.0, a.1)
        );
        assert!(!aabb_overlap(a.0, a.1, far.0, far.1));
    }

    #[test]
    fn touching_boxes_count_as_overlapping() {
        let a = (Vec3::ZERO, Vec3::splat(0.5));
        let b = (Vec3::new(1.0, 0.0, 0.0), Vec3::splat(0.5));
        assert!(aabb_overlap(a.0, a.1, b.0, b.1));

        let c = (Vec3::new(1.0 + 1e-3, 0.0, 0.0), Vec3::splat(0.5));
        assert!(!aabb_overlap(a.0, a.1, c.0, c.1));
    }

    #[test]
    fn separation_on_any_single_axis_prevents_overlap() {
        let half = Vec3::splat(0.5);
        assert!(!aabb_overlap(
            Vec3::ZERO,
            half,
            Vec3::new(0.0, 2.0, 0.0),
            half
        ));
        assert!(!aabb_overlap(
            Vec3::ZERO,
            half,
            Vec3::new(0.0, 0.0, 2.0),
            half
        ));
    }
}
