//! Weapons: a closed set of firing strategies.
//!
//! Firing only creates entities; rate limiting is the caller's concern.

use glam::Vec3;

use skirmish_core::components::{Bullet, Collider, MeshRef, PhysicsBody, Transform};
use skirmish_core::constants::{
    BULLET_BODY_MASS, BULLET_BODY_RADIUS, BULLET_COLLIDER_HALF_EXTENT, BULLET_LIFETIME_SECS,
    DEFAULT_FORWARD, GRAVITY, RIFLE_BULLET_SPEED, RIFLE_DAMAGE,
};
use skirmish_core::events::GameEvent;
use skirmish_core::physics::{BodyDescriptor, PhysicsEngine};
use skirmish_core::types::MeshHandle;

use crate::ecs::Registry;

/// Every weapon the simulation knows how to fire.
#[derive(Debug, Clone, PartialEq)]
pub enum Weapon {
    Rifle(Rifle),
}

impl Weapon {
    pub fn rifle() -> Self {
        Weapon::Rifle(Rifle::default())
    }

    /// Spawn one round whose motion the simulation integrates itself.
    pub fn fire(
        &self,
        registry: &mut Registry,
        events: &mut Vec<GameEvent>,
        bullet_mesh: MeshHandle,
        origin: Vec3,
        direction: Vec3,
    ) {
        match self {
            Weapon::Rifle(rifle) => rifle.fire(registry, events, bullet_mesh, origin, direction),
        }
    }

    /// Spawn one round simulated by the external rigid-body engine.
    pub fn fire_physical(
        &self,
        registry: &mut Registry,
        physics: &mut dyn PhysicsEngine,
        events: &mut Vec<GameEvent>,
        bullet_mesh: MeshHandle,
        origin: Vec3,
        direction: Vec3,
    ) {
        match self {
            Weapon::Rifle(rifle) => {
                rifle.fire_physical(registry, physics, events, bullet_mesh, origin, direction)
            }
        }
    }
}

/// Standard-issue rifle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rifle {
    /// Damage rating. Collision resolution currently applies a flat
    /// one-point decrement instead of this value.
    pub damage: f32,
    pub bullet_speed: f32,
}

impl Default for Rifle {
    fn default() -> Self {
        Self {
            damage: RIFLE_DAMAGE,
            bullet_speed: RIFLE_BULLET_SPEED,
        }
    }
}

impl Rifle {
    pub fn fire(
        &self,
        registry: &mut Registry,
        events: &mut Vec<GameEvent>,
        bullet_mesh: MeshHandle,
        origin: Vec3,
        direction: Vec3,
    ) {
        let direction = direction.try_normalize().unwrap_or(DEFAULT_FORWARD);

        let bullet = registry.spawn();
        registry.attach_transform(bullet, Transform::new(origin));
        registry.attach_mesh(bullet, MeshRef { mesh: bullet_mesh });
        registry.attach_collider(bullet, Collider::cube(BULLET_COLLIDER_HALF_EXTENT));
        registry.attach_bullet(
            bullet,
            Bullet {
                velocity: direction * self.bullet_speed,
                acceleration: GRAVITY,
                lifetime: BULLET_LIFETIME_SECS,
            },
        );

        events.push(GameEvent::ShotFired {
            position: origin,
            direction,
        });
        log::debug!("{bullet} fired from {origin}");
    }

    /// Like `fire`, but registers the round with the external engine and
    /// lets it own the trajectory. The entity carries no kinematics of its
    /// own; its pose is synced back from the engine each frame.
    pub fn fire_physical(
        &self,
        registry: &mut Registry,
        physics: &mut dyn PhysicsEngine,
        events: &mut Vec<GameEvent>,
        bullet_mesh: MeshHandle,
        origin: Vec3,
        direction: Vec3,
    ) {
        let direction = direction.try_normalize().unwrap_or(DEFAULT_FORWARD);
        let body = physics.add_body(BodyDescriptor {
            position: origin,
            velocity: direction * self.bullet_speed,
            mass: BULLET_BODY_MASS,
            radius: BULLET_BODY_RADIUS,
        });

        let bullet = registry.spawn();
        registry.attach_transform(bullet, Transform::new(origin));
        registry.attach_mesh(bullet, MeshRef { mesh: bullet_mesh });
        registry.attach_collider(bullet, Collider::cube(BULLET_COLLIDER_HALF_EXTENT));
        registry.attach_physics_body(bullet, PhysicsBody { body });

        events.push(GameEvent::ShotFired {
            position: origin,
            direction,
        });
        log::debug!("{bullet} fired through physics from {origin}");
    }
}
