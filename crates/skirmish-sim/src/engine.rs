//! Frame orchestrator.
//!
//! `Simulation` owns the registry and runs all systems in a fixed order
//! each frame. Single-threaded and synchronous: no two systems ever
//! overlap, and each applies its own removal batch before the next runs.

use glam::Vec3;

use skirmish_core::events::GameEvent;
use skirmish_core::physics::PhysicsEngine;
use skirmish_core::state::FrameSnapshot;
use skirmish_core::types::{EntityId, MeshHandle, SimTime};

use crate::ecs::Registry;
use crate::systems;
use crate::weapon::Weapon;

pub struct Simulation {
    registry: Registry,
    time: SimTime,
    /// Entity the enemies perceive and pursue. Unset means enemies never
    /// detect anything.
    player: Option<EntityId>,
    /// Shared geometry stamped onto spawned explosion effects.
    effect_mesh: MeshHandle,
    events: Vec<GameEvent>,
}

impl Simulation {
    pub fn new(effect_mesh: MeshHandle) -> Self {
        Self {
            registry: Registry::new(),
            time: SimTime::default(),
            player: None,
            effect_mesh,
            events: Vec::new(),
        }
    }

    /// Designate the entity enemy perception tracks.
    pub fn set_player(&mut self, player: EntityId) {
        self.player = Some(player);
    }

    pub fn player(&self) -> Option<EntityId> {
        self.player
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Mutable registry access for scene setup (static geometry, enemies,
    /// the player entity).
    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// Fire a weapon through the kinematic bullet path.
    pub fn fire(
        &mut self,
        weapon: &Weapon,
        bullet_mesh: MeshHandle,
        origin: Vec3,
        direction: Vec3,
    ) {
        weapon.fire(
            &mut self.registry,
            &mut self.events,
            bullet_mesh,
            origin,
            direction,
        );
    }

    /// Fire a weapon through the external rigid-body engine.
    pub fn fire_physical(
        &mut self,
        weapon: &Weapon,
        physics: &mut dyn PhysicsEngine,
        bullet_mesh: MeshHandle,
        origin: Vec3,
        direction: Vec3,
    ) {
        weapon.fire_physical(
            &mut self.registry,
            physics,
            &mut self.events,
            bullet_mesh,
            origin,
            direction,
        );
    }

    /// Advance the simulation by one frame and return the render snapshot.
    ///
    /// The order is fixed and significant: collision resolves against the
    /// poses the physics engine just wrote back, and before projectile
    /// integration moves any bullet past its impact point.
    pub fn tick(&mut self, physics: &mut dyn PhysicsEngine, dt: f32) -> FrameSnapshot {
        let dt = dt.max(0.0);

        // 1. Enemy behavior
        systems::ai::run(&mut self.registry, physics, self.player, dt, &mut self.events);
        // 2. External rigid-body step + pose write-back
        physics.step(dt);
        systems::physics_sync::run(&mut self.registry, physics);
        // 3. Bullet/target resolution
        systems::collision::run(&mut self.registry, physics, self.effect_mesh, &mut self.events);
        // 4. Bullet integration and expiry
        systems::projectile::run(&mut self.registry, physics, dt);
        // 5. Explosion aging
        systems::explosion::run(&mut self.registry, physics, dt);
        // 6. Out-of-bounds cleanup
        systems::cleanup::run(&mut self.registry, physics);

        self.time.advance(dt);
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.registry, self.time, events)
    }
}
