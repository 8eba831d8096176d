//! SoA (Struct of Arrays) entity registry.
//!
//! Each component kind has its own `Vec<Option<T>>` storage indexed by
//! entity id. Ids are allocated monotonically and never reused, so an index
//! identifies the same entity for the registry's whole lifetime and stale
//! ids can only ever name dead slots.
//!
//! Removal discipline: systems never despawn mid-sweep. They call
//! `schedule_despawn` while iterating and drain the batch once the sweep
//! completes, which keeps iteration valid and guarantees an entity's
//! components disappear atomically.

use skirmish_core::components::{
    Ai, Bullet, Collider, Explosion, Health, MeshRef, PhysicsBody, Transform,
};
use skirmish_core::types::EntityId;

pub struct Registry {
    next_index: u32,
    alive: Vec<bool>,
    pending_despawns: Vec<EntityId>,

    // One storage Vec per component kind
    pub transforms: Vec<Option<Transform>>,
    pub mesh_refs: Vec<Option<MeshRef>>,
    pub colliders: Vec<Option<Collider>>,
    pub bullets: Vec<Option<Bullet>>,
    pub explosions: Vec<Option<Explosion>>,
    pub healths: Vec<Option<Health>>,
    pub ais: Vec<Option<Ai>>,
    pub physics_bodies: Vec<Option<PhysicsBody>>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            next_index: 0,
            alive: Vec::new(),
            pending_despawns: Vec::new(),
            transforms: Vec::new(),
            mesh_refs: Vec::new(),
            colliders: Vec::new(),
            bullets: Vec::new(),
            explosions: Vec::new(),
            healths: Vec::new(),
            ais: Vec::new(),
            physics_bodies: Vec::new(),
        }
    }

    /// Allocate a fresh entity with an empty component set.
    pub fn spawn(&mut self) -> EntityId {
        let id = EntityId::new(self.next_index);
        self.next_index += 1;

        self.alive.push(true);
        self.transforms.push(None);
        self.mesh_refs.push(None);
        self.colliders.push(None);
        self.bullets.push(None);
        self.explosions.push(None);
        self.healths.push(None);
        self.ais.push(None);
        self.physics_bodies.push(None);

        id
    }

    /// Remove the entity and every component in one step. Idempotent.
    pub fn despawn(&mut self, id: EntityId) {
        if !self.is_alive(id) {
            return;
        }
        let idx = id.index();
        self.alive[idx] = false;
        self.transforms[idx] = None;
        self.mesh_refs[idx] = None;
        self.colliders[idx] = None;
        self.bullets[idx] = None;
        self.explosions[idx] = None;
        self.healths[idx] = None;
        self.ais[idx] = None;
        self.physics_bodies[idx] = None;
    }

    pub fn is_alive(&self, id: EntityId) -> bool {
        self.alive.get(id.index()).copied().unwrap_or(false)
    }

    pub fn entity_count(&self) -> usize {
        self.alive.iter().filter(|&&a| a).count()
    }

    /// Indices of all live entities, in allocation order.
    pub fn alive_entities(&self) -> Vec<usize> {
        self.alive
            .iter()
            .enumerate()
            .filter_map(|(i, &alive)| if alive { Some(i) } else { None })
            .collect()
    }

    /// Queue a removal raised during a sweep. Applied by `drain_despawns`
    /// once the sweep completes.
    pub fn schedule_despawn(&mut self, id: EntityId) {
        self.pending_despawns.push(id);
    }

    /// Take the pending removal batch, deduplicated, in schedule order.
    pub fn drain_despawns(&mut self) -> Vec<EntityId> {
        let mut batch = std::mem::take(&mut self.pending_despawns);
        let mut seen = vec![false; self.alive.len()];
        batch.retain(|id| match seen.get_mut(id.index()) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        });
        batch
    }

    // Attach-or-replace helpers. Each is a silent no-op on a dead id;
    // callers are expected to spawn before attaching.

    pub fn attach_transform(&mut self, id: EntityId, transform: Transform) {
        if self.is_alive(id) {
            self.transforms[id.index()] = Some(transform);
        }
    }

    pub fn attach_mesh(&mut self, id: EntityId, mesh: MeshRef) {
        if self.is_alive(id) {
            self.mesh_refs[id.index()] = Some(mesh);
        }
    }

    pub fn attach_collider(&mut self, id: EntityId, collider: Collider) {
        if self.is_alive(id) {
            self.colliders[id.index()] = Some(collider);
        }
    }

    pub fn attach_bullet(&mut self, id: EntityId, bullet: Bullet) {
        if self.is_alive(id) {
            self.bullets[id.index()] = Some(bullet);
        }
    }

    pub fn attach_explosion(&mut self, id: EntityId, explosion: Explosion) {
        if self.is_alive(id) {
            self.explosions[id.index()] = Some(explosion);
        }
    }

    pub fn attach_health(&mut self, id: EntityId, health: Health) {
        if self.is_alive(id) {
            self.healths[id.index()] = Some(health);
        }
    }

    pub fn attach_ai(&mut self, id: EntityId, ai: Ai) {
        if self.is_alive(id) {
            self.ais[id.index()] = Some(ai);
        }
    }

    pub fn attach_physics_body(&mut self, id: EntityId, body: PhysicsBody) {
        if self.is_alive(id) {
            self.physics_bodies[id.index()] = Some(body);
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
