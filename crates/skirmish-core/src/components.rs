//! Components attached to registry entities.
//!
//! Components are plain data records with at most small derived-value
//! helpers. Game logic lives in systems, not components.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_COMBAT_RANGE, DEFAULT_COMBAT_SPEED, DEFAULT_DETECTION_RANGE, DEFAULT_DETECTION_TIME,
    DEFAULT_FIELD_OF_VIEW, DEFAULT_PATROL_SPEED, EXPLOSION_GROWTH_RATE,
};
use crate::physics::BodyHandle;
use crate::types::{EntityId, MeshHandle};

/// World-space position and Euler orientation.
///
/// Rotation is stored in degrees: `rotation.x` = pitch, `rotation.y` = yaw,
/// `rotation.z` = roll. Only yaw is driven by the simulation; the rest is
/// host territory (mouse look on the player, etc.).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl Transform {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
        }
    }

    /// Horizontal facing derived from the current yaw.
    pub fn forward(&self) -> Vec3 {
        let yaw = self.rotation.y.to_radians();
        Vec3::new(yaw.sin(), 0.0, yaw.cos())
    }
}

/// Reference to externally-owned drawable geometry. Never mutated after
/// attach; freely shared between entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeshRef {
    pub mesh: MeshHandle,
}

/// Axis-aligned bounding box centered on the entity's transform position.
/// Meaningless without a [`Transform`] on the same entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Collider {
    pub half_extents: Vec3,
}

impl Collider {
    pub fn new(half_extents: Vec3) -> Self {
        Self { half_extents }
    }

    pub fn cube(half_extent: f32) -> Self {
        Self {
            half_extents: Vec3::splat(half_extent),
        }
    }
}

/// Kinematics for a bullet whose motion the simulation integrates itself.
/// Mutually exclusive with [`PhysicsBody`]-driven translation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub velocity: Vec3,
    pub acceleration: Vec3,
    /// Remaining lifetime in seconds; the entity is removed at <= 0.
    pub lifetime: f32,
}

/// Expiring visual effect spawned at a bullet impact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Explosion {
    /// Remaining lifetime in seconds.
    pub lifetime: f32,
    /// Lifetime at creation, kept for fade derivation.
    pub max_lifetime: f32,
}

impl Explosion {
    pub fn new(lifetime: f32) -> Self {
        Self {
            lifetime,
            max_lifetime: lifetime,
        }
    }

    /// Render alpha in [0, 1]; 1 at spawn, 0 at expiry.
    pub fn fade(&self) -> f32 {
        self.lifetime / self.max_lifetime
    }

    /// Render scale multiplier; grows as the effect ages.
    pub fn scale(&self) -> f32 {
        1.0 + (self.max_lifetime - self.lifetime) * EXPLOSION_GROWTH_RATE
    }
}

/// Hit points. The owning entity is removed in the same collision pass that
/// observes `current <= 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self { current: max, max }
    }
}

/// Behavior state of an enemy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AiState {
    /// Walking the waypoint route, scanning for the player.
    #[default]
    Patrol,
    /// Player spotted; dwelling before committing to combat.
    Detect,
    /// Pursuing and facing the target. No exit once entered.
    Combat,
}

/// Enemy perception parameters and state-machine bookkeeping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ai {
    pub state: AiState,
    /// Patrol route in world space; empty route means the enemy holds still.
    pub waypoints: Vec<Vec3>,
    /// Cursor into `waypoints`; valid whenever the route is non-empty.
    pub current_waypoint: usize,
    pub detection_range: f32,
    /// Full field-of-view angle in degrees.
    pub field_of_view: f32,
    pub combat_range: f32,
    pub patrol_speed: f32,
    pub combat_speed: f32,
    /// Seconds of dwell required in detect before entering combat.
    pub detection_time: f32,
    /// Seconds accumulated in the detect state.
    pub time_since_detection: f32,
    /// Entity the enemy has perceived, if any.
    pub target: Option<EntityId>,
}

impl Ai {
    /// An enemy at default tuning patrolling the given route.
    pub fn patrolling(waypoints: Vec<Vec3>) -> Self {
        Self {
            waypoints,
            ..Self::default()
        }
    }
}

impl Default for Ai {
    fn default() -> Self {
        Self {
            state: AiState::Patrol,
            waypoints: Vec::new(),
            current_waypoint: 0,
            detection_range: DEFAULT_DETECTION_RANGE,
            field_of_view: DEFAULT_FIELD_OF_VIEW,
            combat_range: DEFAULT_COMBAT_RANGE,
            patrol_speed: DEFAULT_PATROL_SPEED,
            combat_speed: DEFAULT_COMBAT_SPEED,
            detection_time: DEFAULT_DETECTION_TIME,
            time_since_detection: 0.0,
            target: None,
        }
    }
}

/// Handle into the external rigid-body engine. Present only on entities
/// whose translation the engine owns; never combined with [`Bullet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhysicsBody {
    pub body: BodyHandle,
}
