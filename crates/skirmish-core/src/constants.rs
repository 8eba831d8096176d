//! Simulation constants and tuning parameters.

use glam::Vec3;

// --- Weapons ---

/// Rifle damage rating (carried on the weapon record; collision resolution
/// currently applies the flat [`BULLET_DAMAGE`] instead).
pub const RIFLE_DAMAGE: f32 = 25.0;

/// Rifle muzzle speed (units/second).
pub const RIFLE_BULLET_SPEED: f32 = 50.0;

/// Seconds a fired bullet survives without hitting anything.
pub const BULLET_LIFETIME_SECS: f32 = 5.0;

/// Half-extent of the bullet's collision box on each axis.
pub const BULLET_COLLIDER_HALF_EXTENT: f32 = 0.1;

/// Collision radius of a physics-backed round.
pub const BULLET_BODY_RADIUS: f32 = 0.2;

/// Mass of a physics-backed round (kg).
pub const BULLET_BODY_MASS: f32 = 1.0;

/// Hit points removed per bullet hit.
pub const BULLET_DAMAGE: i32 = 1;

/// Constant downward acceleration applied to kinematic bullets.
pub const GRAVITY: Vec3 = Vec3::new(0.0, -9.8, 0.0);

/// Facing used when a direction vector degenerates to zero length.
pub const DEFAULT_FORWARD: Vec3 = Vec3::new(0.0, 0.0, -1.0);

// --- Explosions ---

/// Seconds an explosion effect lingers before expiring.
pub const EXPLOSION_LIFETIME_SECS: f32 = 1.0;

/// Growth applied to an explosion's render scale per second of age.
pub const EXPLOSION_GROWTH_RATE: f32 = 2.0;

// --- Enemy AI ---

/// Distance at which a patrol waypoint counts as reached.
pub const WAYPOINT_PROXIMITY: f32 = 0.5;

/// Y offset from an entity's feet to its eyes, used for line-of-sight rays.
pub const EYE_HEIGHT: f32 = 1.0;

/// Default perception radius (units).
pub const DEFAULT_DETECTION_RANGE: f32 = 10.0;

/// Default field of view (full angle, degrees).
pub const DEFAULT_FIELD_OF_VIEW: f32 = 60.0;

/// Default distance an enemy keeps from its target while fighting.
pub const DEFAULT_COMBAT_RANGE: f32 = 5.0;

/// Default patrol movement speed (units/second).
pub const DEFAULT_PATROL_SPEED: f32 = 2.0;

/// Default pursuit movement speed (units/second).
pub const DEFAULT_COMBAT_SPEED: f32 = 4.0;

/// Seconds an enemy dwells in the detect state before committing to combat.
pub const DEFAULT_DETECTION_TIME: f32 = 1.0;

// --- World ---

/// Entities whose position leaves this per-axis bound are cleaned up.
pub const WORLD_BOUND: f32 = 500.0;
