//! Events emitted by the simulation for the host's audio/UI feedback.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::types::EntityId;

/// One frame's worth of these is handed to the host inside the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A weapon spawned a round.
    ShotFired { position: Vec3, direction: Vec3 },
    /// A bullet struck a collidable entity.
    BulletImpact { position: Vec3, target: EntityId },
    /// A damaged entity ran out of hit points.
    TargetDestroyed { entity: EntityId },
    /// An enemy spotted the player and entered the detect state.
    EnemyAlerted { entity: EntityId },
    /// An enemy committed to combat.
    EnemyEngaged { entity: EntityId },
}
