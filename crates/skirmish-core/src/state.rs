//! Per-frame snapshot handed to the external renderer.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::events::GameEvent;
use crate::types::{MeshHandle, SimTime};

/// One drawable entity: pose, geometry, and the fade/scale hints derived
/// from any explosion effect on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawInstance {
    pub position: Vec3,
    /// Euler rotation in degrees (pitch, yaw, roll).
    pub rotation: Vec3,
    pub mesh: MeshHandle,
    /// Render alpha in [0, 1]; 1.0 for anything that is not fading out.
    pub alpha: f32,
    /// Render scale multiplier; 1.0 for anything that is not growing.
    pub scale: f32,
}

/// Complete render-facing view of one frame, refreshed after all systems
/// have run. Serializable so hosts can ship it across a process boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub draws: Vec<DrawInstance>,
    /// Events raised during this frame, in emission order.
    pub events: Vec<GameEvent>,
}
