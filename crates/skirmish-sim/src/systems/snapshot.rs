//! Snapshot system: builds the render-facing view of the frame.
//!
//! Read-only — it never modifies the registry. Runs once per frame after
//! every other system.

use skirmish_core::events::GameEvent;
use skirmish_core::state::{DrawInstance, FrameSnapshot};
use skirmish_core::types::SimTime;

use crate::ecs::Registry;

/// Collect every drawable entity (transform + mesh) into a snapshot,
/// deriving fade/scale hints from any explosion effect present.
pub fn build_snapshot(registry: &Registry, time: SimTime, events: Vec<GameEvent>) -> FrameSnapshot {
    let draws: Vec<DrawInstance> = registry
        .alive_entities()
        .iter()
        .filter_map(|&idx| {
            let transform = registry.transforms[idx].as_ref()?;
            let mesh_ref = registry.mesh_refs[idx].as_ref()?;

            let (alpha, scale) = match registry.explosions[idx].as_ref() {
                Some(explosion) => (explosion.fade().max(0.0), explosion.scale()),
                None => (1.0, 1.0),
            };

            Some(DrawInstance {
                position: transform.position,
                rotation: transform.rotation,
                mesh: mesh_ref.mesh,
                alpha,
                scale,
            })
        })
        .collect();

    FrameSnapshot {
        time,
        draws,
        events,
    }
}
