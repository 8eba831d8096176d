//! Enemy AI bridge system.
//!
//! Gathers plain-data contexts for every enemy, runs the FSM from
//! skirmish-ai, then applies the buffered updates. Only the line-of-sight
//! raycast touches the external physics engine.

use skirmish_ai::fsm::{evaluate, AiContext, AiUpdate};
use skirmish_core::components::AiState;
use skirmish_core::events::GameEvent;
use skirmish_core::physics::PhysicsEngine;
use skirmish_core::types::EntityId;

use crate::ecs::Registry;

/// Run one frame of behavior for every live enemy.
///
/// `player` is the tracked player entity; `None` (or a despawned id) fails
/// safe — enemies keep patrolling and never detect. Enemies without a
/// transform, or whose health has run out, are skipped.
pub fn run(
    registry: &mut Registry,
    physics: &dyn PhysicsEngine,
    player: Option<EntityId>,
    dt: f32,
    events: &mut Vec<GameEvent>,
) {
    let player_position = player
        .filter(|&id| registry.is_alive(id))
        .and_then(|id| registry.transforms[id.index()].as_ref())
        .map(|t| t.position);

    // Evaluate into a buffer, then write back.
    let mut updates: Vec<(usize, AiUpdate)> = Vec::new();

    for idx in registry.alive_entities() {
        let Some(ai) = registry.ais[idx].as_ref() else {
            continue;
        };
        let Some(transform) = registry.transforms[idx].as_ref() else {
            continue;
        };
        if matches!(registry.healths[idx], Some(h) if h.current <= 0) {
            continue;
        }

        let ctx = AiContext {
            ai,
            position: transform.position,
            yaw_degrees: transform.rotation.y,
            player_id: player,
            player_position,
            dt,
        };
        let update = evaluate(&ctx, |from, to| physics.raycast(from, to));
        updates.push((idx, update));
    }

    for (idx, update) in updates {
        let entity = EntityId::new(idx as u32);
        if update.state_changed {
            log::debug!("{entity} entered {:?}", update.state);
            match update.state {
                AiState::Detect => events.push(GameEvent::EnemyAlerted { entity }),
                AiState::Combat => events.push(GameEvent::EnemyEngaged { entity }),
                AiState::Patrol => {}
            }
        }

        if let Some(transform) = registry.transforms[idx].as_mut() {
            transform.position = update.position;
            transform.rotation.y = update.yaw_degrees;
        }
        if let Some(ai) = registry.ais[idx].as_mut() {
            ai.state = update.state;
            ai.current_waypoint = update.current_waypoint;
            ai.time_since_detection = update.time_since_detection;
            ai.target = update.target;
        }
    }
}
