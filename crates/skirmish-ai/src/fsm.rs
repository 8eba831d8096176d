//! Enemy finite state machine: patrol -> detect -> combat.
//!
//! `evaluate` is a pure function over plain data; it never touches the
//! registry. The caller supplies a line-of-sight predicate, which is only
//! invoked once range and field-of-view checks have already passed.

use glam::Vec3;

use skirmish_core::components::{Ai, AiState};
use skirmish_core::constants::{DEFAULT_FORWARD, EYE_HEIGHT, WAYPOINT_PROXIMITY};
use skirmish_core::types::EntityId;

/// Input to the FSM for a single enemy.
pub struct AiContext<'a> {
    pub ai: &'a Ai,
    /// Enemy position at the start of the frame.
    pub position: Vec3,
    /// Enemy yaw in degrees at the start of the frame.
    pub yaw_degrees: f32,
    /// Tracked player entity; `None` fails safe (never detects).
    pub player_id: Option<EntityId>,
    /// Player position this frame, if the player exists and has a transform.
    pub player_position: Option<Vec3>,
    pub dt: f32,
}

/// Output of the FSM: the enemy's next pose and bookkeeping.
pub struct AiUpdate {
    pub state: AiState,
    pub position: Vec3,
    pub yaw_degrees: f32,
    pub current_waypoint: usize,
    pub time_since_detection: f32,
    pub target: Option<EntityId>,
    pub state_changed: bool,
}

/// Evaluate one frame of behavior for one enemy.
pub fn evaluate<F>(ctx: &AiContext, los: F) -> AiUpdate
where
    F: Fn(Vec3, Vec3) -> bool,
{
    let mut update = AiUpdate {
        state: ctx.ai.state,
        position: ctx.position,
        yaw_degrees: ctx.yaw_degrees,
        current_waypoint: ctx.ai.current_waypoint,
        time_since_detection: ctx.ai.time_since_detection,
        target: ctx.ai.target,
        state_changed: false,
    };

    match ctx.ai.state {
        AiState::Patrol => {
            patrol_step(ctx, &mut update);
            if perceives_player(ctx, update.position, update.yaw_degrees, &los) {
                update.state = AiState::Detect;
                update.state_changed = true;
                update.time_since_detection = 0.0;
                update.target = ctx.player_id;
            }
        }
        AiState::Detect => {
            update.time_since_detection += ctx.dt;
            if update.time_since_detection >= ctx.ai.detection_time {
                update.state = AiState::Combat;
                update.state_changed = true;
            } else if perceives_player(ctx, update.position, update.yaw_degrees, &los) {
                // Re-sighting while dwelling refreshes the target but does
                // not reset the dwell clock.
                update.target = ctx.player_id;
            }
        }
        AiState::Combat => {
            combat_step(ctx, &mut update);
        }
    }

    update
}

/// Walk toward the current waypoint, cycling the route on arrival.
fn patrol_step(ctx: &AiContext, update: &mut AiUpdate) {
    let waypoints = &ctx.ai.waypoints;
    if waypoints.is_empty() {
        return;
    }
    if update.current_waypoint >= waypoints.len() {
        update.current_waypoint = 0;
    }

    let mut direction = waypoints[update.current_waypoint] - update.position;
    if direction.length() < WAYPOINT_PROXIMITY {
        update.current_waypoint = (update.current_waypoint + 1) % waypoints.len();
        direction = waypoints[update.current_waypoint] - update.position;
    }

    let Some(dir) = direction.try_normalize() else {
        return;
    };
    update.position += dir * ctx.ai.patrol_speed * ctx.dt;
    update.yaw_degrees = dir.x.atan2(dir.z).to_degrees();
}

/// Close horizontally on the target while outside combat range; always face it.
fn combat_step(ctx: &AiContext, update: &mut AiUpdate) {
    let Some(player) = ctx.player_position else {
        return;
    };

    let to_target = player - update.position;
    if to_target.length() > ctx.ai.combat_range {
        let dir = to_target.try_normalize().unwrap_or(DEFAULT_FORWARD);
        update.position.x += dir.x * ctx.ai.combat_speed * ctx.dt;
        update.position.z += dir.z * ctx.ai.combat_speed * ctx.dt;
    }
    update.yaw_degrees = to_target.x.atan2(to_target.z).to_degrees();
}

/// Range, then field of view, then line of sight. The ray runs eye-to-eye,
/// one unit above each transform position.
fn perceives_player<F>(ctx: &AiContext, position: Vec3, yaw_degrees: f32, los: &F) -> bool
where
    F: Fn(Vec3, Vec3) -> bool,
{
    let Some(player) = ctx.player_position else {
        return false;
    };

    let to_player = player - position;
    if to_player.length() > ctx.ai.detection_range {
        return false;
    }

    let yaw = yaw_degrees.to_radians();
    let forward = Vec3::new(yaw.sin(), 0.0, yaw.cos());
    let toward = to_player.try_normalize().unwrap_or(DEFAULT_FORWARD);
    let angle = forward.dot(toward).clamp(-1.0, 1.0).acos().to_degrees();
    if angle > ctx.ai.field_of_view / 2.0 {
        return false;
    }

    let eye = Vec3::Y * EYE_HEIGHT;
    los(position + eye, player + eye)
}
