//! Agent behaviour finite state machine.
//!
//! Pure functions that compute state transitions and steering for enemy
//! agents based on their perception and the player's position.
//! No ECS dependency; operates on plain data.

use glam::Vec3;

use holdout_core::components::Perception;
use holdout_core::enums::AgentState;
use holdout_core::geometry::horizontal_distance;

use crate::perception::{is_player_in_sight, yaw_towards};

/// Input to the agent FSM for a single entity.
pub struct AgentContext {
    pub state: AgentState,
    pub health: f32,
    pub position: Vec3,
    pub yaw: f32,
    pub perception: Perception,
    pub movement_speed: f32,
    /// Player position for this tick (already moved by this tick's input).
    pub player_position: Vec3,
    /// Seconds covered by this tick.
    pub dt: f32,
}

/// Output from the agent FSM.
pub struct AgentUpdate {
    pub new_state: AgentState,
    pub new_position: Vec3,
    pub new_yaw: f32,
    /// Raw perception result for this tick.
    pub player_visible: bool,
    pub state_changed: bool,
}

/// Evaluate the FSM for one agent. Returns the updated state and pose.
pub fn evaluate(ctx: &AgentContext) -> AgentUpdate {
    let no_change = AgentUpdate {
        new_state: ctx.state,
        new_position: ctx.position,
        new_yaw: ctx.yaw,
        player_visible: false,
        state_changed: false,
    };

    match ctx.state {
        AgentState::Dead => no_change,
        _ if ctx.health <= 0.0 => AgentUpdate {
            new_state: AgentState::Dead,
            state_changed: true,
            ..no_change
        },
        AgentState::Idle | AgentState::Pursuing => evaluate_alive(ctx),
    }
}

fn evaluate_alive(ctx: &AgentContext) -> AgentUpdate {
    let visible = is_player_in_sight(ctx.position, ctx.yaw, &ctx.perception, ctx.player_position);

    // Detection needs the cone; once pursuing, the agent keeps the player
    // until they leave sight range.
    let tracking = match ctx.state {
        AgentState::Pursuing => {
            horizontal_distance(ctx.position, ctx.player_position) < ctx.perception.sight_range
        }
        _ => visible,
    };

    if !tracking {
        return AgentUpdate {
            new_state: AgentState::Idle,
            new_position: ctx.position,
            new_yaw: ctx.yaw,
            player_visible: visible,
            state_changed: ctx.state != AgentState::Idle,
        };
    }

    AgentUpdate {
        new_state: AgentState::Pursuing,
        new_position: step_towards(ctx.position, ctx.player_position, ctx.movement_speed * ctx.dt),
        new_yaw: yaw_towards(ctx.position, ctx.player_position, ctx.yaw),
        player_visible: visible,
        state_changed: ctx.state != AgentState::Pursuing,
    }
}

/// Move from `position` toward the horizontal position of `target` by at
/// most `max_step`, never overshooting. The vertical coordinate is kept.
pub fn step_towards(position: Vec3, target: Vec3, max_step: f32) -> Vec3 {
    let flat_target = Vec3::new(target.x, position.y, target.z);
    let offset = flat_target - position;
    let distance = offset.length();
    if distance <= max_step || distance == 0.0 {
        return flat_target;
    }
    position + offset / distance * max_step
}
