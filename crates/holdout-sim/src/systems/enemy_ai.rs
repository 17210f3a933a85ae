//! Enemy AI system: runs the agent FSM for every enemy each tick.
//!
//! Calls the FSM from holdout-ai to compute perception, state transitions
//! and steering, then writes the result back to the ECS components.

use glam::{Quat, Vec3};
use hecs::World;

use holdout_core::components::{Agent, Collider, Perception};
use holdout_core::types::Transform;

use holdout_ai::fsm::{evaluate, AgentContext};

/// Run the enemy AI against this tick's player position.
pub fn run(world: &mut World, player_position: Vec3, dt: f32) {
    for (_entity, (agent, perception, transform, collider)) in
        world.query_mut::<(&mut Agent, &Perception, &mut Transform, &mut Collider)>()
    {
        let ctx = AgentContext {
            state: agent.state,
            health: agent.health,
            position: transform.position,
            yaw: agent.yaw,
            perception: *perception,
            movement_speed: agent.movement_speed,
            player_position,
            dt,
        };

        let update = evaluate(&ctx);
        if update.state_changed {
            log::debug!(
                "Enemy {} {:?} -> {:?}",
                agent.id,
                agent.state,
                update.new_state
            );
        }

        agent.state = update.new_state;
        agent.yaw = update.new_yaw;
        agent.player_visible = update.player_visible;
        transform.position = update.new_position;
        transform.rotation = Quat::from_rotation_y(update.new_yaw);
        // Hit sphere stays at a fixed height over the feet.
        collider.sphere.center = transform.position + Vec3::Y * collider.vertical_offset;
    }
}
