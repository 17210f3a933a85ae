//! Cleanup system: reaps dead enemies and spent projectiles.
//!
//! Earlier systems only queue handles; nothing is despawned while a query
//! is iterating the world.

use hecs::{Entity, World};

use holdout_core::components::Agent;
use holdout_core::enums::AgentState;

/// Despawn every queued entity plus every enemy flagged dead.
/// Returns the number of enemies removed.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) -> u32 {
    for (entity, agent) in world.query_mut::<&Agent>() {
        if agent.state == AgentState::Dead {
            despawn_buffer.push(entity);
        }
    }

    let mut enemies_reaped = 0;
    for entity in despawn_buffer.drain(..) {
        let is_enemy = world.get::<&Agent>(entity).is_ok();
        match world.despawn(entity) {
            Ok(()) => {
                if is_enemy {
                    enemies_reaped += 1;
                }
            }
            Err(_) => log::warn!("Despawn of stale handle {entity:?} skipped"),
        }
    }
    enemies_reaped
}
