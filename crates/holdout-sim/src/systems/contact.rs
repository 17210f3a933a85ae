//! Enemy-versus-player contact damage.
//!
//! Uses a fixed horizontal proximity radius rather than the enemy's hit
//! sphere: what can be shot and what can bite are tuned separately.

use hecs::World;

use holdout_core::components::Agent;
use holdout_core::config::ContactConfig;
use holdout_core::enums::AgentState;
use holdout_core::events::GameEvent;
use holdout_core::geometry::horizontal_distance;
use holdout_core::types::Transform;

use crate::player::Player;

/// Let every living enemy in reach attack the player, at most once per
/// attack interval.
pub fn run(
    world: &mut World,
    player: &mut Player,
    contact: &ContactConfig,
    events: &mut Vec<GameEvent>,
) {
    for (_entity, (agent, transform)) in world.query_mut::<(&mut Agent, &Transform)>() {
        if agent.state == AgentState::Dead {
            continue;
        }

        agent.attack_cooldown = agent.attack_cooldown.saturating_sub(1);
        if agent.attack_cooldown > 0 {
            continue;
        }

        if horizontal_distance(player.position(), transform.position) <= contact.radius {
            player.take_damage(agent.damage);
            agent.attack_cooldown = contact.attack_interval_ticks;
            events.push(GameEvent::PlayerDamaged {
                amount: agent.damage,
                health: player.vitality().health(),
            });
        }
    }
}
