//! Damage application against enemy entities.

use hecs::{Entity, World};

use holdout_core::components::Agent;
use holdout_core::events::GameEvent;

use holdout_ai::combat::{hit, HitOutcome};

/// Apply `damage` to the enemy behind `entity` and emit the matching events.
/// A handle that no longer resolves is logged and ignored.
pub fn apply_enemy_hit(
    world: &mut World,
    entity: Entity,
    damage: f32,
    events: &mut Vec<GameEvent>,
) -> HitOutcome {
    let Ok(mut agent) = world.get::<&mut Agent>(entity) else {
        log::warn!("Hit resolved against stale enemy handle {entity:?}");
        return HitOutcome::Ignored;
    };

    let outcome = hit(&mut agent, damage);
    match outcome {
        HitOutcome::Ignored => {}
        HitOutcome::Wounded => events.push(GameEvent::EnemyHit {
            enemy_id: agent.id,
            damage,
            health: agent.health,
        }),
        HitOutcome::Killed => {
            events.push(GameEvent::EnemyHit {
                enemy_id: agent.id,
                damage,
                health: agent.health,
            });
            events.push(GameEvent::EnemyKilled { enemy_id: agent.id });
        }
    }
    outcome
}
