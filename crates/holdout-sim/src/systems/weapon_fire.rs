//! Weapon intent processing: reload and fire requests, shot delivery and
//! the once-per-tick weapon timer update.

use hecs::{Entity, World};

use holdout_core::commands::InputSnapshot;
use holdout_core::components::{Agent, Collider};
use holdout_core::config::{ProjectileConfig, WeaponConfig};
use holdout_core::enums::{AgentState, Delivery};
use holdout_core::events::GameEvent;
use holdout_core::geometry::{Ray, Sphere};

use crate::player::Player;
use crate::systems::damage::apply_enemy_hit;
use crate::systems::projectiles::first_hit;
use crate::weapon::Weapon;
use crate::world_setup;

/// Tuning the fire system reads from the session config.
pub struct FireParams<'a> {
    pub weapon: &'a WeaponConfig,
    pub projectile: &'a ProjectileConfig,
}

/// Process this tick's weapon intents, then advance the weapon timers.
///
/// `trigger_was_held` is last tick's fire intent; a dry-fire click is only
/// reported when the trigger is newly pulled.
pub fn run(
    world: &mut World,
    weapon: &mut Weapon,
    player: &Player,
    input: &InputSnapshot,
    trigger_was_held: bool,
    params: &FireParams,
    next_projectile_id: &mut u32,
    events: &mut Vec<GameEvent>,
) {
    if input.reload && weapon.reload() {
        events.push(GameEvent::ReloadStarted {
            bullets: weapon.bullets(),
            reserve: weapon.reserve(),
        });
    }

    if input.fire {
        let was_reloading = weapon.is_reloading();
        if weapon.fire() {
            events.push(GameEvent::ShotFired {
                bullets_left: weapon.bullets(),
            });
            deliver_shot(world, weapon.delivery(), player, params, next_projectile_id, events);
        } else if !was_reloading && weapon.is_reloading() {
            // Empty magazine: the trigger pull started a reload. Only a
            // fresh pull clicks.
            if !trigger_was_held {
                events.push(GameEvent::DryFire);
            }
            events.push(GameEvent::ReloadStarted {
                bullets: weapon.bullets(),
                reserve: weapon.reserve(),
            });
        } else if !trigger_was_held && weapon.bullets() == 0 && !weapon.is_reloading() {
            events.push(GameEvent::DryFire);
        }
    } else {
        weapon.release_trigger();
    }

    if weapon.update() {
        events.push(GameEvent::ReloadFinished {
            bullets: weapon.bullets(),
        });
    }
}

fn deliver_shot(
    world: &mut World,
    delivery: Delivery,
    player: &Player,
    params: &FireParams,
    next_projectile_id: &mut u32,
    events: &mut Vec<GameEvent>,
) {
    match delivery {
        Delivery::Projectile => {
            let id = *next_projectile_id;
            *next_projectile_id += 1;
            world_setup::spawn_projectile(
                world,
                id,
                player.position(),
                player.orientation(),
                params.projectile,
            );
        }
        Delivery::Hitscan => {
            let ray = Ray {
                origin: player.position(),
                dir: player.forward(),
            };
            hitscan(
                world,
                &ray,
                params.weapon.hitscan_damage,
                params.weapon.hitscan_range,
                events,
            );
        }
    }
}

/// Instant shot along `ray`: the nearest living enemy whose hit sphere the
/// ray enters within `range` takes `damage`. Returns the enemy struck.
pub fn hitscan(
    world: &mut World,
    ray: &Ray,
    damage: f32,
    range: f32,
    events: &mut Vec<GameEvent>,
) -> Option<Entity> {
    let targets: Vec<(Entity, Sphere)> = world
        .query::<(&Agent, &Collider)>()
        .iter()
        .filter(|(_, (agent, _))| agent.state != AgentState::Dead)
        .map(|(entity, (_, collider))| (entity, collider.sphere))
        .collect();

    let (target, _) = first_hit(ray, range, 0.0, &targets)?;
    apply_enemy_hit(world, target, damage, events);
    Some(target)
}
