//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only and never modifies the world.

use hecs::World;

use holdout_core::arena::ArenaBounds;
use holdout_core::components::{Agent, Collider, Projectile};
use holdout_core::enums::GamePhase;
use holdout_core::events::GameEvent;
use holdout_core::geometry::distance_3d;
use holdout_core::state::*;
use holdout_core::types::{SimTime, Transform};

use crate::player::Player;
use crate::systems::wave_director::WaveDirector;
use crate::weapon::Weapon;

/// Everything outside the world the snapshot reads from.
pub struct SnapshotSources<'a> {
    pub time: SimTime,
    pub phase: GamePhase,
    pub player: &'a Player,
    pub weapon: &'a Weapon,
    pub director: &'a WaveDirector,
    pub arena: &'a ArenaBounds,
}

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    sources: &SnapshotSources,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: sources.time,
        phase: sources.phase,
        player: build_player(sources.player),
        weapon: build_weapon(sources.weapon),
        enemies: build_enemies(world),
        projectiles: build_projectiles(world),
        walls: sources.arena.wall_transforms(),
        wave: WaveView {
            index: sources.director.current_wave(),
            total: sources.director.total_waves(),
            enemies_left: sources.director.enemies_left(),
        },
        events,
    }
}

fn build_player(player: &Player) -> PlayerView {
    let vitality = player.vitality();
    PlayerView {
        transform: player.transform(),
        // Health may run negative internally; the readout floors at zero.
        health: vitality.health().max(0.0),
        stamina: vitality.stamina(),
        kills: player.kills(),
    }
}

fn build_weapon(weapon: &Weapon) -> WeaponView {
    WeaponView {
        bullets: weapon.bullets(),
        magazine: weapon.magazine(),
        reserve: weapon.reserve(),
        state: weapon.state(),
    }
}

/// Enemies sorted by id so consumers get a stable order.
fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Agent, &Transform, &Collider)>()
        .iter()
        .map(|(_, (agent, transform, collider))| EnemyView {
            id: agent.id,
            archetype: agent.archetype,
            transform: *transform,
            collider: collider.sphere,
            health: agent.health,
            state: agent.state,
            player_visible: agent.player_visible,
        })
        .collect();

    enemies.sort_by_key(|e| e.id);
    enemies
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Projectile, &Transform)>()
        .iter()
        .map(|(_, (projectile, transform))| ProjectileView {
            id: projectile.id,
            transform: *transform,
            traveled: distance_3d(projectile.origin, transform.position),
        })
        .collect();

    projectiles.sort_by_key(|p| p.id);
    projectiles
}
