//! Session configuration.
//!
//! Every section has a `Default` built from [`crate::constants`], and every
//! struct is `#[serde(default)]`, so a JSON document only needs to name the
//! values it overrides.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::arena::ArenaBounds;
use crate::constants::*;
use crate::enums::{Delivery, EnemyArchetype};
use crate::error::ConfigError;

/// Complete configuration for one simulation session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed + same inputs = same session.
    pub seed: u64,
    pub arena: ArenaBounds,
    pub player: PlayerConfig,
    pub weapon: WeaponConfig,
    pub projectile: ProjectileConfig,
    pub contact: ContactConfig,
    pub spawn: SpawnConfig,
    /// Waves in the order they are fought.
    pub waves: Vec<Wave>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            arena: ArenaBounds::default(),
            player: PlayerConfig::default(),
            weapon: WeaponConfig::default(),
            projectile: ProjectileConfig::default(),
            contact: ContactConfig::default(),
            spawn: SpawnConfig::default(),
            waves: default_waves(),
        }
    }
}

impl SimConfig {
    /// Parse a JSON document and validate the result.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that cannot produce a playable round.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let arena = &self.arena;
        if arena.limit_x() <= 0.0 || arena.limit_z() <= 0.0 {
            return Err(ConfigError::ArenaTooSmall {
                size_x: arena.size_x,
                size_z: arena.size_z,
                offset: arena.offset,
            });
        }

        let spawn = &self.spawn;
        if spawn.safe_zone < 0 || spawn.bound < spawn.safe_zone {
            return Err(ConfigError::SpawnAreaInvalid {
                bound: spawn.bound,
                safe_zone: spawn.safe_zone,
            });
        }
        let limit = arena.limit_x().min(arena.limit_z());
        if spawn.bound as f32 > limit {
            return Err(ConfigError::SpawnOutsideArena {
                bound: spawn.bound,
                limit,
            });
        }

        if spawn.max_attempts == 0 {
            return Err(ConfigError::NoSpawnAttempts);
        }

        if self.weapon.magazine == 0 {
            return Err(ConfigError::EmptyMagazine);
        }

        if self.waves.is_empty() {
            return Err(ConfigError::NoWaves);
        }
        let capacity = spawn.capacity();
        for (index, wave) in self.waves.iter().enumerate() {
            if u64::from(wave.count) > capacity {
                return Err(ConfigError::WaveTooLarge {
                    wave: index as u32,
                    count: wave.count,
                    capacity,
                });
            }
        }

        Ok(())
    }
}

/// Player start state and movement tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub spawn: Vec3,
    pub max_health: f32,
    pub max_stamina: f32,
    /// Units per second.
    pub movement_speed: f32,
    /// Speed multiplier while sprinting.
    pub sprint_factor: f32,
    /// Radians per unit of look delta.
    pub rotation_speed: f32,
    pub stamina_drain_per_sec: f32,
    pub stamina_regen_per_sec: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            spawn: Vec3::from_array(PLAYER_SPAWN),
            max_health: PLAYER_MAX_HEALTH,
            max_stamina: PLAYER_MAX_STAMINA,
            movement_speed: PLAYER_MOVEMENT_SPEED,
            sprint_factor: PLAYER_SPRINT_FACTOR,
            rotation_speed: PLAYER_ROTATION_SPEED,
            stamina_drain_per_sec: STAMINA_DRAIN_PER_SEC,
            stamina_regen_per_sec: STAMINA_REGEN_PER_SEC,
        }
    }
}

/// Weapon ammunition and timing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponConfig {
    /// Minimum ticks between discharges.
    pub shot_rate_ticks: u32,
    /// Ticks a reload takes.
    pub reload_ticks: u32,
    pub magazine: u32,
    /// Rounds loaded at round start.
    pub bullets: u32,
    /// Reserve rounds at round start.
    pub reserve: u32,
    /// Automatic weapons keep firing while the trigger is held.
    pub automatic: bool,
    pub delivery: Delivery,
    pub hitscan_damage: f32,
    pub hitscan_range: f32,
}

impl Default for WeaponConfig {
    fn default() -> Self {
        Self {
            shot_rate_ticks: WEAPON_SHOT_RATE_TICKS,
            reload_ticks: WEAPON_RELOAD_TICKS,
            magazine: WEAPON_MAGAZINE,
            bullets: WEAPON_MAGAZINE,
            reserve: WEAPON_RESERVE,
            automatic: false,
            delivery: Delivery::default(),
            hitscan_damage: HITSCAN_DAMAGE,
            hitscan_range: HITSCAN_RANGE,
        }
    }
}

/// Projectile ballistics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileConfig {
    pub speed: f32,
    pub max_range: f32,
    pub damage: f32,
    pub radius: f32,
    /// Distance in front of the eye at which projectiles appear.
    pub muzzle_offset: f32,
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        Self {
            speed: PROJECTILE_SPEED,
            max_range: PROJECTILE_MAX_RANGE,
            damage: PROJECTILE_DAMAGE,
            radius: PROJECTILE_RADIUS,
            muzzle_offset: PROJECTILE_MUZZLE_OFFSET,
        }
    }
}

/// Enemy-versus-player contact resolution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Player-enemy distance at or below which contact damage applies.
    pub radius: f32,
    /// Minimum ticks between two hits from the same enemy.
    pub attack_interval_ticks: u32,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            radius: ENEMY_CONTACT_RADIUS,
            attack_interval_ticks: ENEMY_ATTACK_INTERVAL_TICKS,
        }
    }
}

/// Integer spawn grid around the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    /// Coordinates are drawn from `[-bound, bound]` on X and Z.
    pub bound: i32,
    /// Draws with `|x| < safe_zone` and `|z| < safe_zone` are rejected.
    pub safe_zone: i32,
    /// Rejection-sampling attempts per spawn point.
    pub max_attempts: u32,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            bound: SPAWN_BOUND,
            safe_zone: SPAWN_SAFE_ZONE,
            max_attempts: MAX_SPAWN_ATTEMPTS,
        }
    }
}

impl SpawnConfig {
    /// Number of distinct grid points outside the safe zone.
    pub fn capacity(&self) -> u64 {
        let side = 2 * u64::from(self.bound.max(0).unsigned_abs()) + 1;
        let safe_side = (2 * i64::from(self.safe_zone) - 1).max(0) as u64;
        (side * side).saturating_sub(safe_side * safe_side)
    }
}

/// One batch of enemies of a single archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wave {
    pub archetype: EnemyArchetype,
    pub count: u32,
}

impl Wave {
    pub fn new(archetype: EnemyArchetype, count: u32) -> Self {
        Self { archetype, count }
    }
}

/// Five escalating waves.
pub fn default_waves() -> Vec<Wave> {
    vec![
        Wave::new(EnemyArchetype::Walker, 2),
        Wave::new(EnemyArchetype::Walker, 4),
        Wave::new(EnemyArchetype::Runner, 3),
        Wave::new(EnemyArchetype::Brute, 2),
        Wave::new(EnemyArchetype::Walker, 8),
    ]
}
