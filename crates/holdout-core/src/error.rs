//! Error types.
//!
//! Weapon and movement rejections are policy decisions reported as `bool`;
//! the variants here are configuration faults that must be surfaced.

use thiserror::Error;

/// A `SimConfig` that cannot produce a playable round.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("arena half-extents must exceed the wall offset (size {size_x}x{size_z}, offset {offset})")]
    ArenaTooSmall { size_x: f32, size_z: f32, offset: f32 },

    #[error("spawn bound {bound} must be non-negative and at least the safe zone {safe_zone}")]
    SpawnAreaInvalid { bound: i32, safe_zone: i32 },

    #[error("spawn bound {bound} reaches outside the arena (limit {limit})")]
    SpawnOutsideArena { bound: i32, limit: f32 },

    #[error("spawn placement needs at least one attempt per point")]
    NoSpawnAttempts,

    #[error("weapon magazine capacity must be at least 1")]
    EmptyMagazine,

    #[error("wave list is empty")]
    NoWaves,

    #[error("wave {wave} spawns {count} enemies but only {capacity} spawn points exist")]
    WaveTooLarge { wave: u32, count: u32, capacity: u64 },
}

/// Spawn placement failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SpawnError {
    #[error("no free spawn point found after {attempts} attempts ({used} of {capacity} in use)")]
    PoolExhausted {
        attempts: u32,
        used: usize,
        capacity: u64,
    },
}

/// Any fault that stops the simulation from advancing.
#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Spawn(#[from] SpawnError),
}
