//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

/// One-shot notifications produced during a tick, drained into the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A round started (fresh player, first wave about to spawn).
    RoundStarted,
    /// The weapon discharged.
    ShotFired { bullets_left: u32 },
    /// Trigger pulled on an empty magazine.
    DryFire,
    ReloadStarted { bullets: u32, reserve: u32 },
    ReloadFinished { bullets: u32 },
    EnemyHit { enemy_id: u32, damage: f32, health: f32 },
    EnemyKilled { enemy_id: u32 },
    PlayerDamaged { amount: f32, health: f32 },
    PlayerDied,
    WaveStarted { wave: u32, enemies: u32 },
    AllWavesCleared,
}
