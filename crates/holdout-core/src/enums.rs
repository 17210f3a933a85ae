//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Session phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Round not started yet.
    #[default]
    Lobby,
    Active,
    Paused,
    /// Player health reached zero.
    Lost,
    /// Every wave has been cleared.
    Won,
    /// A wave could not be placed. Only `Restart` leaves this phase.
    Faulted,
}

impl GamePhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::Lost | GamePhase::Won | GamePhase::Faulted)
    }
}

/// Enemy agent behaviour state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentState {
    /// Player not detected; the agent stands still.
    #[default]
    Idle,
    /// Player detected; the agent steers toward them.
    Pursuing,
    /// Health depleted. Terminal, pending reap.
    Dead,
}

/// Enemy archetype category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyArchetype {
    /// Slow shambler, the baseline zombie.
    #[default]
    Walker,
    /// Fast and fragile, wide field of view.
    Runner,
    /// Slow, heavily armoured, hits hard.
    Brute,
}

/// How a weapon delivers its damage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Delivery {
    /// Spawns a travelling projectile.
    #[default]
    Projectile,
    /// Instant ray from the eye along the view direction.
    Hitscan,
}

/// Weapon firing state. Each variant excludes the others, so a weapon can
/// never be both reloading and holding a discharged trigger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeaponState {
    /// Eligible to fire once the shot-rate counter allows it.
    #[default]
    Ready,
    /// Semi-automatic weapon discharged; the trigger must be released
    /// before the next shot.
    Cooldown,
    /// Magazine being refilled.
    Reloading { elapsed_ticks: u32 },
}
