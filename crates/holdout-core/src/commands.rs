//! Inputs sent from the host to the simulation.
//!
//! `InputSnapshot` is the per-frame intent bundle, supplied already
//! debounced by the host's input polling. `SessionCommand`s are queued and
//! processed at the next tick boundary.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Everything the player asked for during one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputSnapshot {
    /// Movement intent in view space: `x` = strafe right, `y` = forward.
    /// Each component is expected in `[-1, 1]`.
    pub movement: Vec2,
    /// Raw look delta: `x` = horizontal (yaw), `y` = vertical (pitch).
    pub look_delta: Vec2,
    /// Trigger is held.
    pub fire: bool,
    /// Reload requested.
    pub reload: bool,
    /// Sprint modifier is held.
    pub sprint: bool,
}

impl InputSnapshot {
    /// No intent at all.
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn firing() -> Self {
        Self {
            fire: true,
            ..Default::default()
        }
    }

    pub fn is_moving(&self) -> bool {
        self.movement != Vec2::ZERO
    }
}

/// Session-level control commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SessionCommand {
    /// Start the round from the lobby.
    StartRound,
    /// Pause an active round.
    Pause,
    /// Resume a paused round.
    Resume,
    /// Tear down the current round and start a fresh one.
    Restart,
}
