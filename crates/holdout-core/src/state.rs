//! Game state snapshot: the complete visible state handed to the renderer
//! and UI after each tick. Read-only for the consumer.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::geometry::Sphere;
use crate::types::{SimTime, Transform};

/// Complete game state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub player: PlayerView,
    pub weapon: WeaponView,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    pub walls: Vec<Transform>,
    pub wave: WaveView,
    pub events: Vec<GameEvent>,
}

/// Player transform and vitals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    /// Eye position and view orientation; the camera copies this.
    pub transform: Transform,
    pub health: f32,
    pub stamina: f32,
    pub kills: u32,
}

/// Ammunition readout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeaponView {
    pub bullets: u32,
    pub magazine: u32,
    pub reserve: u32,
    pub state: WeaponState,
}

/// A live enemy for drawing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub archetype: EnemyArchetype,
    pub transform: Transform,
    pub collider: Sphere,
    pub health: f32,
    pub state: AgentState,
    pub player_visible: bool,
}

/// A live projectile for drawing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u32,
    pub transform: Transform,
    /// Distance covered since spawn.
    pub traveled: f32,
}

/// Wave progress readout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaveView {
    /// Zero-based index of the current wave.
    pub index: u32,
    pub total: u32,
    /// Enemies of the current wave still alive (including pending reap).
    pub enemies_left: u32,
}
