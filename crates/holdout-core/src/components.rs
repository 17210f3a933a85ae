//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems and in holdout-ai, not in components.
//! [`Transform`](crate::types::Transform) doubles as the shared spatial
//! component read by the renderer.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::{AgentState, EnemyArchetype};
use crate::geometry::Sphere;

/// Gameplay state of an enemy agent.
///
/// `id` is the handle the rendering side keys its model instance on; the
/// agent never owns any drawable data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub id: u32,
    pub archetype: EnemyArchetype,
    pub state: AgentState,
    pub health: f32,
    /// Units per second while pursuing.
    pub movement_speed: f32,
    /// Contact damage dealt to the player.
    pub damage: f32,
    /// Heading around the vertical axis (radians, 0 = +Z).
    pub yaw: f32,
    /// Ticks remaining before this agent may hit the player again.
    pub attack_cooldown: u32,
    /// Last perception result. Informational only, gameplay reads `state`.
    pub player_visible: bool,
}

/// Perception cone parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Perception {
    /// Full field-of-view angle (radians).
    pub field_of_view: f32,
    /// Maximum sight distance (units).
    pub sight_range: f32,
}

/// Hit sphere that tracks the owner's position at a fixed height.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Collider {
    pub sphere: Sphere,
    /// Height of the sphere centre above the owner's position.
    pub vertical_offset: f32,
}

/// A travelling projectile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    /// Point the projectile was spawned at (travel is measured from here).
    pub origin: Vec3,
    /// Units per second along the local forward axis.
    pub speed: f32,
    pub damage: f32,
    pub max_range: f32,
    pub radius: f32,
}

