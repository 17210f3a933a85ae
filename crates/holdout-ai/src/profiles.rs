//! Archetype-specific behavioural profiles.
//!
//! Consolidates per-archetype parameters for spawning and the agent FSM.

use holdout_core::enums::EnemyArchetype;

/// Behavioural profile for an enemy archetype.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyProfile {
    pub health: f32,
    /// Pursuit speed (units/second).
    pub movement_speed: f32,
    /// Contact damage per attack.
    pub damage: f32,
    /// Full field-of-view angle (radians).
    pub field_of_view: f32,
    /// Maximum sight distance (units).
    pub sight_range: f32,
    pub collider_radius: f32,
    /// Height of the hit sphere centre above the agent's feet.
    pub collider_offset: f32,
    /// Render scale.
    pub scale: f32,
}

/// Get the behavioural profile for a given archetype.
pub fn get_profile(archetype: EnemyArchetype) -> EnemyProfile {
    use holdout_core::constants::*;

    match archetype {
        EnemyArchetype::Walker => EnemyProfile {
            health: WALKER_HEALTH,
            movement_speed: WALKER_SPEED,
            damage: WALKER_DAMAGE,
            field_of_view: WALKER_FIELD_OF_VIEW,
            sight_range: WALKER_SIGHT_RANGE,
            collider_radius: WALKER_COLLIDER_RADIUS,
            collider_offset: WALKER_COLLIDER_OFFSET,
            scale: 1.0,
        },
        EnemyArchetype::Runner => EnemyProfile {
            health: WALKER_HEALTH * 0.6,
            movement_speed: WALKER_SPEED * 1.8,
            damage: WALKER_DAMAGE * 0.5,
            field_of_view: WALKER_FIELD_OF_VIEW * 4.0 / 3.0,
            sight_range: WALKER_SIGHT_RANGE * 1.25,
            collider_radius: 0.4,
            collider_offset: 1.7,
            scale: 0.9,
        },
        EnemyArchetype::Brute => EnemyProfile {
            health: WALKER_HEALTH * 2.5,
            movement_speed: WALKER_SPEED * 0.65,
            damage: WALKER_DAMAGE * 1.75,
            field_of_view: WALKER_FIELD_OF_VIEW * 0.8,
            sight_range: WALKER_SIGHT_RANGE * 0.75,
            collider_radius: 0.8,
            collider_offset: 2.1,
            scale: 1.4,
        },
    }
}
