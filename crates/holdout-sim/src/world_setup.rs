//! Entity spawn factories for the simulation world.
//!
//! Creates enemy and projectile entities with the appropriate component
//! bundles. Only the engine calls these; no other system inserts entities.

use glam::{Quat, Vec3};
use hecs::World;

use holdout_core::components::{Agent, Collider, Perception, Projectile};
use holdout_core::config::ProjectileConfig;
use holdout_core::constants::PROJECTILE_SCALE;
use holdout_core::enums::{AgentState, EnemyArchetype};
use holdout_core::geometry::Sphere;
use holdout_core::types::Transform;

use holdout_ai::profiles::get_profile;

/// Spawn an idle enemy standing at `position`.
pub fn spawn_enemy(
    world: &mut World,
    id: u32,
    archetype: EnemyArchetype,
    position: Vec3,
) -> hecs::Entity {
    let profile = get_profile(archetype);

    let agent = Agent {
        id,
        archetype,
        state: AgentState::Idle,
        health: profile.health,
        movement_speed: profile.movement_speed,
        damage: profile.damage,
        yaw: 0.0,
        attack_cooldown: 0,
        player_visible: false,
    };

    let perception = Perception {
        field_of_view: profile.field_of_view,
        sight_range: profile.sight_range,
    };

    let collider = Collider {
        sphere: Sphere::new(
            position + Vec3::Y * profile.collider_offset,
            profile.collider_radius,
        ),
        vertical_offset: profile.collider_offset,
    };

    let transform = Transform::from_position(position).with_scale(Vec3::splat(profile.scale));

    world.spawn((agent, perception, collider, transform))
}

/// Spawn a projectile `muzzle_offset` units in front of `eye`, travelling
/// along the local forward axis of `orientation`.
pub fn spawn_projectile(
    world: &mut World,
    id: u32,
    eye: Vec3,
    orientation: Quat,
    config: &ProjectileConfig,
) -> hecs::Entity {
    let origin = eye + orientation * Vec3::new(0.0, 0.0, -config.muzzle_offset);

    let projectile = Projectile {
        id,
        origin,
        speed: config.speed,
        damage: config.damage,
        max_range: config.max_range,
        radius: config.radius,
    };

    let transform = Transform::from_position(origin)
        .with_rotation(orientation)
        .with_scale(Vec3::splat(PROJECTILE_SCALE));

    world.spawn((projectile, transform))
}
