//! Projectile travel, expiry and projectile-versus-enemy hits.
//!
//! Each projectile sweeps the segment it covers this tick against the enemy
//! hit spheres, so fast projectiles cannot tunnel through a target.
//! Consumed and expired projectiles are queued for the cleanup pass.

use glam::Vec3;
use hecs::{Entity, World};

use holdout_core::components::{Agent, Collider, Projectile};
use holdout_core::enums::AgentState;
use holdout_core::events::GameEvent;
use holdout_core::geometry::{distance_3d, intersect_ray_sphere, Ray, Sphere};
use holdout_core::types::Transform;

use crate::systems::damage::apply_enemy_hit;

/// Advance every projectile by `dt`, resolve hits and queue removals.
pub fn run(world: &mut World, dt: f32, despawn_buffer: &mut Vec<Entity>, events: &mut Vec<GameEvent>) {
    // Frozen target list: every projectile this tick tests the same poses.
    let targets: Vec<(Entity, Sphere)> = world
        .query::<(&Agent, &Collider)>()
        .iter()
        .filter(|(_, (agent, _))| agent.state != AgentState::Dead)
        .map(|(entity, (_, collider))| (entity, collider.sphere))
        .collect();

    let mut hits: Vec<(Entity, f32)> = Vec::new();

    for (entity, (projectile, transform)) in world.query_mut::<(&Projectile, &mut Transform)>() {
        let start = transform.position;
        let step = projectile.speed * dt;
        let remaining = (projectile.max_range - distance_3d(projectile.origin, start)).max(0.0);
        let ray = Ray {
            origin: start,
            dir: transform.rotation * Vec3::NEG_Z,
        };

        if let Some((target, _)) = first_hit(&ray, step.min(remaining), projectile.radius, &targets) {
            hits.push((target, projectile.damage));
            despawn_buffer.push(entity);
            continue;
        }

        transform.translate_local(Vec3::new(0.0, 0.0, -step));
        if has_expired(projectile, transform.position) {
            log::trace!("Projectile {} expired", projectile.id);
            despawn_buffer.push(entity);
        }
    }

    for (target, damage) in hits {
        apply_enemy_hit(world, target, damage, events);
    }
}

/// Whether a projectile now at `position` has flown past its maximum range.
pub fn has_expired(projectile: &Projectile, position: Vec3) -> bool {
    distance_3d(projectile.origin, position) > projectile.max_range
}

/// Nearest target whose sphere (inflated by `radius`) the ray enters within
/// `reach`. A ray starting inside a sphere hits it at distance zero.
pub fn first_hit(
    ray: &Ray,
    reach: f32,
    radius: f32,
    targets: &[(Entity, Sphere)],
) -> Option<(Entity, f32)> {
    targets
        .iter()
        .filter_map(|&(entity, sphere)| {
            let inflated = Sphere::new(sphere.center, sphere.radius + radius);
            if inflated.contains(ray.origin) {
                return Some((entity, 0.0));
            }
            intersect_ray_sphere(ray, &inflated)
                .filter(|&(t0, _)| t0 <= reach)
                .map(|(t0, _)| (entity, t0))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
}
