//! Perception cone and heading helpers.
//!
//! Headings are yaw angles about the vertical axis with 0 facing +Z, so a
//! yaw of `atan2(dx, dz)` faces the point `(dx, _, dz)`.

use glam::Vec3;

use holdout_core::components::Perception;

/// Unit forward vector for a yaw angle.
pub fn forward_from_yaw(yaw: f32) -> Vec3 {
    Vec3::new(yaw.sin(), 0.0, yaw.cos())
}

/// Yaw that faces `target` from `position`. Pitch and roll are untouched,
/// and a target directly above or below keeps `current`.
pub fn yaw_towards(position: Vec3, target: Vec3, current: f32) -> f32 {
    let to_target = Vec3::new(target.x - position.x, 0.0, target.z - position.z);
    match to_target.try_normalize() {
        Some(dir) => dir.x.atan2(dir.z),
        None => current,
    }
}

/// Whether the player is inside the agent's perception cone.
///
/// Visibility requires the direction to the player to lie within half the
/// field of view of the agent's forward vector and the player to be closer
/// than the sight range. Both tests use the horizontal plane: the player's
/// eye height must not shrink the cone at close range.
pub fn is_player_in_sight(
    position: Vec3,
    yaw: f32,
    perception: &Perception,
    player_position: Vec3,
) -> bool {
    let to_player = Vec3::new(
        player_position.x - position.x,
        0.0,
        player_position.z - position.z,
    );
    let distance = to_player.length();
    if distance >= perception.sight_range {
        return false;
    }

    // Standing on the player: nothing to look at, count as seen.
    let Some(direction) = to_player.try_normalize() else {
        return true;
    };

    direction.dot(forward_from_yaw(yaw)) > (perception.field_of_view / 2.0).cos()
}
