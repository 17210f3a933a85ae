//! Arena bounds: the rectangular horizontal region the player may occupy.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::types::Transform;

/// Half-extents of the arena on X and Z plus the wall thickness offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArenaBounds {
    pub size_x: f32,
    pub size_z: f32,
    pub offset: f32,
}

impl Default for ArenaBounds {
    fn default() -> Self {
        Self {
            size_x: ARENA_SIZE_X,
            size_z: ARENA_SIZE_Z,
            offset: ARENA_WALL_OFFSET,
        }
    }
}

impl ArenaBounds {
    pub fn new(size_x: f32, size_z: f32, offset: f32) -> Self {
        Self {
            size_x,
            size_z,
            offset,
        }
    }

    /// Largest accepted |x|.
    pub fn limit_x(&self) -> f32 {
        self.size_x - self.offset
    }

    /// Largest accepted |z|.
    pub fn limit_z(&self) -> f32 {
        self.size_z - self.offset
    }

    pub fn contains(&self, position: Vec3) -> bool {
        is_within_arena(position, self)
    }

    /// Transforms for the four boundary walls (two per axis).
    pub fn wall_transforms(&self) -> Vec<Transform> {
        let mut walls = Vec::with_capacity(4);
        for side in [-1.0_f32, 1.0] {
            walls.push(
                Transform::from_position(Vec3::new(self.size_x * side, 0.0, 0.0))
                    .with_scale(Vec3::new(1.0, ARENA_WALL_HEIGHT, self.size_x)),
            );
            walls.push(
                Transform::from_position(Vec3::new(0.0, 0.0, self.size_z * side))
                    .with_scale(Vec3::new(self.size_z, ARENA_WALL_HEIGHT, 1.0)),
            );
        }
        walls
    }
}

/// Horizontal containment test. The vertical axis is unconstrained and the
/// limit itself is inside the arena.
pub fn is_within_arena(position: Vec3, bounds: &ArenaBounds) -> bool {
    position.x.abs() <= bounds.limit_x() && position.z.abs() <= bounds.limit_z()
}
