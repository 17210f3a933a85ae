//! The player: eye position, view orientation, vitals and movement rules.

use glam::{EulerRot, Quat, Vec2, Vec3};

use holdout_core::arena::ArenaBounds;
use holdout_core::commands::InputSnapshot;
use holdout_core::config::PlayerConfig;
use holdout_core::constants::PLAYER_PITCH_LIMIT;
use holdout_core::types::Transform;

use crate::vitality::Vitality;

/// The player avatar. The camera copies its position and orientation.
#[derive(Debug, Clone)]
pub struct Player {
    position: Vec3,
    /// Euler angles: `x` = pitch, `y` = yaw, `z` = roll (radians).
    rotation: Vec3,
    vitality: Vitality,
    movement_speed: f32,
    sprint_factor: f32,
    rotation_speed: f32,
    stamina_drain_per_sec: f32,
    stamina_regen_per_sec: f32,
    kills: u32,
    arena: ArenaBounds,
}

impl Player {
    pub fn new(config: &PlayerConfig, arena: ArenaBounds) -> Self {
        Self {
            position: config.spawn,
            rotation: Vec3::ZERO,
            vitality: Vitality::new(config.max_health, config.max_stamina),
            movement_speed: config.movement_speed,
            sprint_factor: config.sprint_factor,
            rotation_speed: config.rotation_speed,
            stamina_drain_per_sec: config.stamina_drain_per_sec,
            stamina_regen_per_sec: config.stamina_regen_per_sec,
            kills: 0,
            arena,
        }
    }

    /// Full view orientation (yaw, then pitch).
    pub fn orientation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.rotation.y, self.rotation.x, self.rotation.z)
    }

    /// Unit view direction. Forward is local -Z.
    pub fn forward(&self) -> Vec3 {
        self.orientation() * Vec3::NEG_Z
    }

    /// Apply a raw look delta. Pitch is clamped so the view cannot flip.
    pub fn look(&mut self, delta: Vec2) {
        self.rotation.x -= self.rotation_speed * delta.y;
        self.rotation.y -= self.rotation_speed * delta.x;
        self.rotation.x = self.rotation.x.clamp(-PLAYER_PITCH_LIMIT, PLAYER_PITCH_LIMIT);
    }

    /// Move by `local` (x = right, z = backward) rotated by yaw only, so
    /// looking up never lifts the player off the ground.
    ///
    /// Each horizontal axis is committed only if the result stays inside the
    /// arena, letting the player slide along a wall. Returns whether any
    /// movement was committed.
    pub fn try_move(&mut self, local: Vec3) -> bool {
        let delta = Quat::from_rotation_y(self.rotation.y) * local;
        let candidate = self.position + delta;
        if self.arena.contains(candidate) {
            self.position = candidate;
            return true;
        }

        let mut moved = false;
        let along_x = self.position + Vec3::new(delta.x, 0.0, 0.0);
        if delta.x != 0.0 && self.arena.contains(along_x) {
            self.position = along_x;
            moved = true;
        }
        let along_z = self.position + Vec3::new(0.0, 0.0, delta.z);
        if delta.z != 0.0 && self.arena.contains(along_z) {
            self.position = along_z;
            moved = true;
        }
        moved
    }

    /// Apply one frame of movement and look input. Returns whether the
    /// player sprinted (and so spent stamina) this frame.
    pub fn apply_input(&mut self, input: &InputSnapshot, dt: f32) -> bool {
        self.look(input.look_delta);

        if !input.is_moving() {
            return false;
        }

        let sprinting = input.sprint && self.vitality.stamina() > 0.0;
        let mut speed = self.movement_speed * dt;
        if sprinting {
            speed *= self.sprint_factor;
            self.vitality.decrease_stamina(self.stamina_drain_per_sec * dt);
        }

        // Diagonal input must not be faster than straight input.
        let intent = input.movement.clamp_length_max(1.0);
        self.try_move(Vec3::new(intent.x, 0.0, -intent.y) * speed);
        sprinting
    }

    /// Regain stamina for a frame spent not sprinting.
    pub fn regenerate_stamina(&mut self, dt: f32) {
        self.vitality.increase_stamina(self.stamina_regen_per_sec * dt);
    }

    pub fn take_damage(&mut self, amount: f32) {
        self.vitality.take_damage(amount);
    }

    pub fn is_alive(&self) -> bool {
        self.vitality.is_alive()
    }

    pub fn record_kills(&mut self, count: u32) {
        self.kills += count;
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    pub fn vitality(&self) -> &Vitality {
        &self.vitality
    }

    pub fn kills(&self) -> u32 {
        self.kills
    }

    pub fn transform(&self) -> Transform {
        Transform::from_position(self.position).with_rotation(self.orientation())
    }
}
