//! Simulation constants and tuning parameters.
//!
//! These seed the `Default` impls in [`crate::config`]; the running
//! simulation reads its values from `SimConfig`, not from here.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

// --- Arena ---

/// Default arena half-extent along X (units).
pub const ARENA_SIZE_X: f32 = 25.0;

/// Default arena half-extent along Z (units).
pub const ARENA_SIZE_Z: f32 = 25.0;

/// Wall thickness offset subtracted from the half-extents.
pub const ARENA_WALL_OFFSET: f32 = 2.0;

/// Wall height used for the renderable wall transforms.
pub const ARENA_WALL_HEIGHT: f32 = 5.0;

// --- Player ---

/// Player spawn position (eye height on Y).
pub const PLAYER_SPAWN: [f32; 3] = [1.0, 2.0, 1.0];

/// Maximum (and starting) player health.
pub const PLAYER_MAX_HEALTH: f32 = 100.0;

/// Maximum (and starting) player stamina.
pub const PLAYER_MAX_STAMINA: f32 = 100.0;

/// Walking speed (units/second).
pub const PLAYER_MOVEMENT_SPEED: f32 = 4.0;

/// Multiplier applied to movement speed while sprinting.
pub const PLAYER_SPRINT_FACTOR: f32 = 1.8;

/// Radians of rotation per unit of look delta.
pub const PLAYER_ROTATION_SPEED: f32 = 0.001;

/// Stamina drained per second of sprinting.
pub const STAMINA_DRAIN_PER_SEC: f32 = 25.0;

/// Stamina regenerated per second when not sprinting.
pub const STAMINA_REGEN_PER_SEC: f32 = 10.0;

/// Pitch limit (radians) so the view never flips over.
pub const PLAYER_PITCH_LIMIT: f32 = 89.0 * std::f32::consts::PI / 180.0;

// --- Weapon ---

/// Ticks that must elapse between two discharges.
pub const WEAPON_SHOT_RATE_TICKS: u32 = 12;

/// Ticks a reload takes to complete.
pub const WEAPON_RELOAD_TICKS: u32 = 90;

/// Magazine capacity.
pub const WEAPON_MAGAZINE: u32 = 6;

/// Reserve ammunition carried at round start.
pub const WEAPON_RESERVE: u32 = 30;

/// Damage dealt by a hitscan discharge.
pub const HITSCAN_DAMAGE: f32 = 50.0;

/// Maximum reach of a hitscan discharge (units).
pub const HITSCAN_RANGE: f32 = 90.0;

// --- Projectile ---

/// Projectile travel speed (units/second).
pub const PROJECTILE_SPEED: f32 = 100.0;

/// Distance from spawn point after which a projectile expires (units).
pub const PROJECTILE_MAX_RANGE: f32 = 90.0;

/// Damage dealt by a projectile hit.
pub const PROJECTILE_DAMAGE: f32 = 20.0;

/// Projectile collision radius.
pub const PROJECTILE_RADIUS: f32 = 0.1;

/// Distance in front of the eye at which projectiles spawn.
pub const PROJECTILE_MUZZLE_OFFSET: f32 = 1.5;

/// Render scale of a projectile.
pub const PROJECTILE_SCALE: f32 = 0.2;

// --- Enemies ---

/// Player-enemy horizontal distance at which contact damage applies.
pub const ENEMY_CONTACT_RADIUS: f32 = 2.0;

/// Minimum ticks between two contact hits from the same enemy.
pub const ENEMY_ATTACK_INTERVAL_TICKS: u32 = 60;

/// Walker movement speed (units/second).
pub const WALKER_SPEED: f32 = 2.5;

/// Walker starting health.
pub const WALKER_HEALTH: f32 = 100.0;

/// Walker contact damage.
pub const WALKER_DAMAGE: f32 = 20.0;

/// Walker field of view (full angle, radians).
pub const WALKER_FIELD_OF_VIEW: f32 = std::f32::consts::FRAC_PI_2;

/// Walker sight range (units).
pub const WALKER_SIGHT_RANGE: f32 = 40.0;

/// Height of the walker's hit sphere centre above its feet.
pub const WALKER_COLLIDER_OFFSET: f32 = 1.8;

/// Walker hit sphere radius.
pub const WALKER_COLLIDER_RADIUS: f32 = 0.5;

// --- Waves ---

/// Spawn coordinates are drawn from `[-SPAWN_BOUND, SPAWN_BOUND]` on both axes.
pub const SPAWN_BOUND: i32 = 20;

/// Half-extent of the player-safe square around the origin.
pub const SPAWN_SAFE_ZONE: i32 = 5;

/// Rejection-sampling attempts before a spawn draw is declared exhausted.
pub const MAX_SPAWN_ATTEMPTS: u32 = 1024;
