//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only).
//! They do not own state. All state lives in components, the player, the
//! weapon and the wave director, which the engine passes in.

pub mod cleanup;
pub mod contact;
pub mod damage;
pub mod enemy_ai;
pub mod projectiles;
pub mod snapshot;
pub mod wave_director;
pub mod weapon_fire;
