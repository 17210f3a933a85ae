//! Combat simulation engine for HOLDOUT.
//!
//! Owns the hecs ECS world, runs systems once per tick, and produces
//! GameStateSnapshots for the renderer and UI.

pub mod engine;
pub mod player;
pub mod systems;
pub mod vitality;
pub mod weapon;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use holdout_core as core;
