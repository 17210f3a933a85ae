//! Core types and definitions for the HOLDOUT combat simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, geometry, configuration, commands, events, state snapshots
//! and constants. It has no dependency on any rendering or windowing stack.

pub mod arena;
pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod geometry;
pub mod state;
pub mod types;
