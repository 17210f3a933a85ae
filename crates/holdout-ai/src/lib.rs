//! Enemy AI for HOLDOUT.
//!
//! Implements the agent perception cone, the idle/pursue/dead state
//! machine, damage application and archetype-driven behaviour profiles.

pub mod combat;
pub mod fsm;
pub mod perception;
pub mod profiles;

pub use holdout_core as core;

#[cfg(test)]
mod tests;
