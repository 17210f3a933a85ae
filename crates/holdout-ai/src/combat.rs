//! Damage application for enemy agents.

use holdout_core::components::Agent;
use holdout_core::enums::AgentState;

/// Outcome of a single hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    /// The agent was already dead; nothing changed.
    Ignored,
    Wounded,
    Killed,
}

/// Subtract `damage` from the agent's health. Reaching zero marks it dead
/// (pending reap). A wounded idle agent starts pursuing.
pub fn hit(agent: &mut Agent, damage: f32) -> HitOutcome {
    if agent.state == AgentState::Dead {
        return HitOutcome::Ignored;
    }

    agent.health -= damage;
    log::debug!(
        "Enemy {} hit for {} damage ({} left)",
        agent.id,
        damage,
        agent.health
    );

    if agent.health <= 0.0 {
        die(agent);
        return HitOutcome::Killed;
    }

    if agent.state == AgentState::Idle {
        agent.state = AgentState::Pursuing;
    }
    HitOutcome::Wounded
}

/// Mark the agent dead. Removal is left to the reap pass.
pub fn die(agent: &mut Agent) {
    agent.state = AgentState::Dead;
    agent.player_visible = false;
    log::info!("Enemy {} died", agent.id);
}

/// Whether the agent has been flagged dead.
pub fn is_dead(agent: &Agent) -> bool {
    agent.state == AgentState::Dead
}
