//! Player health and stamina.

/// Health and stamina pools. `is_alive` is derived from health.
#[derive(Debug, Clone, PartialEq)]
pub struct Vitality {
    health: f32,
    max_health: f32,
    stamina: f32,
    max_stamina: f32,
}

impl Vitality {
    /// Full pools.
    pub fn new(max_health: f32, max_stamina: f32) -> Self {
        Self {
            health: max_health,
            max_health,
            stamina: max_stamina,
            max_stamina,
        }
    }

    /// Subtract `amount` from health. Health may go negative; `is_alive`
    /// is the authority on death.
    pub fn take_damage(&mut self, amount: f32) {
        self.health -= amount;
        log::info!("Player hit for {amount} damage ({} HP left)", self.health);
        if !self.is_alive() {
            log::info!("Player died");
        }
    }

    /// Add stamina, capped at the maximum.
    pub fn increase_stamina(&mut self, amount: f32) {
        self.stamina = (self.stamina + amount).min(self.max_stamina);
    }

    /// Remove stamina, floored at zero.
    pub fn decrease_stamina(&mut self, amount: f32) {
        self.stamina = (self.stamina - amount).max(0.0);
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    pub fn health(&self) -> f32 {
        self.health
    }

    pub fn max_health(&self) -> f32 {
        self.max_health
    }

    pub fn stamina(&self) -> f32 {
        self.stamina
    }

    pub fn max_stamina(&self) -> f32 {
        self.max_stamina
    }
}
