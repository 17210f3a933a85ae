//! Weapon state machine: fire gating, reloads and ammunition accounting.
//!
//! Timing is counted in simulation ticks, so `update` must run exactly once
//! per tick for the fire rate and reload duration to hold.

use holdout_core::config::WeaponConfig;
use holdout_core::enums::{Delivery, WeaponState};

/// The player's weapon.
#[derive(Debug, Clone, PartialEq)]
pub struct Weapon {
    state: WeaponState,
    automatic: bool,
    delivery: Delivery,
    /// Ticks required between discharges.
    shot_rate: u32,
    /// Ticks a reload takes.
    reload_time: u32,
    /// Ticks since the last discharge (counts up, compared to `shot_rate`).
    last_shot: u32,
    /// A semi-automatic shot was taken and the trigger has not been
    /// released since. Survives reloads.
    trigger_latched: bool,
    bullets: u32,
    magazine: u32,
    reserve: u32,
}

impl Weapon {
    /// A weapon loaded as described by `config`, ready to fire immediately.
    pub fn new(config: &WeaponConfig) -> Self {
        Self {
            state: WeaponState::Ready,
            automatic: config.automatic,
            delivery: config.delivery,
            shot_rate: config.shot_rate_ticks,
            reload_time: config.reload_ticks,
            last_shot: config.shot_rate_ticks,
            trigger_latched: false,
            bullets: config.bullets.min(config.magazine),
            magazine: config.magazine,
            reserve: config.reserve,
        }
    }

    /// Try to discharge one round. Returns whether a shot was taken; the
    /// caller is responsible for delivering it.
    ///
    /// Rejected while reloading, while a semi-automatic trigger has not been
    /// released, and until `shot_rate` ticks have passed since the last
    /// shot. Pulling the trigger on an empty magazine starts a reload.
    pub fn fire(&mut self) -> bool {
        if self.is_reloading() || (!self.automatic && self.trigger_latched) {
            return false;
        }

        if self.last_shot < self.shot_rate {
            return false;
        }

        if self.bullets == 0 {
            log::debug!("Magazine empty");
            self.reload();
            return false;
        }

        self.bullets -= 1;
        self.last_shot = 0;
        if !self.automatic {
            self.trigger_latched = true;
            self.state = WeaponState::Cooldown;
        }
        log::debug!("Shot fired ({} / {})", self.bullets, self.magazine);
        true
    }

    /// Trigger released: a semi-automatic weapon may fire again.
    pub fn release_trigger(&mut self) {
        self.trigger_latched = false;
        if self.state == WeaponState::Cooldown {
            self.state = WeaponState::Ready;
        }
    }

    /// Start a reload, topping the magazine up from the reserve.
    ///
    /// Returns `false` (and changes nothing) when already reloading or when
    /// the magazine is full. An empty reserve still cycles the reload.
    pub fn reload(&mut self) -> bool {
        if self.is_reloading() || self.bullets == self.magazine {
            return false;
        }

        let transfer = (self.magazine - self.bullets).min(self.reserve);
        self.bullets += transfer;
        self.reserve -= transfer;
        self.state = WeaponState::Reloading { elapsed_ticks: 0 };
        log::info!("Reloading ({} loaded, {} in reserve)", self.bullets, self.reserve);
        true
    }

    /// Advance the weapon by one tick. Returns `true` on the tick a reload
    /// completes.
    pub fn update(&mut self) -> bool {
        let WeaponState::Reloading { elapsed_ticks } = self.state else {
            self.last_shot = self.last_shot.saturating_add(1);
            return false;
        };

        if elapsed_ticks >= self.reload_time {
            self.state = if self.trigger_latched {
                WeaponState::Cooldown
            } else {
                WeaponState::Ready
            };
            log::info!("Reloaded: {}", self.bullets);
            return true;
        }
        self.state = WeaponState::Reloading {
            elapsed_ticks: elapsed_ticks + 1,
        };
        false
    }

    /// Add rounds to the reserve (ammo pickup).
    pub fn add_reserve(&mut self, rounds: u32) {
        self.reserve = self.reserve.saturating_add(rounds);
    }

    /// Replace the reserve count.
    pub fn set_reserve(&mut self, rounds: u32) {
        self.reserve = rounds;
    }

    pub fn state(&self) -> WeaponState {
        self.state
    }

    pub fn is_reloading(&self) -> bool {
        matches!(self.state, WeaponState::Reloading { .. })
    }

    pub fn is_automatic(&self) -> bool {
        self.automatic
    }

    pub fn delivery(&self) -> Delivery {
        self.delivery
    }

    pub fn bullets(&self) -> u32 {
        self.bullets
    }

    pub fn magazine(&self) -> u32 {
        self.magazine
    }

    pub fn reserve(&self) -> u32 {
        self.reserve
    }
}
