//! Wave director: places enemies on unique spawn points and sequences
//! waves as each one is cleared.
//!
//! The director never touches the world. It hands spawn requests to the
//! engine, which owns entity insertion.

use std::collections::HashSet;

use glam::Vec3;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use holdout_core::config::{SpawnConfig, Wave};
use holdout_core::enums::EnemyArchetype;
use holdout_core::error::SpawnError;

/// One enemy the engine should spawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnRequest {
    pub archetype: EnemyArchetype,
    pub position: Vec3,
}

/// Result of a wave bookkeeping step.
#[derive(Debug, Clone, PartialEq)]
pub enum WaveProgress {
    /// Current wave still has living enemies.
    InProgress,
    /// A wave started; spawn these enemies.
    Started { wave: u32, spawns: Vec<SpawnRequest> },
    /// The last wave has been cleared.
    Cleared,
}

/// Sequences the session's waves.
#[derive(Debug, Clone)]
pub struct WaveDirector {
    waves: Vec<Wave>,
    spawn: SpawnConfig,
    /// Index of the wave being fought; `None` before the first start.
    current: Option<usize>,
    /// Enemies of the current wave not yet removed.
    alive: u32,
    cleared: bool,
    /// Grid points taken in the current wave.
    used: HashSet<(i32, i32)>,
}

impl WaveDirector {
    pub fn new(waves: Vec<Wave>, spawn: SpawnConfig) -> Self {
        Self {
            waves,
            spawn,
            current: None,
            alive: 0,
            cleared: false,
            used: HashSet::new(),
        }
    }

    /// Start the first wave (skipping empty ones).
    pub fn begin(&mut self, rng: &mut ChaCha8Rng) -> Result<WaveProgress, SpawnError> {
        self.current = None;
        self.alive = 0;
        self.cleared = false;
        self.advance_from(0, rng)
    }

    /// Draw an integer grid point in `[-bound, bound]²` that lies outside the
    /// safe square and has not been handed out in this wave.
    ///
    /// Rejection sampling, capped at `max_attempts` draws.
    pub fn generate_unique_spawn_point(
        &mut self,
        rng: &mut ChaCha8Rng,
    ) -> Result<(i32, i32), SpawnError> {
        let bound = self.spawn.bound;
        let safe = self.spawn.safe_zone;

        for _ in 0..self.spawn.max_attempts {
            let point = (rng.gen_range(-bound..=bound), rng.gen_range(-bound..=bound));
            if point.0.abs() < safe && point.1.abs() < safe {
                log::trace!("Spawn draw {point:?} rejected: inside safe zone");
                continue;
            }
            if !self.used.insert(point) {
                log::trace!("Spawn draw {point:?} rejected: already taken");
                continue;
            }
            return Ok(point);
        }

        log::error!(
            "Spawn pool exhausted after {} attempts ({} points in use)",
            self.spawn.max_attempts,
            self.used.len()
        );
        Err(SpawnError::PoolExhausted {
            attempts: self.spawn.max_attempts,
            used: self.used.len(),
            capacity: self.spawn.capacity(),
        })
    }

    /// Make `index` the current wave and produce its spawn requests.
    /// Spawn points are unique within the wave. On failure no point stays
    /// reserved and the current wave is unchanged.
    ///
    /// Panics if `index` is not a wave of this session.
    pub fn start_wave(
        &mut self,
        index: usize,
        rng: &mut ChaCha8Rng,
    ) -> Result<Vec<SpawnRequest>, SpawnError> {
        let wave = self.waves[index];
        self.used.clear();

        let mut spawns = Vec::with_capacity(wave.count as usize);
        for _ in 0..wave.count {
            let (x, z) = match self.generate_unique_spawn_point(rng) {
                Ok(point) => point,
                Err(err) => {
                    self.used.clear();
                    return Err(err);
                }
            };
            spawns.push(SpawnRequest {
                archetype: wave.archetype,
                position: Vec3::new(x as f32, 0.0, z as f32),
            });
        }

        self.current = Some(index);
        self.alive = wave.count;
        log::info!(
            "Wave {} started: {} x {:?}",
            index + 1,
            wave.count,
            wave.archetype
        );
        Ok(spawns)
    }

    /// Record the removal of one enemy of the current wave. When the wave
    /// empties, the next one starts; after the last, the director reports
    /// `Cleared`.
    pub fn on_enemy_removed(&mut self, rng: &mut ChaCha8Rng) -> Result<WaveProgress, SpawnError> {
        if self.cleared {
            return Ok(WaveProgress::Cleared);
        }
        let Some(current) = self.current else {
            return Ok(WaveProgress::InProgress);
        };

        self.alive = self.alive.saturating_sub(1);
        if self.alive > 0 {
            return Ok(WaveProgress::InProgress);
        }

        log::info!("Wave {} cleared", current + 1);
        self.advance_from(current + 1, rng)
    }

    fn advance_from(
        &mut self,
        mut index: usize,
        rng: &mut ChaCha8Rng,
    ) -> Result<WaveProgress, SpawnError> {
        while index < self.waves.len() {
            if self.waves[index].count > 0 {
                let spawns = self.start_wave(index, rng)?;
                return Ok(WaveProgress::Started {
                    wave: index as u32,
                    spawns,
                });
            }
            index += 1;
        }

        self.cleared = true;
        self.alive = 0;
        log::info!("All {} waves cleared", self.waves.len());
        Ok(WaveProgress::Cleared)
    }

    /// Zero-based index of the current wave (0 before the first start).
    pub fn current_wave(&self) -> u32 {
        self.current.unwrap_or(0) as u32
    }

    pub fn total_waves(&self) -> u32 {
        self.waves.len() as u32
    }

    /// Enemies of the current wave not yet removed.
    pub fn enemies_left(&self) -> u32 {
        self.alive
    }

    pub fn is_cleared(&self) -> bool {
        self.cleared
    }
}
