//! Simulation engine: the frame orchestrator.
//!
//! `SimulationEngine` owns the hecs world of enemies and projectiles, the
//! player, the weapon and the wave director. It processes session commands,
//! runs every system in a fixed order once per tick, and produces
//! `GameStateSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use holdout_core::commands::{InputSnapshot, SessionCommand};
use holdout_core::config::SimConfig;
use holdout_core::enums::GamePhase;
use holdout_core::error::{ConfigError, SimError, SpawnError};
use holdout_core::events::GameEvent;
use holdout_core::state::GameStateSnapshot;
use holdout_core::types::SimTime;

use crate::player::Player;
use crate::systems;
use crate::systems::snapshot::SnapshotSources;
use crate::systems::wave_director::{WaveDirector, WaveProgress};
use crate::systems::weapon_fire::FireParams;
use crate::weapon::Weapon;
use crate::world_setup;

/// The simulation engine. Owns the ECS world and all session state.
pub struct SimulationEngine {
    config: SimConfig,
    world: World,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    player: Player,
    weapon: Weapon,
    director: WaveDirector,
    command_queue: VecDeque<SessionCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
    next_enemy_id: u32,
    next_projectile_id: u32,
    trigger_was_held: bool,
    /// Spawn failure that stopped the round; repeated by every tick until
    /// a restart.
    fault: Option<SpawnError>,
}

impl SimulationEngine {
    /// Create an engine in the lobby. The config is validated up front so a
    /// round can never start on an unplayable arena.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            player: Player::new(&config.player, config.arena),
            weapon: Weapon::new(&config.weapon),
            director: WaveDirector::new(config.waves.clone(), config.spawn),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            next_enemy_id: 0,
            next_projectile_id: 0,
            trigger_was_held: false,
            fault: None,
            config,
        })
    }

    /// Queue a session command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: SessionCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = SessionCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick covering `dt` seconds of frame
    /// time, and return the resulting snapshot.
    ///
    /// Weapon timers count ticks, not seconds: call this once per fixed
    /// simulation step.
    ///
    /// A spawn failure moves the session to `Faulted`; from then on every
    /// tick returns the error until a `Restart` succeeds.
    pub fn tick(&mut self, input: &InputSnapshot, dt: f32) -> Result<GameStateSnapshot, SimError> {
        if let Err(err) = self.step(input, dt) {
            log::error!("Round faulted at tick {}: {err}", self.time.tick);
            self.phase = GamePhase::Faulted;
            self.fault = Some(err);
        }

        if let Some(fault) = &self.fault {
            return Err(fault.clone().into());
        }
        Ok(self.snapshot())
    }

    fn step(&mut self, input: &InputSnapshot, dt: f32) -> Result<(), SpawnError> {
        self.process_commands()?;

        if self.phase == GamePhase::Active {
            self.run_systems(input, dt)?;
            self.time.advance(dt);
        }
        Ok(())
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn weapon(&self) -> &Weapon {
        &self.weapon
    }

    pub fn director(&self) -> &WaveDirector {
        &self.director
    }

    /// Mutable player access (for tests).
    #[cfg(test)]
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Process all queued commands.
    fn process_commands(&mut self) -> Result<(), SpawnError> {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command)?;
        }
        Ok(())
    }

    /// Handle a single session command.
    fn handle_command(&mut self, command: SessionCommand) -> Result<(), SpawnError> {
        match command {
            SessionCommand::StartRound => {
                if self.phase == GamePhase::Lobby {
                    self.start_round()?;
                }
            }
            SessionCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            SessionCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            SessionCommand::Restart => self.start_round()?,
        }
        Ok(())
    }

    /// Reset every piece of round state and spawn the first wave.
    fn start_round(&mut self) -> Result<(), SpawnError> {
        self.world.clear();
        self.time = SimTime::default();
        self.player = Player::new(&self.config.player, self.config.arena);
        self.weapon = Weapon::new(&self.config.weapon);
        self.director = WaveDirector::new(self.config.waves.clone(), self.config.spawn);
        self.despawn_buffer.clear();
        self.next_enemy_id = 0;
        self.next_projectile_id = 0;
        self.trigger_was_held = false;
        self.fault = None;
        self.events.clear();

        self.phase = GamePhase::Active;
        self.events.push(GameEvent::RoundStarted);
        let progress = self.director.begin(&mut self.rng)?;
        self.apply_wave_progress(progress);
        log::info!("Round started (seed {})", self.config.seed);
        Ok(())
    }

    /// Run all systems in order.
    fn run_systems(&mut self, input: &InputSnapshot, dt: f32) -> Result<(), SpawnError> {
        // 1. Player movement and look (arena-constrained)
        let sprinted = self.player.apply_input(input, dt);
        // 2. Weapon intents and timers
        systems::weapon_fire::run(
            &mut self.world,
            &mut self.weapon,
            &self.player,
            input,
            self.trigger_was_held,
            &FireParams {
                weapon: &self.config.weapon,
                projectile: &self.config.projectile,
            },
            &mut self.next_projectile_id,
            &mut self.events,
        );
        self.trigger_was_held = input.fire;
        // 3. Projectile travel, hits and expiry
        systems::projectiles::run(&mut self.world, dt, &mut self.despawn_buffer, &mut self.events);
        // 4. Enemy perception and pursuit, then contact damage
        systems::enemy_ai::run(&mut self.world, self.player.position(), dt);
        systems::contact::run(
            &mut self.world,
            &mut self.player,
            &self.config.contact,
            &mut self.events,
        );
        // 5. Reap dead enemies and spent projectiles, advance waves
        let reaped = systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
        self.player.record_kills(reaped);
        for _ in 0..reaped {
            let progress = self.director.on_enemy_removed(&mut self.rng)?;
            self.apply_wave_progress(progress);
        }
        // 6. Stamina regeneration
        if !sprinted {
            self.player.regenerate_stamina(dt);
        }
        // 7. Loss check
        if !self.player.is_alive() {
            self.phase = GamePhase::Lost;
            self.events.push(GameEvent::PlayerDied);
            log::info!(
                "Round lost at tick {} with {} kills",
                self.time.tick,
                self.player.kills()
            );
        }
        Ok(())
    }

    /// Spawn a started wave's enemies or declare victory.
    fn apply_wave_progress(&mut self, progress: WaveProgress) {
        match progress {
            WaveProgress::InProgress => {}
            WaveProgress::Started { wave, spawns } => {
                self.events.push(GameEvent::WaveStarted {
                    wave,
                    enemies: spawns.len() as u32,
                });
                for request in spawns {
                    let id = self.next_enemy_id;
                    self.next_enemy_id += 1;
                    world_setup::spawn_enemy(&mut self.world, id, request.archetype, request.position);
                }
            }
            WaveProgress::Cleared => {
                if self.phase != GamePhase::Won {
                    self.phase = GamePhase::Won;
                    self.events.push(GameEvent::AllWavesCleared);
                    log::info!("All waves cleared at tick {}", self.time.tick);
                }
            }
        }
    }

    fn snapshot(&mut self) -> GameStateSnapshot {
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &SnapshotSources {
                time: self.time,
                phase: self.phase,
                player: &self.player,
                weapon: &self.weapon,
                director: &self.director,
                arena: &self.config.arena,
            },
            events,
        )
    }
}
