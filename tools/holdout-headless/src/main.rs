//! holdout-headless: run a simulated round without a renderer.
//!
//! Usage:
//!   holdout-headless run --seed 7 --ticks 3600
//!   holdout-headless run --config session.json
//!
//! The scripted player turns toward the nearest enemy and holds the
//! trigger. A JSON summary of the round is printed to stdout.

use std::path::PathBuf;
use std::process;

use glam::Vec2;
use serde::Serialize;

use holdout_core::commands::{InputSnapshot, SessionCommand};
use holdout_core::config::SimConfig;
use holdout_core::constants::{DT, TICK_RATE};
use holdout_core::enums::GamePhase;
use holdout_core::events::GameEvent;
use holdout_core::state::GameStateSnapshot;
use holdout_sim::SimulationEngine;

/// What the round came to.
#[derive(Debug, Serialize)]
struct RoundSummary {
    seed: u64,
    ticks: u64,
    elapsed_secs: f64,
    phase: GamePhase,
    wave: u32,
    waves_total: u32,
    kills: u32,
    shots_fired: u32,
    player_health: f32,
    bullets: u32,
    reserve: u32,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "run" => cmd_run(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "holdout-headless: HOLDOUT round simulator\n\
         \n\
         Commands:\n\
         \n\
         run       Play one round with a scripted player\n\
         \n\
           --config <path>    Session config JSON (optional, default: built-in)\n\
           --seed <N>         Override the config seed\n\
           --ticks <N>        Tick limit (default: 10 minutes of play)\n\
         \n\
         Set RUST_LOG=debug for per-hit logging.\n"
    );
}

fn parse_flag<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(&args[i + 1]);
        }
    }
    None
}

fn parse_number<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    let raw = parse_flag(args, flag)?;
    match raw.parse() {
        Ok(n) => Some(n),
        Err(_) => {
            eprintln!("Error: {flag} expects a number, got {raw:?}");
            process::exit(1);
        }
    }
}

fn load_config(args: &[String]) -> SimConfig {
    let mut config = match parse_flag(args, "--config").map(PathBuf::from) {
        Some(path) => {
            let json = match std::fs::read_to_string(&path) {
                Ok(json) => json,
                Err(e) => {
                    eprintln!("Error reading {}: {e}", path.display());
                    process::exit(1);
                }
            };
            match SimConfig::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded session config from {}", path.display());
                    config
                }
                Err(e) => {
                    eprintln!("Error in {}: {e}", path.display());
                    process::exit(1);
                }
            }
        }
        None => SimConfig::default(),
    };

    if let Some(seed) = parse_number(args, "--seed") {
        config.seed = seed;
    }
    config
}

// --- Run command ---

fn cmd_run(args: &[String]) {
    let config = load_config(args);
    let max_ticks: u64 = parse_number(args, "--ticks").unwrap_or(u64::from(TICK_RATE) * 600);
    let seed = config.seed;

    let mut engine = match SimulationEngine::new(config) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Invalid config: {e}");
            process::exit(1);
        }
    };
    engine.queue_command(SessionCommand::StartRound);

    let mut shots_fired = 0;
    let mut snapshot = GameStateSnapshot::default();
    let mut input = InputSnapshot::idle();

    for _ in 0..max_ticks {
        snapshot = match engine.tick(&input, DT) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                eprintln!("Simulation error: {e}");
                process::exit(1);
            }
        };
        shots_fired += snapshot
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::ShotFired { .. }))
            .count() as u32;

        if snapshot.phase.is_terminal() {
            break;
        }
        input = scripted_input(&engine, &snapshot);
    }

    log::info!(
        "Round ended {:?} at tick {} ({} kills)",
        snapshot.phase,
        snapshot.time.tick,
        snapshot.player.kills
    );

    let summary = RoundSummary {
        seed,
        ticks: snapshot.time.tick,
        elapsed_secs: snapshot.time.elapsed_secs,
        phase: snapshot.phase,
        wave: snapshot.wave.index + 1,
        waves_total: snapshot.wave.total,
        kills: snapshot.player.kills,
        shots_fired,
        player_health: snapshot.player.health,
        bullets: snapshot.weapon.bullets,
        reserve: snapshot.weapon.reserve,
    };

    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error writing summary: {e}");
            process::exit(1);
        }
    }
}

/// Face the nearest enemy and pull the trigger; release on alternate ticks
/// so semi-automatic weapons keep cycling.
fn scripted_input(engine: &SimulationEngine, snapshot: &GameStateSnapshot) -> InputSnapshot {
    let player = engine.player();
    let eye = player.position();

    let nearest = snapshot.enemies.iter().min_by(|a, b| {
        let da = a.transform.position.distance_squared(eye);
        let db = b.transform.position.distance_squared(eye);
        da.total_cmp(&db)
    });
    let Some(enemy) = nearest else {
        return InputSnapshot::idle();
    };

    let dx = enemy.transform.position.x - eye.x;
    let dz = enemy.transform.position.z - eye.z;
    let yaw = (-dx).atan2(-dz);
    let rotation_speed = engine.config().player.rotation_speed;

    InputSnapshot {
        look_delta: Vec2::new(-(yaw - player.rotation().y) / rotation_speed, 0.0),
        fire: snapshot.time.tick % 2 == 0,
        ..Default::default()
    }
}
