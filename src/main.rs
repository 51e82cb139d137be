//! Sensor Flappy entry point
//!
//! Headless frame loop: reads the sensor stream, steps the simulation at a
//! fixed rate and composes each frame's draw list. Hosts with a window hook
//! in where the draw list is produced.
//!
//! Environment:
//! - `FLAPPY_CONFIG`: JSON config file (defaults otherwise)
//! - `FLAPPY_SENSOR`: serial device the sensor board is on, opened at 57600 8N1
//!   (otherwise stdin, read as an already configured byte stream)
//! - `FLAPPY_BAUD`: override the serial line speed
//! - `FLAPPY_SEED`: obstacle RNG seed (time based otherwise)
//! - `RUST_LOG`: log filter

use std::fs;
use std::io;
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

use sensor_flappy::Config;
use sensor_flappy::consts::FRAME_RATE;
use sensor_flappy::renderer::build_draw_list;
use sensor_flappy::sensor::{SENSOR_BAUD_RATE, SensorFeed, open_serial};
use sensor_flappy::sim::{GamePhase, GameState, TickInput, tick};

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Sensor Flappy starting...");

    let config = load_config()?;
    let seed = load_seed()?;
    let mut state = GameState::new(&config, seed).context("invalid game configuration")?;
    log::info!("Game initialized with seed: {}", state.seed);

    let mut feed = open_sensor()?;
    run(&mut state, &mut feed);

    log::info!(
        "Session over after {} ticks, {} obstacles, best score {}",
        state.time_ticks,
        state.obstacles_spawned,
        state.best_score
    );
    if let Ok(json) = serde_json::to_string(&state.snapshot()) {
        log::debug!("Final snapshot: {}", json);
    }

    feed.join().context("sensor source failed")?;
    Ok(())
}

fn load_config() -> Result<Config> {
    match std::env::var_os("FLAPPY_CONFIG") {
        Some(path) => {
            let json = fs::read_to_string(&path)
                .with_context(|| format!("reading config {}", path.to_string_lossy()))?;
            let config = Config::from_json(&json)
                .with_context(|| format!("parsing config {}", path.to_string_lossy()))?;
            log::info!("Loaded config from {}", path.to_string_lossy());
            Ok(config)
        }
        None => {
            log::info!("Using default config");
            Ok(Config::default())
        }
    }
}

fn load_seed() -> Result<u64> {
    match std::env::var("FLAPPY_SEED") {
        Ok(s) => s
            .parse()
            .with_context(|| format!("FLAPPY_SEED is not a u64: {:?}", s)),
        Err(_) => Ok(SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)),
    }
}

fn load_baud_rate() -> Result<u32> {
    match std::env::var("FLAPPY_BAUD") {
        Ok(s) => s
            .parse()
            .with_context(|| format!("FLAPPY_BAUD is not a baud rate: {:?}", s)),
        Err(_) => Ok(SENSOR_BAUD_RATE),
    }
}

fn open_sensor() -> Result<SensorFeed> {
    let feed = match std::env::var("FLAPPY_SENSOR") {
        Ok(path) => {
            let baud_rate = load_baud_rate()?;
            let port = open_serial(&path, baud_rate)
                .with_context(|| format!("opening sensor port {}", path))?;
            SensorFeed::spawn(port)
        }
        Err(std::env::VarError::NotUnicode(path)) => {
            anyhow::bail!("FLAPPY_SENSOR is not valid UTF-8: {:?}", path)
        }
        Err(std::env::VarError::NotPresent) => {
            log::info!("Reading sensor from stdin");
            SensorFeed::spawn(io::stdin())
        }
    };
    feed.context("starting sensor reader")
}

/// Step the game at the frame rate until the sensor source closes
fn run(state: &mut GameState, feed: &mut SensorFeed) {
    let frame_dur = Duration::from_secs(1) / FRAME_RATE;
    let mut last_phase = state.phase;
    let mut last_score = state.score;

    while !feed.is_closed() {
        let frame_start = Instant::now();

        let input = TickInput {
            sample: feed.latest_sample(),
        };
        tick(state, &input);

        let snapshot = state.snapshot();
        let commands = build_draw_list(&snapshot, &state.layout);
        log::trace!("Frame {}: {} draw commands", snapshot.time_ticks, commands.len());

        if snapshot.score != last_score && snapshot.phase == GamePhase::Play {
            log::info!("Score: {}", snapshot.score);
        }
        if snapshot.phase != last_phase {
            log::debug!("{} -> {}", last_phase.as_str(), snapshot.phase.as_str());
            last_phase = snapshot.phase;
        }
        last_score = snapshot.score;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_dur {
            thread::sleep(frame_dur - elapsed);
        }
    }
}
