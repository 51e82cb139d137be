//! Sensor Flappy - a Flappy Bird style game steered by an analog sensor
//!
//! Core modules:
//! - `sim`: Deterministic simulation (smoothing, obstacles, collisions, game state)
//! - `renderer`: Draw-list construction from a read-only snapshot
//! - `sensor`: Line framing and parsing for the serial sensor stream
//! - `settings`: Data-driven configuration and derived layout

pub mod renderer;
pub mod sensor;
pub mod settings;
pub mod sim;

pub use settings::{Config, ConfigError, Layout};

/// Game configuration constants
pub mod consts {
    /// Frame rate the driver steps the simulation at
    pub const FRAME_RATE: u32 = 60;

    /// Play field dimensions
    pub const SCREEN_WIDTH: i32 = 768;
    pub const SCREEN_HEIGHT: i32 = 1024;

    /// Bird sprite frame size (3 frames in one strip)
    pub const BIRD_WIDTH: i32 = 92;
    pub const BIRD_HEIGHT: i32 = 64;
    /// Bird x as a fraction of screen width (sprite is centered on it)
    pub const BIRD_X_FRACTION: f64 = 0.4;

    /// Sprite sizes
    pub const BACKGROUND_WIDTH: i32 = 768;
    pub const BACKGROUND_HEIGHT: i32 = 896;
    pub const GROUND_WIDTH: i32 = 48;
    pub const GROUND_HEIGHT: i32 = 128;
    pub const PIPE_WIDTH: i32 = 138;
    pub const PIPE_HEIGHT: i32 = 793;
    pub const SCORE_PANEL_WIDTH: i32 = 480;

    /// Gap between top and bottom pipe, as a fraction of screen width
    pub const PIPE_GAP_FRACTION: f64 = 0.3;
    /// Spawn cadence, as a multiple of pipe width (ticks)
    pub const SPAWN_INTERVAL_FACTOR: f64 = 1.2;
    /// New pipes appear this far past the right edge
    pub const SPAWN_MARGIN: i32 = 128;

    /// Pixels per tick
    pub const SCROLL_SPEED: i32 = 4;
    pub const GROUND_SCROLL_SPEED: i32 = 4;
    pub const FALL_SPEED: i32 = 32;

    /// Bird must rise this far above its resting height to start a run
    pub const PLAY_LIFT: i32 = 100;
    /// Smoothed sensor value needed to leave the game over screen
    pub const RESTART_THRESHOLD: f64 = 500.0;
    /// Weight kept on history by the exponential moving average
    pub const SMOOTHING_ALPHA: f64 = 0.95;
}
