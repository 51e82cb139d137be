//! Game configuration
//!
//! `Config` is the data-driven description (loadable from JSON); `Layout` holds
//! the derived pixel values the simulation actually runs on. Degenerate
//! configurations are rejected here, once, instead of per tick.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Configuration errors found while loading or validating
#[derive(Debug)]
pub enum ConfigError {
    /// JSON could not be parsed
    Parse(serde_json::Error),
    /// A size that must be strictly positive was not
    NonPositive { field: &'static str, value: i32 },
    /// Ground band does not leave any play field
    GroundTooTall { ground_height: i32, screen_height: i32 },
    /// Pipe gap leaves no room for a top pipe height draw
    GapTooLarge { gap: i32, field_height: i32 },
    /// Bird cannot fit between the top of the screen and the ground
    PlayerTooTall { player_height: i32, field_height: i32 },
    /// Spawn cadence rounds down to zero ticks
    SpawnIntervalTooShort { interval: i32 },
    /// Smoothing factor outside [0, 1]
    InvalidSmoothing(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "invalid config JSON: {}", e),
            ConfigError::NonPositive { field, value } => {
                write!(f, "{} must be positive (got {})", field, value)
            }
            ConfigError::GroundTooTall {
                ground_height,
                screen_height,
            } => write!(
                f,
                "ground height {} leaves no play field on a {} px screen",
                ground_height, screen_height
            ),
            ConfigError::GapTooLarge { gap, field_height } => write!(
                f,
                "pipe gap {} must be smaller than the play field height {}",
                gap, field_height
            ),
            ConfigError::PlayerTooTall {
                player_height,
                field_height,
            } => write!(
                f,
                "bird height {} does not fit in play field height {}",
                player_height, field_height
            ),
            ConfigError::SpawnIntervalTooShort { interval } => {
                write!(f, "spawn interval must be at least 1 tick (got {})", interval)
            }
            ConfigError::InvalidSmoothing(alpha) => {
                write!(f, "smoothing factor must be within [0, 1] (got {})", alpha)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

/// Game configuration (sprite sizes are whatever the art assets measure)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // === Screen ===
    pub screen_width: i32,
    pub screen_height: i32,

    // === Sprites ===
    pub bird_width: i32,
    pub bird_height: i32,
    pub background_width: i32,
    pub background_height: i32,
    pub ground_width: i32,
    pub ground_height: i32,
    pub pipe_width: i32,
    pub pipe_height: i32,
    pub score_panel_width: i32,

    // === Obstacles ===
    /// Pipe gap as a fraction of screen width
    pub pipe_gap_fraction: f64,
    /// Ticks between spawns, as a multiple of pipe width
    pub spawn_interval_factor: f64,
    pub spawn_margin: i32,

    // === Motion (px/tick) ===
    pub scroll_speed: i32,
    pub ground_scroll_speed: i32,
    pub fall_speed: i32,

    // === Input ===
    pub play_lift: i32,
    pub restart_threshold: f64,
    pub smoothing_alpha: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            bird_width: BIRD_WIDTH,
            bird_height: BIRD_HEIGHT,
            background_width: BACKGROUND_WIDTH,
            background_height: BACKGROUND_HEIGHT,
            ground_width: GROUND_WIDTH,
            ground_height: GROUND_HEIGHT,
            pipe_width: PIPE_WIDTH,
            pipe_height: PIPE_HEIGHT,
            score_panel_width: SCORE_PANEL_WIDTH,

            pipe_gap_fraction: PIPE_GAP_FRACTION,
            spawn_interval_factor: SPAWN_INTERVAL_FACTOR,
            spawn_margin: SPAWN_MARGIN,

            scroll_speed: SCROLL_SPEED,
            ground_scroll_speed: GROUND_SCROLL_SPEED,
            fall_speed: FALL_SPEED,

            play_lift: PLAY_LIFT,
            restart_threshold: RESTART_THRESHOLD,
            smoothing_alpha: SMOOTHING_ALPHA,
        }
    }
}

impl Config {
    /// Parse a JSON config; missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.layout().map(|_| ())
    }

    /// Compute derived pixel values, rejecting degenerate configurations
    pub fn layout(&self) -> Result<Layout, ConfigError> {
        for (field, value) in [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("bird_width", self.bird_width),
            ("bird_height", self.bird_height),
            ("ground_width", self.ground_width),
            ("pipe_width", self.pipe_width),
        ] {
            if value <= 0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        if self.ground_height < 0 || self.ground_height >= self.screen_height {
            return Err(ConfigError::GroundTooTall {
                ground_height: self.ground_height,
                screen_height: self.screen_height,
            });
        }
        let ground_line = self.screen_height - self.ground_height;

        if !(0.0..=1.0).contains(&self.smoothing_alpha) {
            return Err(ConfigError::InvalidSmoothing(self.smoothing_alpha));
        }

        let gap = (self.screen_width as f64 * self.pipe_gap_fraction) as i32;
        if gap >= ground_line {
            return Err(ConfigError::GapTooLarge {
                gap,
                field_height: ground_line,
            });
        }

        let spawn_interval = (self.pipe_width as f64 * self.spawn_interval_factor) as i32;
        if spawn_interval < 1 {
            return Err(ConfigError::SpawnIntervalTooShort {
                interval: spawn_interval,
            });
        }

        let player_max_y = ground_line - self.bird_height;
        if player_max_y < 0 {
            return Err(ConfigError::PlayerTooTall {
                player_height: self.bird_height,
                field_height: ground_line,
            });
        }

        Ok(Layout {
            screen_width: self.screen_width,
            screen_height: self.screen_height,
            ground_line,
            player_x: (self.screen_width as f64 * BIRD_X_FRACTION) as i32 - self.bird_width / 2,
            player_width: self.bird_width,
            player_height: self.bird_height,
            player_max_y,
            play_threshold_y: player_max_y - self.play_lift,
            obstacle_width: self.pipe_width,
            obstacle_height: self.pipe_height,
            gap,
            spawn_interval,
            spawn_x: self.screen_width + self.spawn_margin,
            scroll_speed: self.scroll_speed,
            fall_speed: self.fall_speed,
            ground_width: self.ground_width,
            ground_height: self.ground_height,
            ground_scroll_speed: self.ground_scroll_speed,
            ground_tiles: self.background_width / self.ground_width + 2,
            background_width: self.background_width,
            background_height: self.background_height,
            score_panel_width: self.score_panel_width,
            restart_threshold: self.restart_threshold,
            smoothing_alpha: self.smoothing_alpha,
        })
    }
}

/// Derived, validated pixel layout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub screen_width: i32,
    pub screen_height: i32,
    /// Top of the ground band; height of the play field
    pub ground_line: i32,

    pub player_x: i32,
    pub player_width: i32,
    pub player_height: i32,
    /// Lowest the bird may go (resting on the ground)
    pub player_max_y: i32,
    /// Start -> Play once the bird is above this
    pub play_threshold_y: i32,

    pub obstacle_width: i32,
    pub obstacle_height: i32,
    pub gap: i32,
    pub spawn_interval: i32,
    pub spawn_x: i32,

    pub scroll_speed: i32,
    pub fall_speed: i32,

    pub ground_width: i32,
    pub ground_height: i32,
    pub ground_scroll_speed: i32,
    pub ground_tiles: i32,
    pub background_width: i32,
    pub background_height: i32,
    pub score_panel_width: i32,

    pub restart_threshold: f64,
    pub smoothing_alpha: f64,
}

impl Layout {
    /// Exclusive upper bound of the top pipe height draw
    #[inline]
    pub fn top_height_range(&self) -> i32 {
        self.ground_line - self.gap
    }
}
