//! Game session state and core simulation types
//!
//! `GameState` is the single owner of everything that changes during play:
//! the bird, the pipe field, scores and the smoothed sensor value.

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::smoothing::SensorSmoother;
use super::spawn::ObstacleGenerator;
use crate::sensor::parse_sample;
use crate::settings::{Config, ConfigError, Layout};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Bird follows the sensor, waiting to be lifted
    Start,
    /// Pipes scroll, collisions and scoring active
    Play,
    /// Bird drops to the ground, waiting for the restart gesture
    GameOver,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Start => "Start",
            GamePhase::Play => "Play",
            GamePhase::GameOver => "GameOver",
        }
    }
}

/// A pipe pair; one gap in the pipe field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge
    pub x: i32,
    /// Upper pipe extent, measured down from the top of the screen
    pub top_height: i32,
    /// Lower pipe extent, measured up from the ground line
    pub bottom_height: i32,
    /// Set once the bird is fully past; gates scoring
    pub passed: bool,
}

impl Obstacle {
    /// New pipe pair at `x`; the bottom height is whatever the gap leaves
    pub fn new(x: i32, top_height: i32, layout: &Layout) -> Self {
        Self {
            x,
            top_height,
            bottom_height: layout.ground_line - top_height - layout.gap,
            passed: false,
        }
    }

    /// Right edge
    #[inline]
    pub fn right(&self, layout: &Layout) -> i32 {
        self.x + layout.obstacle_width
    }

    /// Top of the lower pipe
    #[inline]
    pub fn bottom_top(&self, layout: &Layout) -> i32 {
        layout.ground_line - self.bottom_height
    }

    /// Fully scrolled past the left edge
    #[inline]
    pub fn is_offscreen(&self, layout: &Layout) -> bool {
        self.x < -layout.obstacle_width
    }
}

/// The bird
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: IVec2,
    pub size: IVec2,
}

impl Player {
    pub fn new(layout: &Layout) -> Self {
        Self {
            pos: IVec2::new(layout.player_x, layout.player_max_y),
            size: IVec2::new(layout.player_width, layout.player_height),
        }
    }

    /// Map the smoothed sensor value to a height above the ground.
    ///
    /// Only the bottom is clamped; large readings can carry the bird above the
    /// top edge.
    pub fn follow_input(&mut self, smoothed: f64, layout: &Layout) {
        // Widened so extreme readings saturate instead of overflowing
        let y = layout.screen_height as i64 - smoothed as i64 - self.size.y as i64;
        self.pos.y = y.clamp(i32::MIN as i64, layout.player_max_y as i64) as i32;
    }

    /// Drop toward the ground after a crash
    pub fn fall(&mut self, layout: &Layout) {
        self.pos.y = self
            .pos
            .y
            .saturating_add(layout.fall_speed)
            .min(layout.player_max_y);
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }
}

/// Read-only view handed to the render adapter each frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    pub best_score: u32,
    pub ground_offset: i32,
    pub time_ticks: u64,
}

/// Complete game session (deterministic for a given seed and sample trace)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Validated pixel layout
    pub layout: Layout,
    /// Seed the obstacle RNG was created from
    pub seed: u64,
    pub(crate) rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    pub player: Player,
    /// Pipe pairs, oldest (leftmost) first
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    /// Best score this process; never reset
    pub best_score: u32,
    pub(crate) generator: ObstacleGenerator,
    pub(crate) smoother: SensorSmoother,
    /// Cosmetic ground scroll, wraps at the ground tile width
    pub ground_offset: i32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Pipe pairs created this session
    pub obstacles_spawned: u64,
}

impl GameState {
    /// Create a session from a config, rejecting degenerate layouts
    pub fn new(config: &Config, seed: u64) -> Result<Self, ConfigError> {
        Ok(Self::from_layout(config.layout()?, seed))
    }

    /// Create a session from an already validated layout
    pub fn from_layout(layout: Layout, seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Start,
            player: Player::new(&layout),
            obstacles: Vec::new(),
            score: 0,
            best_score: 0,
            generator: ObstacleGenerator::new(layout.spawn_interval),
            smoother: SensorSmoother::new(layout.smoothing_alpha),
            ground_offset: 0,
            time_ticks: 0,
            obstacles_spawned: 0,
            layout,
        }
    }

    /// Fold a raw sensor sample into the smoothed input
    pub fn submit_sample(&mut self, sample: i32) {
        self.smoother.update(sample);
    }

    /// Parse and submit one `"<value>,<ignored>"` line.
    ///
    /// Malformed lines are dropped without touching the smoothed value;
    /// returns whether the line was accepted.
    pub fn submit_line(&mut self, line: &str) -> bool {
        match parse_sample(line) {
            Some(sample) => {
                self.submit_sample(sample);
                true
            }
            None => {
                log::trace!("Discarded sensor line {:?}", line);
                false
            }
        }
    }

    #[inline]
    pub fn smoothed_input(&self) -> f64 {
        self.smoother.value()
    }

    #[inline]
    pub fn generation_counter(&self) -> i32 {
        self.generator.counter()
    }

    /// Start -> Play
    pub(crate) fn enter_play(&mut self) {
        log::info!("Bird lifted at y={}, run started", self.player.pos.y);
        self.phase = GamePhase::Play;
    }

    /// Play -> GameOver
    pub(crate) fn enter_game_over(&mut self) {
        self.best_score = self.best_score.max(self.score);
        self.smoother.clear();
        self.phase = GamePhase::GameOver;
        log::info!(
            "Crashed with score {} (best {})",
            self.score,
            self.best_score
        );
    }

    /// GameOver -> Start
    pub(crate) fn restart(&mut self) {
        self.smoother.clear();
        self.generator.reset();
        self.obstacles.clear();
        self.score = 0;
        self.phase = GamePhase::Start;
        log::info!("Restarted (best {})", self.best_score);
    }

    /// Capture what the render adapter needs for this frame
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            player: self.player,
            obstacles: self.obstacles.clone(),
            score: self.score,
            best_score: self.best_score,
            ground_offset: self.ground_offset,
            time_ticks: self.time_ticks,
        }
    }
}
