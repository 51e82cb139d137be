//! Obstacle generation
//!
//! A tick counter paces new pipe pairs; each pair gets a uniformly drawn gap
//! position.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::Obstacle;
use crate::settings::Layout;

/// Spawn pacing counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObstacleGenerator {
    counter: i32,
    /// Ticks between spawns
    interval: i32,
}

impl ObstacleGenerator {
    pub fn new(interval: i32) -> Self {
        Self {
            counter: 0,
            interval,
        }
    }

    #[inline]
    pub fn counter(&self) -> i32 {
        self.counter
    }

    pub fn reset(&mut self) {
        self.counter = 0;
    }

    /// Count one tick; returns true (and rewinds) when a spawn is due
    pub fn advance(&mut self) -> bool {
        self.counter += 1;
        if self.counter >= self.interval {
            self.counter = 0;
            true
        } else {
            false
        }
    }
}

/// Build a fresh pipe pair just past the right edge of the screen
pub fn spawn_obstacle<R: Rng + ?Sized>(rng: &mut R, layout: &Layout) -> Obstacle {
    // Layout validation guarantees a non-empty range
    let top_height = rng.random_range(0..layout.top_height_range());
    Obstacle::new(layout.spawn_x, top_height, layout)
}
