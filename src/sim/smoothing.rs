//! Exponential moving average over raw sensor samples
//!
//! The sensor is noisy; the bird follows `s' = α·s + (1-α)·x` instead of the
//! raw reading. No bounds are applied here, clamping happens when the value is
//! mapped to a screen coordinate.

use serde::{Deserialize, Serialize};

use crate::consts::SMOOTHING_ALPHA;

/// Smoothed sensor value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorSmoother {
    /// Weight kept on the previous value
    alpha: f64,
    value: f64,
}

impl Default for SensorSmoother {
    fn default() -> Self {
        Self::new(SMOOTHING_ALPHA)
    }
}

impl SensorSmoother {
    pub fn new(alpha: f64) -> Self {
        Self { alpha, value: 0.0 }
    }

    /// Fold one raw sample into the average and return the new value
    #[inline]
    pub fn update(&mut self, sample: i32) -> f64 {
        self.value = smooth(self.value, sample as f64, self.alpha);
        self.value
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Forget history (bird drops / run restarts)
    pub fn clear(&mut self) {
        self.value = 0.0;
    }
}

/// One EMA step
#[inline]
pub fn smooth(previous: f64, sample: f64, alpha: f64) -> f64 {
    alpha * previous + (1.0 - alpha) * sample
}
