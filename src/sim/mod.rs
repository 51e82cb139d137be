//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and deterministic:
//! - One call to `tick` per frame, no wall-clock time
//! - Seeded RNG only
//! - Stable obstacle order (oldest first)
//! - No rendering or device dependencies

pub mod collision;
pub mod smoothing;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{find_collision, mark_passed, player_hits_obstacle};
pub use smoothing::SensorSmoother;
pub use spawn::{ObstacleGenerator, spawn_obstacle};
pub use state::{GamePhase, GameState, Obstacle, Player, Snapshot};
pub use tick::{TickInput, tick};
