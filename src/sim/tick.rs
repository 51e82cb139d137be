//! Per-frame simulation step
//!
//! One call to [`tick`] is one rendered frame. The sample in [`TickInput`] is
//! folded in first, then the handler for the current phase runs.

use super::collision::{find_collision, mark_passed};
use super::spawn::spawn_obstacle;
use super::state::{GamePhase, GameState};

/// Input for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Latest raw sensor sample, if one arrived since the last tick
    pub sample: Option<i32>,
}

impl TickInput {
    pub fn with_sample(sample: i32) -> Self {
        Self {
            sample: Some(sample),
        }
    }
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    if let Some(sample) = input.sample {
        state.submit_sample(sample);
    }

    state.time_ticks += 1;

    // Ground scrolls in every phase
    state.ground_offset =
        (state.ground_offset + state.layout.ground_scroll_speed) % state.layout.ground_width;

    match state.phase {
        GamePhase::Start => tick_start(state),
        GamePhase::Play => tick_play(state),
        GamePhase::GameOver => tick_game_over(state),
    }
}

fn tick_start(state: &mut GameState) {
    let smoothed = state.smoothed_input();
    state.player.follow_input(smoothed, &state.layout);

    if state.player.pos.y < state.layout.play_threshold_y {
        state.enter_play();
    }
}

fn tick_play(state: &mut GameState) {
    let smoothed = state.smoothed_input();
    state.player.follow_input(smoothed, &state.layout);

    // Scroll and drop pipes that left the screen (stable, keeps spawn order)
    let layout = &state.layout;
    for obstacle in &mut state.obstacles {
        obstacle.x -= layout.scroll_speed;
    }
    let before = state.obstacles.len();
    state.obstacles.retain(|o| !o.is_offscreen(layout));
    let removed = before - state.obstacles.len();
    if removed > 0 {
        log::debug!("Removed {} offscreen obstacle(s)", removed);
    }

    if state.generator.advance() {
        let obstacle = spawn_obstacle(&mut state.rng, &state.layout);
        log::debug!(
            "Spawned obstacle #{} (top {}, bottom {})",
            state.obstacles_spawned + 1,
            obstacle.top_height,
            obstacle.bottom_height
        );
        state.obstacles.push(obstacle);
        state.obstacles_spawned += 1;
    }

    let crashed = find_collision(&state.player, &state.obstacles, &state.layout).is_some();

    // Scoring runs even on the crash tick; `passed` guards against recounting
    let passed = mark_passed(&state.player, &mut state.obstacles, &state.layout);
    state.score += passed;

    if crashed {
        state.enter_game_over();
    }
}

fn tick_game_over(state: &mut GameState) {
    state.player.fall(&state.layout);

    if state.smoothed_input() > state.layout.restart_threshold {
        state.restart();
    }
}
