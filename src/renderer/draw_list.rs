//! Frame composition
//!
//! Turns a [`Snapshot`] into an ordered list of blits and texts, back to
//! front. Whoever owns the window only has to execute the commands.

use glam::IVec2;
use serde::Serialize;

use crate::settings::Layout;
use crate::sim::{GamePhase, Obstacle, Snapshot};

/// Score text color
pub const SCORE_COLOR: [u8; 3] = [255, 0, 0];

/// Art assets the game draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Sprite {
    Background,
    /// One frame of the bird strip
    Bird { frame: usize },
    Pipe,
    Ground,
    ScorePanel,
}

/// A single draw operation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    /// Blit with the top-left corner at `pos`
    Sprite {
        sprite: Sprite,
        pos: IVec2,
        transparent: bool,
    },
    /// Blit rotated clockwise by `degrees` around `center`
    Rotated {
        sprite: Sprite,
        center: IVec2,
        degrees: f32,
        transparent: bool,
    },
    /// Text horizontally centered on `center_x`, top at `y`
    Text {
        text: String,
        center_x: i32,
        y: i32,
        color: [u8; 3],
    },
}

/// Compose one frame
pub fn build_draw_list(snapshot: &Snapshot, layout: &Layout) -> Vec<DrawCommand> {
    let mut commands =
        Vec::with_capacity(8 + 2 * snapshot.obstacles.len() + layout.ground_tiles as usize);

    commands.push(DrawCommand::Sprite {
        sprite: Sprite::Background,
        pos: IVec2::ZERO,
        transparent: false,
    });

    match snapshot.phase {
        GamePhase::Start => {
            commands.push(bird(snapshot, 0));
        }
        GamePhase::Play => {
            for obstacle in &snapshot.obstacles {
                push_pipes(&mut commands, obstacle, layout);
            }
            commands.push(bird(snapshot, 0));
            commands.push(score_text(snapshot.score, layout, 0.2));
        }
        GamePhase::GameOver => {
            // Crashed bird lies nose down
            let player = &snapshot.player;
            commands.push(DrawCommand::Rotated {
                sprite: Sprite::Bird { frame: 0 },
                center: player.pos + player.size / 2,
                degrees: 90.0,
                transparent: true,
            });
            commands.push(DrawCommand::Sprite {
                sprite: Sprite::ScorePanel,
                pos: IVec2::new(
                    (layout.screen_width - layout.score_panel_width) / 2,
                    height_fraction(layout, 0.2),
                ),
                transparent: true,
            });
            commands.push(score_text(snapshot.score, layout, 0.26));
            commands.push(score_text(snapshot.best_score, layout, 0.34));
        }
    }

    for i in 0..layout.ground_tiles {
        commands.push(DrawCommand::Sprite {
            sprite: Sprite::Ground,
            pos: IVec2::new(
                layout.ground_width * i - snapshot.ground_offset,
                layout.background_height,
            ),
            transparent: false,
        });
    }

    commands
}

fn bird(snapshot: &Snapshot, frame: usize) -> DrawCommand {
    DrawCommand::Sprite {
        sprite: Sprite::Bird { frame },
        pos: snapshot.player.pos,
        transparent: true,
    }
}

/// Upper pipe is the pipe sprite flipped, hanging down to `top_height`
fn push_pipes(commands: &mut Vec<DrawCommand>, obstacle: &Obstacle, layout: &Layout) {
    commands.push(DrawCommand::Rotated {
        sprite: Sprite::Pipe,
        center: IVec2::new(
            obstacle.x + layout.obstacle_width / 2,
            obstacle.top_height - layout.obstacle_height / 2,
        ),
        degrees: 180.0,
        transparent: false,
    });
    commands.push(DrawCommand::Sprite {
        sprite: Sprite::Pipe,
        pos: IVec2::new(obstacle.x, obstacle.bottom_top(layout)),
        transparent: false,
    });
}

fn score_text(score: u32, layout: &Layout, y_fraction: f64) -> DrawCommand {
    DrawCommand::Text {
        text: score.to_string(),
        center_x: layout.screen_width / 2,
        y: height_fraction(layout, y_fraction),
        color: SCORE_COLOR,
    }
}

#[inline]
fn height_fraction(layout: &Layout, fraction: f64) -> i32 {
    (layout.screen_height as f64 * fraction) as i32
}
