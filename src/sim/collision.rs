//! Collision detection and pass-through scoring
//!
//! Everything is axis-aligned: the bird is a box, each obstacle is a column
//! with a solid band above the gap and one below it.

use super::state::{Obstacle, Player};
use crate::settings::Layout;

/// Does the bird's box overlap either pipe of this obstacle?
pub fn player_hits_obstacle(player: &Player, obstacle: &Obstacle, layout: &Layout) -> bool {
    let overlaps_column = player.left() < obstacle.right(layout) && player.right() > obstacle.x;
    if !overlaps_column {
        return false;
    }

    // Upper pipe spans [0, top_height)
    if player.top() < obstacle.top_height && player.bottom() > 0 {
        return true;
    }

    // Lower pipe spans (ground_line - bottom_height, ground_line)
    player.top() < layout.ground_line && player.bottom() > obstacle.bottom_top(layout)
}

/// Index of the first obstacle (in list order) the bird collides with
pub fn find_collision(player: &Player, obstacles: &[Obstacle], layout: &Layout) -> Option<usize> {
    obstacles
        .iter()
        .position(|obstacle| player_hits_obstacle(player, obstacle, layout))
}

/// Mark every obstacle the bird has fully cleared; returns how many were new.
///
/// An obstacle counts once its right edge reaches the bird's left edge, and
/// `passed` only ever flips false -> true.
pub fn mark_passed(player: &Player, obstacles: &mut [Obstacle], layout: &Layout) -> u32 {
    let mut newly_passed = 0;
    for obstacle in obstacles.iter_mut() {
        if !obstacle.passed && obstacle.right(layout) <= player.left() {
            obstacle.passed = true;
            newly_passed += 1;
        }
    }
    newly_passed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Config;
    use glam::IVec2;

    /// 50 px wide pipes, gap 230, ground line 896
    fn layout() -> Layout {
        Config {
            pipe_width: 50,
            ..Default::default()
        }
        .layout()
        .unwrap()
    }

    fn player_at(x: i32, y: i32) -> Player {
        Player {
            pos: IVec2::new(x, y),
            size: IVec2::new(70, 64),
        }
    }

    #[test]
    fn test_inside_gap_no_collision() {
        let layout = layout();
        let obstacle = Obstacle::new(100, 300, &layout);
        let gap_bottom = obstacle.bottom_top(&layout);
        assert_eq!(gap_bottom, 530);

        // Player spans x 80..150, fully inside the gap vertically
        for y in [301, 400, gap_bottom - 64 - 1] {
            let player = player_at(80, y);
            assert!(!player_hits_obstacle(&player, &obstacle, &layout), "y={}", y);
        }
        // Touching either edge exactly is still clear
        assert!(!player_hits_obstacle(&player_at(80, 300), &obstacle, &layout));
        assert!(!player_hits_obstacle(&player_at(80, gap_bottom - 64), &obstacle, &layout));
    }

    #[test]
    fn test_outside_gap_collides() {
        let layout = layout();
        let obstacle = Obstacle::new(100, 300, &layout);

        // Clipping the upper pipe
        assert!(player_hits_obstacle(&player_at(80, 299), &obstacle, &layout));
        assert!(player_hits_obstacle(&player_at(80, 0), &obstacle, &layout));
        // Clipping the lower pipe
        assert!(player_hits_obstacle(&player_at(80, 530 - 63), &obstacle, &layout));
        assert!(player_hits_obstacle(&player_at(80, 800), &obstacle, &layout));
    }

    #[test]
    fn test_no_horizontal_overlap() {
        let layout = layout();
        let obstacle = Obstacle::new(100, 300, &layout);
        // Right edge touching the column's left edge
        assert!(!player_hits_obstacle(&player_at(30, 0), &obstacle, &layout));
        // Left edge touching the column's right edge
        assert!(!player_hits_obstacle(&player_at(150, 0), &obstacle, &layout));
        assert!(player_hits_obstacle(&player_at(149, 0), &obstacle, &layout));
    }

    #[test]
    fn test_above_screen_clears_top_pipe() {
        let layout = layout();
        let obstacle = Obstacle::new(100, 300, &layout);
        // Entirely above the screen: no part of the box overlaps [0, top)
        assert!(!player_hits_obstacle(&player_at(80, -64), &obstacle, &layout));
        assert!(player_hits_obstacle(&player_at(80, -63), &obstacle, &layout));
    }

    #[test]
    fn test_find_collision_first_in_order() {
        let layout = layout();
        let obstacles = vec![
            Obstacle::new(500, 300, &layout),
            Obstacle::new(100, 10, &layout),
            Obstacle::new(90, 10, &layout),
        ];
        let player = player_at(80, 0);
        assert_eq!(find_collision(&player, &obstacles, &layout), Some(1));
        assert_eq!(find_collision(&player, &obstacles[..1], &layout), None);
    }

    #[test]
    fn test_mark_passed_once() {
        let layout = layout();
        let player = player_at(200, 400);
        let mut obstacles = vec![
            Obstacle::new(150, 300, &layout), // right edge 200 == player left
            Obstacle::new(151, 300, &layout),
            Obstacle::new(10, 300, &layout),
        ];
        assert_eq!(mark_passed(&player, &mut obstacles, &layout), 2);
        assert!(obstacles[0].passed);
        assert!(!obstacles[1].passed);
        assert!(obstacles[2].passed);

        assert_eq!(mark_passed(&player, &mut obstacles, &layout), 0);
    }
}
