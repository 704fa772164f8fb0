//! Collision checks for the snake head
//!
//! Walls always count. Obstacles and the snake's own body are ignored while
//! invisibility is active. The boss is handled by the tick itself since it
//! fires before the HUD update.

use glam::Vec2;

use super::state::{Board, Collision, GameState, Obstacle};
use crate::consts::*;
use crate::distance;

/// Head outside the inset wall border
pub fn hits_wall(head: Vec2, board: &Board) -> bool {
    let size = board.size();
    head.x < WALL_INSET
        || head.x > size.x - WALL_INSET
        || head.y < WALL_INSET
        || head.y > size.y - WALL_INSET
}

/// Head touching any obstacle
pub fn hits_obstacle(head: Vec2, obstacles: &[Obstacle]) -> bool {
    obstacles
        .iter()
        .any(|o| distance(head, o.pos) < o.radius + OBSTACLE_HIT_PADDING)
}

/// Head overlapping its own trail, past the segments right behind it
pub fn bites_self(head: Vec2, biteable: &[Vec2]) -> bool {
    biteable.iter().any(|s| distance(head, *s) < SELF_HIT_RADIUS)
}

/// First collision that ends the run this tick, if any
pub fn check(state: &GameState) -> Option<Collision> {
    let head = state.snake.head;

    if hits_wall(head, &state.board) {
        return Some(Collision::Wall);
    }
    if state.invisibility.active {
        return None;
    }
    if hits_obstacle(head, &state.obstacles) {
        return Some(Collision::Obstacle);
    }
    if bites_self(head, state.snake.biteable(SELF_HIT_SKIP)) {
        return Some(Collision::SelfBite);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running_state() -> GameState {
        GameState::new(Board::default())
    }

    #[test]
    fn test_wall_inset() {
        let board = Board::default();
        assert!(!hits_wall(Vec2::new(5.0, 5.0), &board));
        assert!(!hits_wall(Vec2::new(795.0, 595.0), &board));
        assert!(hits_wall(Vec2::new(4.9, 300.0), &board));
        assert!(hits_wall(Vec2::new(400.0, 595.1), &board));
    }

    #[test]
    fn test_obstacle_reach() {
        let obstacles = [Obstacle {
            pos: Vec2::new(200.0, 200.0),
            radius: 25.0,
            vel: Vec2::ZERO,
        }];
        assert!(hits_obstacle(Vec2::new(234.0, 200.0), &obstacles));
        assert!(!hits_obstacle(Vec2::new(235.0, 200.0), &obstacles));
    }

    #[test]
    fn test_self_bite_ignores_neck() {
        let mut state = running_state();
        let head = Vec2::new(300.0, 300.0);
        state.snake.head = head;
        // Four segments piled on the head are the neck and never count
        state.snake.body = vec![head; 4];
        assert_eq!(check(&state), None);

        state.snake.body.push(Vec2::new(305.0, 300.0));
        assert_eq!(check(&state), Some(Collision::SelfBite));
    }

    #[test]
    fn test_invisibility_skips_obstacles_and_self() {
        let mut state = running_state();
        let obstacle = state.obstacles[0].pos;
        state.snake.head = obstacle + Vec2::new(3.0, 4.0);
        assert_eq!(check(&state), Some(Collision::Obstacle));

        state.invisibility.activate(0.0);
        assert_eq!(check(&state), None);
    }

    #[test]
    fn test_invisibility_keeps_walls() {
        let mut state = running_state();
        state.invisibility.activate(0.0);
        state.snake.head = Vec2::new(2.0, 300.0);
        assert_eq!(check(&state), Some(Collision::Wall));
    }
}
