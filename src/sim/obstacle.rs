//! Obstacle drift with billiard-style bounces off the board edges

use super::state::{Board, Obstacle};

impl Obstacle {
    /// Move by one velocity step, then flip any axis whose center is within
    /// `radius` of an edge. Position is not clamped; the flipped velocity
    /// carries the obstacle back on later ticks.
    pub fn advance(&mut self, board: &Board) {
        self.pos += self.vel;

        let size = board.size();
        if self.pos.x < self.radius || self.pos.x > size.x - self.radius {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y < self.radius || self.pos.y > size.y - self.radius {
            self.vel.y = -self.vel.y;
        }
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}
