//! Boss pursuit and contact

use glam::Vec2;

use super::state::Boss;
use crate::consts::{BOSS_GAIN, BOSS_HIT_RADIUS};
use crate::{distance, pursue};

impl Boss {
    /// Creep toward the snake head
    pub fn chase(&mut self, head: Vec2) {
        self.pos = pursue(self.pos, head, BOSS_GAIN);
    }

    /// True when the boss body reaches the head
    pub fn hits(&self, head: Vec2) -> bool {
        distance(self.pos, head) < BOSS_HIT_RADIUS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chase_converges_monotonically() {
        let mut boss = Boss {
            active: true,
            pos: Vec2::new(400.0, 300.0),
        };
        let head = Vec2::new(100.0, 50.0);
        let mut last = distance(boss.pos, head);
        for _ in 0..500 {
            boss.chase(head);
            let d = distance(boss.pos, head);
            assert!(d < last, "boss overshot or stalled");
            last = d;
        }
        assert!(last < 5.0);
    }

    #[test]
    fn test_hit_threshold() {
        let boss = Boss {
            active: true,
            pos: Vec2::new(0.0, 0.0),
        };
        assert!(boss.hits(Vec2::new(69.9, 0.0)));
        assert!(!boss.hits(Vec2::new(70.0, 0.0)));
    }
}
