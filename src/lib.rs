//! Hand Snake - a gesture-controlled arcade snake
//!
//! Core modules:
//! - `sim`: Per-frame game simulation (motion, spawning, collisions, scoring)
//! - `game`: Session driver and the collaborator seams (hand tracker, frame sink)
//! - `clock`: Injectable time source for power-up timers
//! - `settings`: Session settings and cosmetic themes
//! - `sound`: Sound cues derived from game events

pub mod clock;
pub mod error;
pub mod game;
pub mod settings;
pub mod sim;
pub mod sound;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::GameError;
pub use game::{FrameSink, Game, HandTracker};
pub use settings::{Palette, Settings, Theme};
pub use sound::SoundCue;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Reference board dimensions
    pub const BOARD_WIDTH: u32 = 800;
    pub const BOARD_HEIGHT: u32 = 600;
    /// Smallest accepted board side (spawn margins and obstacles must fit)
    pub const MIN_BOARD_SIDE: u32 = 100;

    /// Body segments on top of the score
    pub const BASE_LENGTH: usize = 3;
    /// Score needed per level
    pub const POINTS_PER_LEVEL: u32 = 5;

    /// Frame pacing (seconds): 0.04 at level 1, 3ms faster per level, floor 15ms
    pub const BASE_FRAME_DELAY: f32 = 0.04;
    pub const FRAME_DELAY_STEP: f32 = 0.003;
    pub const MIN_FRAME_DELAY: f32 = 0.015;
    /// Head smoothing: 0.12 at level 1, +0.01 per level, cap 0.20
    pub const BASE_SMOOTHING: f32 = 0.12;
    pub const SMOOTHING_STEP: f32 = 0.01;
    pub const MAX_SMOOTHING: f32 = 0.20;

    /// Margin kept free along every edge when spawning
    pub const SPAWN_MARGIN: u32 = 20;
    /// Minimum distance between fresh food and any body segment
    pub const FOOD_CLEARANCE: f32 = 25.0;
    /// Chance a respawned food is gold
    pub const GOLD_FOOD_CHANCE: f64 = 0.2;
    /// Rejection-sampling budget before falling back to a lattice scan
    pub const MAX_SPAWN_ATTEMPTS: u32 = 1_000;

    /// Head-to-item distance that counts as eating/collecting
    pub const PICKUP_RADIUS: f32 = 20.0;

    /// Per-tick spawn chances for the orbs
    pub const BLUE_ORB_CHANCE: f64 = 0.01;
    pub const INVISIBLE_ORB_CHANCE: f64 = 0.005;
    /// Buff durations (seconds)
    pub const SPEED_BOOST_SECS: f64 = 7.0;
    pub const INVISIBILITY_SECS: f64 = 6.0;
    /// Speed boost overrides
    pub const BOOST_SMOOTHING: f32 = 0.28;
    pub const BOOST_DELAY_SCALE: f32 = 0.6;
    pub const BOOST_MIN_FRAME_DELAY: f32 = 0.01;

    /// Obstacles
    pub const OBSTACLE_RADIUS: f32 = 25.0;
    pub const OBSTACLE_SPEED: f32 = 2.0;
    /// Extra reach added to the obstacle radius for head contact
    pub const OBSTACLE_HIT_PADDING: f32 = 10.0;

    /// Boss wakes at this level and chases the head with a slow gain
    pub const BOSS_LEVEL: u32 = 10;
    pub const BOSS_GAIN: f32 = 0.01;
    pub const BOSS_HIT_RADIUS: f32 = 70.0;

    /// Wall border is drawn this far inside the board edge
    pub const WALL_INSET: f32 = 5.0;
    /// Head-to-segment distance that counts as biting
    pub const SELF_HIT_RADIUS: f32 = 10.0;
    /// Segments nearest the head ignored by the self-collision check
    pub const SELF_HIT_SKIP: usize = 4;

    /// Lifetime of a head trail particle (ticks)
    pub const PARTICLE_LIFE: u32 = 15;
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// First-order lag toward `target`: moves `gain` of the remaining gap, no momentum.
#[inline]
pub fn pursue(current: Vec2, target: Vec2, gain: f32) -> Vec2 {
    current + (target - current) * gain
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        assert_eq!(distance(Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0)), 5.0);
        assert_eq!(distance(Vec2::new(7.0, 7.0), Vec2::new(7.0, 7.0)), 0.0);
    }

    #[test]
    fn test_pursue_moves_fraction_of_gap() {
        let next = pursue(Vec2::new(400.0, 300.0), Vec2::new(420.0, 300.0), 0.12);
        assert!((next.x - 402.4).abs() < 1e-4);
        assert!((next.y - 300.0).abs() < 1e-4);
    }
}
