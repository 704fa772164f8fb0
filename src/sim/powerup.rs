//! Timed buffs and the level-scaled pace they modulate

use super::state::TimedBuff;
use crate::consts::*;

impl TimedBuff {
    pub fn activate(&mut self, now: f64) {
        self.active = true;
        self.activated_at = now;
    }

    /// Switch off once more than `duration` seconds have passed since activation
    pub fn expire(&mut self, now: f64, duration: f64) {
        if self.active && now - self.activated_at > duration {
            self.active = false;
        }
    }
}

/// Per-tick movement parameters: head smoothing and the suggested frame delay
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pace {
    pub smoothing: f32,
    pub delay_secs: f32,
}

impl Pace {
    /// Level-scaled pace: faster frames and snappier tracking as levels rise
    pub fn for_level(level: u32) -> Self {
        let steps = level.saturating_sub(1) as f32;
        Self {
            smoothing: (BASE_SMOOTHING + steps * SMOOTHING_STEP).min(MAX_SMOOTHING),
            delay_secs: (BASE_FRAME_DELAY - steps * FRAME_DELAY_STEP).max(MIN_FRAME_DELAY),
        }
    }

    /// Apply the speed boost override when it is active
    pub fn boosted(self, speed_boost: &TimedBuff) -> Self {
        if !speed_boost.active {
            return self;
        }
        Self {
            smoothing: BOOST_SMOOTHING,
            delay_secs: (self.delay_secs * BOOST_DELAY_SCALE).max(BOOST_MIN_FRAME_DELAY),
        }
    }
}
