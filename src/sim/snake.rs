//! Snake motion: smoothed pursuit of the fingertip plus a score-sized trail

use glam::Vec2;

use super::state::Snake;
use crate::consts::BASE_LENGTH;
use crate::pursue;

impl Snake {
    /// Ease the head toward `target` by `smoothing` of the remaining gap
    pub fn steer(&mut self, target: Vec2, smoothing: f32) {
        self.head = pursue(self.head, target, smoothing);
    }

    /// Record the head into the trail and trim it to the score-derived length.
    ///
    /// The trail grows by at most one segment per call, so a gold pickup is
    /// absorbed over the following ticks.
    pub fn update_body(&mut self, score: u32) {
        self.body.insert(0, self.head);
        if self.body.len() > target_len(score) {
            self.body.pop();
        }
    }

    /// Segments the head is allowed to bite (skips the ones right behind it)
    pub fn biteable(&self, skip: usize) -> &[Vec2] {
        self.body.get(skip..).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Full body length for a score
#[inline]
pub fn target_len(score: u32) -> usize {
    score as usize + BASE_LENGTH
}
