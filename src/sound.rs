//! Sound cues
//!
//! The core never plays audio. It names the cue for each event and the
//! audio collaborator fetches and plays the asset.

use serde::{Deserialize, Serialize};

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundCue {
    /// Normal food eaten
    EatNormal,
    /// Gold food eaten
    EatGold,
    /// Any orb collected
    Boost,
    /// Run ended
    GameOver,
}

impl SoundCue {
    /// Mixkit asset id
    pub fn asset_id(&self) -> u32 {
        match self {
            SoundCue::EatNormal => 1172,
            SoundCue::EatGold => 1173,
            SoundCue::Boost => 1717,
            SoundCue::GameOver => 1389,
        }
    }

    pub fn url(&self) -> String {
        format!(
            "https://assets.mixkit.co/sfx/preview/mixkit-{}.mp3",
            self.asset_id()
        )
    }
}

impl GameEvent {
    /// Cue to play for this event, if it has one
    pub fn sound_cue(&self) -> Option<SoundCue> {
        match self {
            GameEvent::FoodEaten => Some(SoundCue::EatNormal),
            GameEvent::GoldFoodEaten => Some(SoundCue::EatGold),
            GameEvent::BoostPickedUp | GameEvent::InvisibilityPickedUp => Some(SoundCue::Boost),
            GameEvent::GameOver { .. } => Some(SoundCue::GameOver),
            GameEvent::GameStarted
            | GameEvent::LevelUp { .. }
            | GameEvent::BossAwakened
            | GameEvent::Restarted => None,
        }
    }
}
