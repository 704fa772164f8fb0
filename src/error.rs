//! Error taxonomy
//!
//! A missing hand is not an error. Everything here is either a caller bug rejected at a
//! construction/tick boundary or a terminal collaborator failure.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid board {width}x{height}: each side must be at least {min}")]
    InvalidBoard { width: u32, height: u32, min: u32 },

    #[error("fingertip coordinates must be finite, got ({x}, {y})")]
    InvalidFingertip { x: f32, y: f32 },

    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    /// Camera or hand tracker gave up; the session cannot continue.
    #[error("hand tracking failed: {0}")]
    Tracking(String),

    #[error("failed to read settings: {0}")]
    SettingsIo(#[from] std::io::Error),

    /// Bad settings file, bad state snapshot, or a state that failed to serialize
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
