//! Game simulation module
//!
//! All gameplay logic lives here:
//! - Time only enters through the `now` argument of `tick`
//! - Randomness only through the caller's RNG
//! - No rendering, audio or camera dependencies

pub mod boss;
pub mod collision;
pub mod obstacle;
pub mod powerup;
pub mod snake;
pub mod spawn;
pub mod state;
pub mod tick;

pub use powerup::Pace;
pub use spawn::{maybe_spawn_power_up, random_point, spawn_food};
pub use state::{
    Board, Boss, Collision, Food, FoodKind, GameEvent, GamePhase, GameState, Hud, Obstacle,
    Particle, Snake, TimedBuff, level_for_score, level_progress,
};
pub use tick::{TickInput, TickReport, tick};
