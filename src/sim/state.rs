//! Game state and core simulation types
//!
//! Everything a renderer needs to draw a frame lives in `GameState`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::GameError;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Idle until the tracker reports a hand
    WaitingForHand,
    /// Active gameplay
    Running,
    /// Run ended, waiting for a hand to restart
    GameOver,
}

/// Playing field dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    width: u32,
    height: u32,
}

/// Unchecked board as it appears in a snapshot
#[derive(Deserialize)]
struct RawBoard {
    width: u32,
    height: u32,
}

impl TryFrom<RawBoard> for Board {
    type Error = GameError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        Board::new(raw.width, raw.height)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
        }
    }
}

impl Board {
    pub fn new(width: u32, height: u32) -> Result<Self, GameError> {
        if width < MIN_BOARD_SIDE || height < MIN_BOARD_SIDE {
            return Err(GameError::InvalidBoard {
                width,
                height,
                min: MIN_BOARD_SIDE,
            });
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// Map a normalized [0,1]² fingertip onto board pixels
    #[inline]
    pub fn scale_fingertip(&self, normalized: Vec2) -> Vec2 {
        normalized * self.size()
    }
}

/// Food flavours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FoodKind {
    #[default]
    Normal,
    Gold,
}

impl FoodKind {
    /// Score awarded for eating this food
    pub fn points(&self) -> u32 {
        match self {
            FoodKind::Normal => 1,
            FoodKind::Gold => 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub pos: Vec2,
    pub kind: FoodKind,
}

/// The player's snake. `body[0]` is a copy of the head.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snake {
    /// Smoothed head position
    pub head: Vec2,
    /// Trail of past head positions, newest first
    pub body: Vec<Vec2>,
}

impl Default for Snake {
    fn default() -> Self {
        let head = Vec2::new(100.0, 50.0);
        Self {
            head,
            body: vec![head, Vec2::new(90.0, 50.0), Vec2::new(80.0, 50.0)],
        }
    }
}

/// A drifting round obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub pos: Vec2,
    pub radius: f32,
    pub vel: Vec2,
}

/// A timed buff (speed boost, invisibility)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TimedBuff {
    pub active: bool,
    /// Clock time (seconds) of the last activation
    pub activated_at: f64,
}

/// The boss that hunts the snake from level 10 on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Boss {
    pub active: bool,
    pub pos: Vec2,
}

/// A fading trail particle (cosmetic)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    /// Ticks left before removal
    pub life: u32,
}

/// What ended a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Collision {
    Wall,
    Obstacle,
    SelfBite,
    Boss,
}

/// Discrete things that happened during a tick, for audio/UI collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    GameStarted,
    FoodEaten,
    GoldFoodEaten,
    BoostPickedUp,
    InvisibilityPickedUp,
    LevelUp { level: u32 },
    BossAwakened,
    GameOver { score: u32, cause: Collision },
    Restarted,
}

/// Values shown in the heads-up display
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hud {
    pub score: u32,
    pub high_score: u32,
    pub level: u32,
    /// Fill of the level-up bar, in [0, 1)
    pub progress: f32,
}

/// Level reached with the given score
#[inline]
pub fn level_for_score(score: u32) -> u32 {
    1 + score / POINTS_PER_LEVEL
}

/// Progress toward the next level
#[inline]
pub fn level_progress(score: u32) -> f32 {
    (score % POINTS_PER_LEVEL) as f32 / POINTS_PER_LEVEL as f32
}

/// Complete state of one play session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub phase: GamePhase,
    pub snake: Snake,
    pub score: u32,
    /// Best score this process has seen; survives restarts
    pub high_score: u32,
    pub level: u32,
    pub food: Food,
    pub obstacles: Vec<Obstacle>,
    /// Speed-boost pickup, if one is on the board
    pub blue_orb: Option<Vec2>,
    /// Invisibility pickup, if one is on the board
    pub invisible_orb: Option<Vec2>,
    pub speed_boost: TimedBuff,
    pub invisibility: TimedBuff,
    pub boss: Boss,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    /// Set once the game-over event has been emitted for this run
    pub game_over_signalled: bool,
}

impl GameState {
    /// Fresh session on the given board
    pub fn new(board: Board) -> Self {
        Self::with_high_score(board, 0)
    }

    /// Fresh session that keeps an earlier high score
    pub fn with_high_score(board: Board, high_score: u32) -> Self {
        let size = board.size();
        let (w, h) = (board.width() as f32, board.height() as f32);
        let center = (size / 2.0).floor();

        let obstacle = |x: f32, y: f32, vx: f32, vy: f32| Obstacle {
            pos: Vec2::new(x.floor(), y.floor()),
            radius: OBSTACLE_RADIUS,
            vel: Vec2::new(vx, vy) * OBSTACLE_SPEED,
        };

        Self {
            board,
            phase: GamePhase::WaitingForHand,
            snake: Snake::default(),
            score: 0,
            high_score,
            level: 1,
            food: Food {
                pos: center,
                kind: FoodKind::Normal,
            },
            obstacles: vec![
                obstacle(w / 2.0, h / 3.0, 1.0, 1.0),
                obstacle(w / 3.0, 2.0 * h / 3.0, -1.0, 1.0),
                obstacle(2.0 * w / 3.0, h / 2.0, 1.0, -1.0),
            ],
            blue_orb: None,
            invisible_orb: None,
            speed_boost: TimedBuff::default(),
            invisibility: TimedBuff::default(),
            boss: Boss {
                active: false,
                pos: center,
            },
            particles: Vec::new(),
            game_over_signalled: false,
        }
    }

    /// Replace the run with a fresh one, carrying the high score over
    pub fn reset(&mut self) {
        *self = Self::with_high_score(self.board, self.high_score);
    }

    pub fn hud(&self) -> Hud {
        Hud {
            score: self.score,
            high_score: self.high_score,
            level: self.level,
            progress: level_progress(self.score),
        }
    }

    /// Serialize the whole state for a renderer or a debug dump
    pub fn to_json(&self) -> Result<String, GameError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Restore a snapshot written by `to_json`; the board is re-validated
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_rejects_tiny_sides() {
        assert!(Board::new(800, 600).is_ok());
        assert!(matches!(
            Board::new(800, 10),
            Err(GameError::InvalidBoard { height: 10, .. })
        ));
        assert!(Board::new(0, 600).is_err());
    }

    #[test]
    fn test_scale_fingertip() {
        let board = Board::default();
        assert_eq!(board.scale_fingertip(Vec2::new(0.5, 0.5)), Vec2::new(400.0, 300.0));
        assert_eq!(board.scale_fingertip(Vec2::new(0.25, 1.0)), Vec2::new(200.0, 600.0));
    }

    #[test]
    fn test_level_and_progress() {
        assert_eq!(level_for_score(0), 1);
        assert_eq!(level_for_score(7), 2);
        assert!((level_progress(7) - 0.4).abs() < 1e-6);
        assert_eq!(level_for_score(45), 10);
        assert_eq!(level_for_score(49), 10);
    }

    #[test]
    fn test_initial_layout() {
        let state = GameState::new(Board::default());
        assert_eq!(state.phase, GamePhase::WaitingForHand);
        assert_eq!(state.snake.body.len(), BASE_LENGTH);
        assert_eq!(state.snake.head, Vec2::new(100.0, 50.0));
        assert_eq!(state.food.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.obstacles.len(), 3);
        assert_eq!(state.obstacles[0].pos, Vec2::new(400.0, 200.0));
        assert_eq!(state.obstacles[1].pos, Vec2::new(266.0, 400.0));
        assert_eq!(state.obstacles[1].vel, Vec2::new(-2.0, 2.0));
        assert_eq!(state.obstacles[2].pos, Vec2::new(533.0, 300.0));
        assert!(!state.boss.active);
    }

    #[test]
    fn test_reset_keeps_high_score_only() {
        let mut state = GameState::new(Board::default());
        state.score = 12;
        state.high_score = 20;
        state.boss.active = true;
        state.phase = GamePhase::GameOver;
        state.game_over_signalled = true;

        state.reset();
        assert_eq!(state.score, 0);
        assert_eq!(state.high_score, 20);
        assert!(!state.boss.active);
        assert!(!state.game_over_signalled);
        assert_eq!(state.phase, GamePhase::WaitingForHand);
    }

    #[test]
    fn test_state_json_snapshot() {
        let state = GameState::new(Board::default());
        let json = state.to_json().unwrap();
        let back = GameState::from_json(&json).unwrap();
        assert_eq!(back.snake, state.snake);
        assert_eq!(back.board, state.board);
        assert_eq!(back.phase, GamePhase::WaitingForHand);
    }

    #[test]
    fn test_snapshot_with_tiny_board_rejected() {
        let mut value = serde_json::to_value(GameState::new(Board::default())).unwrap();
        value["board"] = serde_json::json!({ "width": 0, "height": 0 });

        let result = GameState::from_json(&value.to_string());
        assert!(matches!(result, Err(GameError::Json(_))));
        let err = result.unwrap_err().to_string();
        assert!(err.contains("invalid board 0x0"), "{err}");

        assert!(serde_json::from_str::<Board>(r#"{"width": 800, "height": 99}"#).is_err());
        assert_eq!(
            serde_json::from_str::<Board>(r#"{"width": 640, "height": 480}"#).unwrap(),
            Board::new(640, 480).unwrap()
        );
    }
}
