//! Per-frame simulation tick
//!
//! One call per processed camera frame. The tick owns every gameplay rule;
//! callers only supply the fingertip, the clock reading and the RNG.

use glam::Vec2;
use rand::Rng;

use super::collision;
use super::powerup::Pace;
use super::spawn::{maybe_spawn_power_up, spawn_food};
use super::state::{
    Collision, FoodKind, GameEvent, GamePhase, GameState, Hud, Particle, level_for_score,
};
use crate::consts::*;
use crate::{GameError, distance};

/// Hand-tracking sample for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Index fingertip in normalized [0,1]² camera coordinates, `None` when no hand is seen
    pub fingertip: Option<Vec2>,
}

impl TickInput {
    pub fn hand(fingertip: Vec2) -> Self {
        Self {
            fingertip: Some(fingertip),
        }
    }

    pub fn no_hand() -> Self {
        Self::default()
    }

    #[inline]
    pub fn hand_detected(&self) -> bool {
        self.fingertip.is_some()
    }

    /// Reject coordinates no tracker can legitimately produce
    pub fn validate(&self) -> Result<(), GameError> {
        match self.fingertip {
            Some(p) if !p.is_finite() => Err(GameError::InvalidFingertip { x: p.x, y: p.y }),
            _ => Ok(()),
        }
    }
}

/// What a tick produced besides the mutated state
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    pub events: Vec<GameEvent>,
    pub hud: Hud,
    /// Suggested wait before the next tick
    pub delay_secs: f32,
}

/// Advance the game by one frame.
///
/// `now` is the clock reading in seconds; it only feeds the buff timers.
pub fn tick<R: Rng + ?Sized>(
    state: &mut GameState,
    input: &TickInput,
    now: f64,
    rng: &mut R,
) -> TickReport {
    let pace = Pace::for_level(state.level).boosted(&state.speed_boost);
    let mut events = Vec::new();

    match state.phase {
        GamePhase::WaitingForHand => {
            if input.hand_detected() {
                state.phase = GamePhase::Running;
                events.push(GameEvent::GameStarted);
                log::info!("Hand detected, game started");
            }
        }
        GamePhase::Running => {
            run_frame(state, input, now, pace.smoothing, rng, &mut events);
            // A hand still in view at the moment of death restarts straight away
            if state.phase == GamePhase::GameOver && input.hand_detected() {
                restart(state, &mut events);
            }
        }
        GamePhase::GameOver => {
            if input.hand_detected() {
                restart(state, &mut events);
            }
        }
    }

    TickReport {
        events,
        hud: state.hud(),
        delay_secs: pace.delay_secs,
    }
}

fn run_frame<R: Rng + ?Sized>(
    state: &mut GameState,
    input: &TickInput,
    now: f64,
    smoothing: f32,
    rng: &mut R,
    events: &mut Vec<GameEvent>,
) {
    let board = state.board;

    // Snake
    if let Some(fingertip) = input.fingertip {
        state.snake.steer(board.scale_fingertip(fingertip), smoothing);
    }
    state.snake.update_body(state.score);
    let head = state.snake.head;

    // Obstacles
    for obstacle in &mut state.obstacles {
        obstacle.advance(&board);
    }

    // Speed boost orb
    state.blue_orb = maybe_spawn_power_up(state.blue_orb, &board, BLUE_ORB_CHANCE, rng);
    if state.blue_orb.is_some_and(|orb| distance(head, orb) < PICKUP_RADIUS) {
        state.blue_orb = None;
        state.speed_boost.activate(now);
        events.push(GameEvent::BoostPickedUp);
        log::debug!("Speed boost picked up at {now:.2}s");
    }
    state.speed_boost.expire(now, SPEED_BOOST_SECS);

    // Invisibility orb
    state.invisible_orb =
        maybe_spawn_power_up(state.invisible_orb, &board, INVISIBLE_ORB_CHANCE, rng);
    if state.invisible_orb.is_some_and(|orb| distance(head, orb) < PICKUP_RADIUS) {
        state.invisible_orb = None;
        state.invisibility.activate(now);
        events.push(GameEvent::InvisibilityPickedUp);
        log::debug!("Invisibility picked up at {now:.2}s");
    }
    state.invisibility.expire(now, INVISIBILITY_SECS);

    // Food
    if distance(head, state.food.pos) < PICKUP_RADIUS {
        state.score += state.food.kind.points();
        events.push(match state.food.kind {
            FoodKind::Normal => GameEvent::FoodEaten,
            FoodKind::Gold => GameEvent::GoldFoodEaten,
        });
        state.food = spawn_food(&state.snake.body, &board, rng);
    }

    // Boss
    let mut boss_hit = None;
    if !state.boss.active && level_for_score(state.score) >= BOSS_LEVEL {
        state.boss.active = true;
        events.push(GameEvent::BossAwakened);
        log::info!("Boss awakened at score {}", state.score);
    }
    if state.boss.active {
        state.boss.chase(head);
        if state.boss.hits(head) {
            boss_hit = Some(Collision::Boss);
        }
    }

    // Head trail
    state.particles.push(Particle {
        pos: head,
        life: PARTICLE_LIFE,
    });
    for particle in &mut state.particles {
        particle.life -= 1;
    }
    state.particles.retain(|p| p.life > 0);

    // HUD
    let level = level_for_score(state.score);
    if level > state.level {
        events.push(GameEvent::LevelUp { level });
        log::info!("Level {level} reached");
    }
    state.level = level;

    // Walls, obstacles, self
    if let Some(cause) = boss_hit.or_else(|| collision::check(state)) {
        enter_game_over(state, cause, events);
    }
}

fn restart(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.reset();
    events.push(GameEvent::Restarted);
    log::info!("Game reset (high score {})", state.high_score);
}

fn enter_game_over(state: &mut GameState, cause: Collision, events: &mut Vec<GameEvent>) {
    state.phase = GamePhase::GameOver;
    state.high_score = state.high_score.max(state.score);

    if !state.game_over_signalled {
        state.game_over_signalled = true;
        events.push(GameEvent::GameOver {
            score: state.score,
            cause,
        });
        log::info!(
            "Game over ({:?}) with score {} (high {})",
            cause,
            state.score,
            state.high_score
        );
    }
}
