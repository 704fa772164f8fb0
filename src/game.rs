//! Session driver
//!
//! Owns the game state, RNG and clock for one play session, and runs the
//! read → tick → present → wait loop against the external collaborators.

use std::ops::ControlFlow;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::clock::Clock;
use crate::settings::{Palette, Settings};
use crate::sim::{GameState, TickInput, TickReport, tick};
use crate::GameError;

/// Source of fingertip samples (camera + hand-landmark model)
pub trait HandTracker {
    /// Normalized index fingertip for the current frame, `Ok(None)` when no
    /// hand is visible. An error ends the session.
    fn read(&mut self) -> Result<Option<Vec2>, GameError>;
}

/// Consumer of finished frames (renderer, audio, UI)
pub trait FrameSink {
    /// Present one frame. `Break` stops the session loop.
    fn present(&mut self, state: &GameState, report: &TickReport) -> ControlFlow<()>;
}

/// One play session
pub struct Game<C: Clock> {
    state: GameState,
    rng: Pcg32,
    clock: C,
    settings: Settings,
    ticks: u64,
}

impl<C: Clock> Game<C> {
    pub fn new(settings: Settings, clock: C) -> Result<Self, GameError> {
        let board = settings.board()?;
        let seed = settings.seed.unwrap_or_else(rand::random::<u64>);
        log::info!(
            "New session: board {}x{}, theme {}, seed {}",
            board.width(),
            board.height(),
            settings.theme.as_str(),
            seed
        );

        Ok(Self {
            state: GameState::new(board),
            rng: Pcg32::seed_from_u64(seed),
            clock,
            settings,
            ticks: 0,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn palette(&self) -> Palette {
        self.settings.theme.palette()
    }

    /// Ticks processed so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Run one tick with this frame's fingertip sample
    pub fn advance(&mut self, fingertip: Option<Vec2>) -> Result<TickReport, GameError> {
        let input = TickInput { fingertip };
        input.validate()?;

        let now = self.clock.now();
        let report = tick(&mut self.state, &input, now, &mut self.rng);
        self.ticks += 1;
        Ok(report)
    }

    /// Drive the session until the sink stops it or the tracker fails
    pub fn run<T, S>(&mut self, tracker: &mut T, sink: &mut S) -> Result<u64, GameError>
    where
        T: HandTracker + ?Sized,
        S: FrameSink + ?Sized,
    {
        let start = self.ticks;
        loop {
            let fingertip = tracker.read().inspect_err(|e| {
                log::error!("Stopping session: {e}");
            })?;
            let report = self.advance(fingertip)?;

            if sink.present(&self.state, &report).is_break() {
                break;
            }
            self.clock.sleep(report.delay_secs);
        }

        let ran = self.ticks - start;
        log::info!("Session ended after {ran} ticks (high score {})", self.state.high_score);
        Ok(ran)
    }
}
