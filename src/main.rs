//! Hand Snake headless driver
//!
//! Plays a session against a scripted hand that sweeps a Lissajous path and
//! drops out now and then, logging events and sound cues as they happen.

use std::ops::ControlFlow;
use std::path::PathBuf;

use clap::Parser;
use glam::Vec2;

use hand_snake::sim::{GameState, TickReport};
use hand_snake::{
    Clock, FrameSink, Game, GameError, HandTracker, ManualClock, Settings, SystemClock, Theme,
};

#[derive(Parser, Debug)]
#[command(name = "hand-snake", about = "Run a scripted Hand Snake session")]
struct Args {
    /// Settings JSON file
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Frames to play before stopping
    #[arg(long, default_value_t = 600)]
    ticks: u64,

    /// RNG seed (overrides the settings file)
    #[arg(long)]
    seed: Option<u64>,

    /// Color theme (overrides the settings file)
    #[arg(long)]
    theme: Option<Theme>,

    /// Sleep for real between frames instead of simulating time
    #[arg(long)]
    realtime: bool,

    /// Print the final game state as JSON
    #[arg(long)]
    dump: bool,

    /// List the available themes and their colors, then exit
    #[arg(long)]
    list_themes: bool,
}

/// Fake tracker tracing a slow Lissajous figure around the board center
struct OrbitTracker {
    frame: u64,
    /// Every n-th frame the hand is out of view
    dropout_every: u64,
}

impl HandTracker for OrbitTracker {
    fn read(&mut self) -> Result<Option<Vec2>, GameError> {
        self.frame += 1;
        if self.frame % self.dropout_every == 0 {
            return Ok(None);
        }
        let t = self.frame as f32 * 0.02;
        Ok(Some(Vec2::new(
            0.5 + 0.3 * t.sin(),
            0.5 + 0.25 * (t * 1.5).cos(),
        )))
    }
}

/// Logs what happened each frame and stops after `limit` frames
struct LogSink {
    limit: u64,
    frames: u64,
}

impl FrameSink for LogSink {
    fn present(&mut self, state: &GameState, report: &TickReport) -> ControlFlow<()> {
        self.frames += 1;
        for event in &report.events {
            log::info!("frame {}: {:?}", self.frames, event);
            if let Some(cue) = event.sound_cue() {
                log::debug!("play {}", cue.url());
            }
        }
        if self.frames % 100 == 0 {
            let hud = &report.hud;
            log::info!(
                "frame {}: {:?} score {} high {} level {} length {}",
                self.frames,
                state.phase,
                hud.score,
                hud.high_score,
                hud.level,
                state.snake.len()
            );
        }

        if self.frames >= self.limit {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

fn list_themes() {
    for theme in Theme::ALL {
        let p = theme.palette();
        println!(
            "{:<7} background {:?} snake {:?} food {:?} gold {:?} boss {:?}",
            theme.as_str(),
            p.background,
            p.snake_head,
            p.food_normal,
            p.food_gold,
            p.boss
        );
    }
}

fn play<C: Clock>(mut game: Game<C>, args: &Args) -> Result<(), GameError> {
    log::debug!("Palette: {:?}", game.palette());
    let mut tracker = OrbitTracker {
        frame: 0,
        dropout_every: 45,
    };
    let mut sink = LogSink {
        limit: args.ticks,
        frames: 0,
    };

    game.run(&mut tracker, &mut sink)?;

    let hud = game.state().hud();
    println!(
        "score {} | high score {} | level {} | theme {}",
        hud.score,
        hud.high_score,
        hud.level,
        game.settings().theme.as_str()
    );
    if args.dump {
        println!("{}", game.state().to_json()?);
    }
    Ok(())
}

fn main() -> Result<(), GameError> {
    env_logger::init();
    let args = Args::parse();
    if args.list_themes {
        list_themes();
        return Ok(());
    }

    let mut settings = match &args.settings {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(seed) = args.seed {
        settings.seed = Some(seed);
    }
    if let Some(theme) = args.theme {
        settings.theme = theme;
    }

    log::info!("Hand Snake starting ({} frames)", args.ticks);
    if args.realtime {
        play(Game::new(settings, SystemClock::new())?, &args)
    } else {
        play(Game::new(settings, ManualClock::default())?, &args)
    }
}
