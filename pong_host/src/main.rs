//! Headless native host for the Pong core
//!
//! Owns everything the core leaves out: frame pacing, an input source and a
//! canvas. Stops on Escape, on an error from the core, or on a panic.

mod autopilot;
mod pacer;
mod settings;

use std::panic::{self, AssertUnwindSafe};

use game_core::render::RecordingCanvas;
use game_core::{Game, GameRng, TickStatus};

use autopilot::AutoPilot;
use pacer::FramePacer;
use settings::Settings;

const SUMMARY_EVERY: u64 = 600; // ~10 s at 60 Hz

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::from_env();
    let rng = match settings.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };

    let mut game = match Game::new(Default::default(), rng) {
        Ok(game) => game,
        Err(err) => {
            log::error!("Could not start: {}", err);
            std::process::exit(1);
        }
    };

    log::info!(
        "Starting match, seed={:?}, fps={}",
        settings.seed,
        settings.fps
    );

    run(&mut game, &settings);

    log::info!(
        "Final score {}-{} ({:?}) after {} ticks",
        game.score.player,
        game.score.ai,
        game.match_state(),
        game.tick_count()
    );
}

/// Drive the game until it stops. Failures end the loop instead of the process.
fn run(game: &mut Game<GameRng>, settings: &Settings) {
    let mut canvas = RecordingCanvas::new();
    let mut pilot = AutoPilot::new(game.config.player_swing);
    let mut pacer = FramePacer::new(settings.frame_budget());
    let mut frame: u64 = 0;
    let mut rally: u32 = 0;
    let mut longest_rally: u32 = 0;

    loop {
        let events = pilot.poll(game);
        canvas.clear();

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| game.tick(events, &mut canvas)));
        match outcome {
            Ok(Ok(TickStatus::Running)) => {}
            Ok(Ok(TickStatus::Stopped)) => break,
            Ok(Err(err)) => {
                log::error!("Tick {} failed, shutting down: {}", frame, err);
                break;
            }
            Err(_) => {
                log::error!("Tick {} panicked, shutting down", frame);
                break;
            }
        }

        if game.events.ball_hit_paddle() {
            rally += 1;
            longest_rally = longest_rally.max(rally);
        }
        if game.events.player_scored || game.events.ai_scored {
            log::debug!("Point after a rally of {} hits", rally);
            rally = 0;
        }

        frame += 1;
        if frame % SUMMARY_EVERY == 0 {
            log::info!(
                "Frame {}, score {}-{}{}",
                frame,
                game.score.player,
                game.score.ai,
                if game.score.is_deuce() { " (deuce)" } else { "" }
            );
        }
        log::trace!("Frame {} drew {} commands", frame, canvas.commands.len());

        pacer.wait();
    }

    log::info!("Longest rally: {} paddle hits", longest_rally);
}
