//! Host settings read from the environment

use std::time::Duration;

/// Default frame rate when `PONG_FPS` is not set
pub const DEFAULT_FPS: u32 = 60;

/// Frames to keep showing the result before pressing Escape
pub const LINGER_FRAMES: u32 = 180;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub seed: Option<u64>,
    pub fps: u32, // 0 = run unpaced
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unparseable values fall back to defaults.
    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let seed = lookup("PONG_SEED").and_then(|raw| match raw.trim().parse() {
            Ok(seed) => Some(seed),
            Err(err) => {
                log::warn!("Ignoring PONG_SEED={:?}: {}", raw, err);
                None
            }
        });
        let fps = lookup("PONG_FPS")
            .and_then(|raw| match raw.trim().parse() {
                Ok(fps) => Some(fps),
                Err(err) => {
                    log::warn!("Ignoring PONG_FPS={:?}: {}", raw, err);
                    None
                }
            })
            .unwrap_or(DEFAULT_FPS);
        Self { seed, fps }
    }

    /// Time budget for one frame, if paced
    pub fn frame_budget(&self) -> Option<Duration> {
        if self.fps == 0 {
            None
        } else {
            Some(Duration::from_secs_f64(1.0 / self.fps as f64))
        }
    }
}
