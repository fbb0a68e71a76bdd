//! Game configuration
//!
//! Every tunable with its default. Optionally overridden from a JSON file
//! named by the `GALLAG_CONFIG` environment variable.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::geometry::Playfield;

/// Environment variable naming the JSON config file.
pub const CONFIG_ENV: &str = "GALLAG_CONFIG";
/// Environment variable overriding the log file location.
pub const LOG_ENV: &str = "GALLAG_LOG";

/// Where log output goes while the terminal is in raw mode.
pub fn log_path() -> PathBuf {
    std::env::var_os(LOG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("gallag.log"))
}

/// Sizes and speeds read by the simulation step.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub particle_size: u32,
    pub shot_size: f32,
    pub shot_limit: usize,
    pub shot_speed: i32,
    pub player_size: i32,
    pub player_speed: i32,
    pub enemy_size: f32,
    pub sway_step: i32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            particle_size: 3,
            shot_size: 10.0,
            shot_limit: 2,
            shot_speed: 5,
            player_size: 30,
            player_speed: 2,
            enemy_size: 30.0,
            sway_step: 10,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Logical playfield width
    pub width: i32,
    /// Logical playfield height
    pub height: i32,
    /// Starfield pool size
    pub particle_count: usize,
    #[serde(flatten)]
    pub tuning: Tuning,
    /// Target frame duration
    pub frame_millis: u64,
    /// Frames a key stays held without a release event (classic terminals)
    pub hold_window: u64,
    /// How long an expired key may go without a press before it counts as
    /// released; must outlast the OS initial auto-repeat delay
    pub release_millis: u64,
    /// Starfield seed; random when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            particle_count: 100,
            tuning: Tuning::default(),
            frame_millis: 16,
            hold_window: 4,
            release_millis: 600,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Load from the file named by `GALLAG_CONFIG`, falling back to defaults.
    pub fn load() -> Self {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load_from(Path::new(&path)),
            None => Self::default(),
        }
    }

    /// Load from `path`. Unreadable or malformed files yield defaults.
    pub fn load_from(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(err) => {
                log::warn!("Cannot read config {}: {err}; using defaults", path.display());
                return Self::default();
            }
        };
        match Self::from_json(&json) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(err) => {
                log::warn!("Malformed config {}: {err}; using defaults", path.display());
                Self::default()
            }
        }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<Self>(json).map(Self::validated)
    }

    /// Force degenerate values into a usable range.
    pub fn validated(mut self) -> Self {
        self.width = self.width.max(1);
        self.height = self.height.max(1);
        self.frame_millis = self.frame_millis.max(1);
        self.tuning.shot_size = self.tuning.shot_size.max(0.0);
        self.tuning.enemy_size = self.tuning.enemy_size.max(0.0);
        self.tuning.player_size = self.tuning.player_size.max(0);
        self.tuning.shot_speed = self.tuning.shot_speed.max(0);
        self.tuning.player_speed = self.tuning.player_speed.max(0);
        self.tuning.sway_step = self.tuning.sway_step.max(0);
        self
    }

    pub fn playfield(&self) -> Playfield {
        Playfield::new(self.width, self.height)
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_millis(self.frame_millis)
    }

    /// `release_millis` in whole frames, never shorter than `hold_window`.
    pub fn release_window(&self) -> u64 {
        let frame_millis = self.frame_millis.max(1);
        let frames = self.release_millis.saturating_add(frame_millis - 1) / frame_millis;
        frames.max(self.hold_window)
    }
}
