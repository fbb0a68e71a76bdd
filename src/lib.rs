//! Gallag - a minimal arcade shooter.
//!
//! The library holds everything that has state-transition logic and is
//! host-independent:
//! - `geometry`: positions, playfield clamping, square overlap
//! - `entities`: pure data records and the owned `GameState`
//! - `counters`: cyclic frame counters driving blink and sway timing
//! - `input`: the held-key set and pause flag written by the host
//! - `compute`: initial layout and the per-frame simulation step
//! - `config`: tunables with JSON loading
//!
//! Terminal I/O (rendering, event reading, frame pacing) lives in the binary.

pub mod compute;
pub mod config;
pub mod counters;
pub mod entities;
pub mod geometry;
pub mod input;

pub use compute::{advance_frame, init_state, tick};
pub use config::GameConfig;
pub use entities::{GameState, Snapshot};
pub use input::{InputState, Key};
