/// All game entity types. Pure data, no logic.

use serde::{Deserialize, Serialize};

use crate::config::Tuning;
use crate::counters::FrameCounters;
use crate::geometry::{Playfield, Position};

// ── Colours ───────────────────────────────────────────────────────────────────

/// Host-independent colour; the renderer maps it onto its own palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const RED: Rgb = Rgb(0xff, 0x00, 0x00);
    pub const ORANGE: Rgb = Rgb(0xff, 0xaa, 0x00);
    pub const YELLOW: Rgb = Rgb(0xff, 0xff, 0x00);
    pub const MAGENTA: Rgb = Rgb(0xff, 0x00, 0xff);
    pub const CYAN: Rgb = Rgb(0x00, 0xff, 0xff);
    pub const BLUE: Rgb = Rgb(0x00, 0x00, 0xff);
    pub const LIME: Rgb = Rgb(0xaa, 0xff, 0x00);
    pub const SKY: Rgb = Rgb(0x00, 0xaa, 0xff);
    pub const WHITE: Rgb = Rgb(0xff, 0xff, 0xff);
}

/// Palette the starfield draws from.
pub const PARTICLE_COLORS: [Rgb; 6] = [
    Rgb::RED,
    Rgb::ORANGE,
    Rgb::YELLOW,
    Rgb::MAGENTA,
    Rgb::CYAN,
    Rgb::BLUE,
];

// ── Behaviour tags ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleBehaviour {
    /// Particles stay where they are.
    Still,
    /// Particles drift down one unit per frame and wrap at the bottom.
    #[default]
    Falling,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyBehaviour {
    /// Lockstep left/right oscillation gated by the sway counter.
    #[default]
    Sway,
    /// Reserved formation breathing; currently leaves enemies in place.
    Expand,
}

// ── Starfield ─────────────────────────────────────────────────────────────────

/// Cosmetic background dot. Never collides.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub color: Rgb,
    pub blinking: bool,
    pub position: Position,
}

impl Particle {
    pub fn is_visible(&self, counters: &FrameCounters) -> bool {
        !self.blinking || counters.blink_visible()
    }
}

// ── Player & enemy ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub position: Position,
    /// Live shots, oldest first.
    pub shots: Vec<Position>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub color: Rgb,
    /// Formation slot; only used for the initial layout.
    pub row: u32,
    pub col: u32,
    pub position: Position,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire simulation state, owned by the frame driver and mutated in
/// place by `compute::tick`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub playfield: Playfield,
    pub tuning: Tuning,
    pub particles: Vec<Particle>,
    pub particle_behaviour: ParticleBehaviour,
    pub player: Player,
    /// Formation order; collision scans walk it front to back.
    pub enemies: Vec<Enemy>,
    pub enemy_behaviour: EnemyBehaviour,
    pub counters: FrameCounters,
    /// Fire-release count observed when the last shot was spawned. A new
    /// shot needs the fire key to have been released since.
    pub fire_latch: Option<u64>,
}

impl GameState {
    /// Read-only view handed to the renderer once per frame.
    pub fn snapshot(&self, paused: bool) -> Snapshot<'_> {
        Snapshot {
            playfield: self.playfield,
            tuning: &self.tuning,
            particles: &self.particles,
            player: &self.player,
            enemies: &self.enemies,
            counters: &self.counters,
            paused,
        }
    }
}

/// Everything a renderer may look at, and nothing it can change.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    pub playfield: Playfield,
    pub tuning: &'a Tuning,
    pub particles: &'a [Particle],
    pub player: &'a Player,
    pub enemies: &'a [Enemy],
    pub counters: &'a FrameCounters,
    pub paused: bool,
}

impl Snapshot<'_> {
    pub fn visible_particles(&self) -> impl Iterator<Item = &Particle> + '_ {
        let counters = self.counters;
        self.particles.iter().filter(move |p| p.is_visible(counters))
    }
}
