/// Game-logic functions.
///
/// `init_state` builds the opening layout (randomness comes through the
/// injected RNG), `tick` advances the simulation one frame in place, and
/// `advance_frame` pairs a tick with the counter advance the frame driver
/// performs after each rendered frame.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::GameConfig;
use crate::counters::FrameCounters;
use crate::entities::{
    Enemy, EnemyBehaviour, GameState, Particle, ParticleBehaviour, Player, Rgb, PARTICLE_COLORS,
};
use crate::geometry::{Playfield, Position, Rect};
use crate::input::{InputState, Key};

// ── Formation ─────────────────────────────────────────────────────────────────

/// Formation rows, top to bottom: colour and occupied columns.
const FORMATION: [(Rgb, u32, u32); 5] = [
    (Rgb::LIME, 3, 6),
    (Rgb::RED, 1, 8),
    (Rgb::RED, 1, 8),
    (Rgb::SKY, 0, 9),
    (Rgb::SKY, 0, 9),
];

const FORMATION_COLUMNS: f64 = 10.0;
const FORMATION_ROWS: f64 = 5.0;

/// Slot position: ten columns across the middle 80% of the width, five rows
/// across the top half of the height.
pub fn enemy_position(playfield: Playfield, row: u32, col: u32) -> Position {
    let width = playfield.width as f64;
    let height = playfield.height as f64;
    let x_padding = width * 0.1;
    let w = width - x_padding * 2.0;
    let h = height / 2.0;
    let x = (w / FORMATION_COLUMNS * (col + 1) as f64 + x_padding).floor();
    let y = (h / FORMATION_ROWS * (row + 1) as f64).floor();
    playfield.clamped(Position::new(x as i32, y as i32))
}

/// The full formation in scan order: row by row, left to right.
pub fn formation(playfield: Playfield) -> Vec<Enemy> {
    FORMATION
        .iter()
        .enumerate()
        .flat_map(|(row, &(color, first, last))| {
            (first..=last).map(move |col| Enemy {
                color,
                row: row as u32,
                col,
                position: enemy_position(playfield, row as u32, col),
            })
        })
        .collect()
}

// ── Starfield ─────────────────────────────────────────────────────────────────

pub fn spawn_particles(playfield: Playfield, count: usize, rng: &mut impl Rng) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle {
            color: *PARTICLE_COLORS.choose(rng).unwrap_or(&Rgb::WHITE),
            blinking: rng.gen_bool(0.5),
            position: Position::new(
                rng.gen_range(0..=playfield.width),
                rng.gen_range(0..=playfield.height),
            ),
        })
        .collect()
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the opening state: starfield, centred player near the bottom, full
/// formation, counters at zero.
pub fn init_state(config: &GameConfig, rng: &mut impl Rng) -> GameState {
    let playfield = config.playfield();
    let tuning = config.tuning;
    let player = Player {
        position: playfield.clamped(Position::new(
            playfield.width / 2,
            playfield.height - tuning.player_size,
        )),
        shots: Vec::new(),
    };

    GameState {
        playfield,
        tuning,
        particles: spawn_particles(playfield, config.particle_count, rng),
        particle_behaviour: ParticleBehaviour::Falling,
        player,
        enemies: formation(playfield),
        enemy_behaviour: EnemyBehaviour::Sway,
        counters: FrameCounters::default(),
        fire_latch: None,
    }
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one frame. A no-op while paused.
///
/// Order: particles, enemies, player movement, shots (with collisions),
/// firing. Shots therefore collide against enemies that have already
/// swayed this frame, and a freshly fired shot first moves next frame.
pub fn tick(state: &mut GameState, input: &InputState) {
    if input.is_paused() {
        return;
    }

    advance_particles(state);
    move_enemies(state);
    move_player(state, input);
    advance_shots(state);
    fire(state, input);
}

/// One full frame as the driver runs it: the tick, then the counters.
/// Pausing freezes the counters along with the simulation.
pub fn advance_frame(state: &mut GameState, input: &InputState) {
    tick(state, input);
    if !input.is_paused() {
        state.counters.advance();
    }
}

fn advance_particles(state: &mut GameState) {
    match state.particle_behaviour {
        ParticleBehaviour::Still => {}
        ParticleBehaviour::Falling => {
            let height = state.playfield.height;
            for particle in &mut state.particles {
                // Wrap test uses the position before this frame's fall.
                if particle.position.y >= height {
                    particle.position.y = -1;
                } else {
                    particle.position.y += 1;
                }
            }
        }
    }
}

fn move_enemies(state: &mut GameState) {
    match state.enemy_behaviour {
        EnemyBehaviour::Sway => {
            let sway = state.counters.sway;
            let step = sway.period() / 4;
            if step == 0 || sway.value() % step != 0 {
                return;
            }
            let dir = if sway.value() < sway.period() / 2 { -1 } else { 1 };
            let delta = Position::new(state.tuning.sway_step.saturating_mul(dir), 0);
            for enemy in &mut state.enemies {
                state.playfield.clamp_move(&mut enemy.position, delta);
            }
        }
        EnemyBehaviour::Expand => {}
    }
}

fn move_player(state: &mut GameState, input: &InputState) {
    let speed = state.tuning.player_speed;
    let dx = match (input.is_held(Key::Left), input.is_held(Key::Right)) {
        (true, false) => speed.saturating_neg(),
        (false, true) => speed,
        _ => return,
    };
    state
        .playfield
        .clamp_move(&mut state.player.position, Position::new(dx, 0));
}

/// Shots are walked newest first so removals never disturb the indices
/// still to be visited. Each shot destroys at most the first enemy it
/// overlaps, in formation order.
fn advance_shots(state: &mut GameState) {
    let shot_size = state.tuning.shot_size;
    let enemy_size = state.tuning.enemy_size;

    for i in (0..state.player.shots.len()).rev() {
        let shot = &mut state.player.shots[i];
        shot.y = shot.y.saturating_sub(state.tuning.shot_speed);
        let shot = *shot;

        let shot_rect = Rect::square_around(shot, shot_size);
        let hit = state
            .enemies
            .iter()
            .position(|e| shot_rect.overlaps(&Rect::square_around(e.position, enemy_size)));

        if let Some(j) = hit {
            state.player.shots.remove(i);
            let enemy = state.enemies.remove(j);
            log::debug!(
                "Enemy at row {} col {} destroyed; {} left",
                enemy.row,
                enemy.col,
                state.enemies.len()
            );
            if state.enemies.is_empty() {
                log::info!("Formation cleared");
            }
        } else if !state.playfield.is_in_bounds(shot) {
            state.player.shots.remove(i);
        }
    }
}

/// Edge-triggered: one shot per press of the fire key, and only while
/// below the shot limit.
fn fire(state: &mut GameState, input: &InputState) {
    if !input.is_held(Key::Fire) {
        return;
    }
    let releases = input.fire_releases();
    if state.fire_latch == Some(releases) {
        return;
    }
    if state.player.shots.len() >= state.tuning.shot_limit {
        return;
    }
    state.player.shots.push(state.player.position);
    state.fire_latch = Some(releases);
    log::trace!("Shot fired from {:?}", state.player.position);
}
