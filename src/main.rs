mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use crossterm::{
    cursor,
    event::{
        self, DisableFocusChange, EnableFocusChange, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use display::Viewport;
use gallag::{advance_frame, config, init_state, GameConfig, GameState, InputState, Key};

// ── Input mapping ─────────────────────────────────────────────────────────────

fn game_key(code: &KeyCode) -> Option<Key> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Key::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Key::Right),
        KeyCode::Char(' ') => Some(Key::Fire),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Key::Pause),
        _ => None,
    }
}

fn is_quit(code: &KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Apply every pending event to the input state.
/// Returns `true` when the player asked to quit.
fn drain_events(rx: &mpsc::Receiver<Event>, input: &mut InputState, frame: u64) -> bool {
    while let Ok(ev) = rx.try_recv() {
        match ev {
            Event::Key(KeyEvent { code, kind, modifiers, .. }) => {
                if kind == KeyEventKind::Press && is_quit(&code, modifiers) {
                    return true;
                }
                let Some(key) = game_key(&code) else {
                    continue;
                };
                match kind {
                    KeyEventKind::Press => input.key_down(key, frame),
                    KeyEventKind::Repeat => input.key_repeat(key, frame),
                    KeyEventKind::Release => input.key_up(key),
                }
            }
            Event::FocusLost => input.focus_lost(),
            Event::FocusGained => input.focus_gained(),
            Event::Resize(cols, rows) => log::debug!("Terminal resized to {cols}x{rows}"),
            _ => {}
        }
    }
    false
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.
///
/// Each frame: drain input events, draw the current snapshot, advance the
/// simulation once, then sleep out the rest of the frame. Terminals without
/// key-release reporting only ever send presses (OS key-repeat arrives as
/// repeated presses), so keys there stop counting as held once `hold_window`
/// frames pass without one, and count as released after `release_window`.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    config: &GameConfig,
    rx: &mpsc::Receiver<Event>,
    keyboard_enhanced: bool,
) -> std::io::Result<()> {
    let mut input = InputState::new();
    let frame_time = config.frame_duration();
    let release_window = config.release_window();
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        if drain_events(rx, &mut input, frame) {
            log::info!("Quit after {frame} frames");
            return Ok(());
        }
        if !keyboard_enhanced {
            input.expire(frame, config.hold_window, release_window);
        }

        let (cols, rows) = terminal::size()?;
        let view = Viewport::new(cols, rows, state.playfield);
        display::render(out, &view, &state.snapshot(input.is_paused()))?;

        advance_frame(state, &input);

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn init_logging() {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    // The terminal is in raw alternate-screen mode, so logs go to a file.
    match File::create(config::log_path()) {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(_) => {
            builder.filter_level(log::LevelFilter::Off);
        }
    }
    let _ = builder.try_init();
}

fn main() -> std::io::Result<()> {
    init_logging();
    let config = GameConfig::load();
    log::info!(
        "Starting: playfield {}x{}, {} particles, shot limit {}",
        config.width,
        config.height,
        config.particle_count,
        config.tuning.shot_limit
    );

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    let focus_reporting = out.execute(EnableFocusChange).is_ok();
    let (cols, rows) = terminal::size()?;
    log::info!("Terminal size {cols}x{rows}");

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back to hold_window.
    let keyboard_enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false)
        && out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();
    log::info!("Keyboard enhancement: {keyboard_enhanced}, focus reporting: {focus_reporting}");

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut state = init_state(&config, &mut rng);
    let result = game_loop(&mut out, &mut state, &config, &rx, keyboard_enhanced);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    if focus_reporting {
        let _ = out.execute(DisableFocusChange);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(err) = &result {
        log::error!("Terminal I/O failed: {err}");
    }
    result
}
