use gallag::input::*;

// ── held keys ─────────────────────────────────────────────────────────────────

#[test]
fn key_down_and_up_track_held_set() {
    let mut input = InputState::new();
    input.key_down(Key::Left, 1);
    assert!(input.is_held(Key::Left));
    assert!(!input.is_held(Key::Right));
    input.key_up(Key::Left);
    assert!(!input.is_held(Key::Left));
}

#[test]
fn fire_release_is_counted_only_when_held() {
    let mut input = InputState::new();
    input.key_up(Key::Fire);
    assert_eq!(input.fire_releases(), 0);
    input.key_down(Key::Fire, 1);
    input.key_up(Key::Fire);
    assert_eq!(input.fire_releases(), 1);
}

#[test]
fn other_releases_do_not_count_as_fire() {
    let mut input = InputState::new();
    input.key_down(Key::Right, 1);
    input.key_up(Key::Right);
    assert_eq!(input.fire_releases(), 0);
}

// ── expiry (terminals without release events) ─────────────────────────────────

const HOLD: u64 = 4;
const RELEASE: u64 = 38;

#[test]
fn expire_lapses_stale_keys_before_releasing() {
    let mut input = InputState::new();
    input.key_down(Key::Fire, 10);
    input.key_down(Key::Left, 13);
    input.expire(15, HOLD, RELEASE);
    assert!(!input.is_held(Key::Fire)); // 5 frames old
    assert!(input.is_held(Key::Left)); // 2 frames old
    assert_eq!(input.fire_releases(), 0);

    input.expire(48, HOLD, RELEASE);
    assert_eq!(input.fire_releases(), 0); // 38 frames old
    input.expire(49, HOLD, RELEASE);
    assert_eq!(input.fire_releases(), 1);
}

#[test]
fn expire_keeps_key_at_window_edge() {
    let mut input = InputState::new();
    input.key_down(Key::Right, 10);
    input.expire(14, HOLD, RELEASE);
    assert!(input.is_held(Key::Right));
}

#[test]
fn repeat_refreshes_hold() {
    let mut input = InputState::new();
    input.key_down(Key::Right, 10);
    input.key_repeat(Key::Right, 14);
    input.expire(17, HOLD, RELEASE);
    assert!(input.is_held(Key::Right));
}

#[test]
fn press_after_lapse_resumes_hold() {
    let mut input = InputState::new();
    input.key_down(Key::Left, 1);
    input.expire(10, HOLD, RELEASE);
    assert!(!input.is_held(Key::Left));
    input.key_down(Key::Left, 32);
    assert!(input.is_held(Key::Left));
}

#[test]
fn release_of_lapsed_fire_counts_once() {
    let mut input = InputState::new();
    input.key_down(Key::Fire, 1);
    input.expire(10, HOLD, RELEASE);
    input.key_up(Key::Fire);
    input.key_up(Key::Fire);
    assert_eq!(input.fire_releases(), 1);
}

// ── terminals that report auto-repeat as presses ──────────────────────────────

/// Feeds presses of `key` at `presses` and expires every frame up to `last`.
fn drive_presses(input: &mut InputState, key: Key, presses: &[u64], last: u64) {
    for frame in 1..=last {
        if presses.contains(&frame) {
            input.key_down(key, frame);
        }
        input.expire(frame, HOLD, RELEASE);
    }
}

#[test]
fn held_fire_across_repeat_delay_is_one_press() {
    let mut input = InputState::new();
    let presses: Vec<u64> = std::iter::once(1).chain((32..=60).step_by(3)).collect();
    drive_presses(&mut input, Key::Fire, &presses, 60);
    assert_eq!(input.fire_releases(), 0);
    assert!(input.is_held(Key::Fire));
}

#[test]
fn fire_released_after_window_then_pressed_again_is_new_press() {
    let mut input = InputState::new();
    drive_presses(&mut input, Key::Fire, &[1], 50);
    assert_eq!(input.fire_releases(), 1);
    input.key_down(Key::Fire, 51);
    assert!(input.is_held(Key::Fire));
}

#[test]
fn held_pause_across_repeat_delay_toggles_once() {
    let mut input = InputState::new();
    drive_presses(&mut input, Key::Pause, &[1, 32, 35, 38, 41], 45);
    assert!(input.is_paused());
}

#[test]
fn repeated_press_of_held_pause_does_not_toggle() {
    let mut input = InputState::new();
    input.key_down(Key::Pause, 1);
    input.key_down(Key::Pause, 2);
    input.key_down(Key::Pause, 3);
    assert!(input.is_paused());
}

// ── pause & focus ─────────────────────────────────────────────────────────────

#[test]
fn pause_key_toggles() {
    let mut input = InputState::new();
    assert!(!input.is_paused());
    input.key_down(Key::Pause, 1);
    assert!(input.is_paused());
    input.key_up(Key::Pause);
    input.key_down(Key::Pause, 2);
    assert!(!input.is_paused());
}

#[test]
fn pause_key_repeat_does_not_toggle() {
    let mut input = InputState::new();
    input.key_down(Key::Pause, 1);
    input.key_repeat(Key::Pause, 2);
    input.key_repeat(Key::Pause, 3);
    assert!(input.is_paused());
}

#[test]
fn focus_loss_forces_pause() {
    let mut input = InputState::new();
    input.focus_lost();
    assert!(input.is_paused());
    // Already paused: stays paused, does not toggle
    input.focus_lost();
    assert!(input.is_paused());
}

#[test]
fn focus_regain_never_unpauses() {
    let mut input = InputState::new();
    input.focus_lost();
    input.focus_gained();
    assert!(input.is_paused());

    input.key_down(Key::Pause, 5);
    assert!(!input.is_paused());
}

#[test]
fn focus_regain_leaves_running_game_running() {
    let mut input = InputState::new();
    input.focus_gained();
    assert!(!input.is_paused());
}
