//! Held-key set and pause flag.
//!
//! The host writes here as events arrive (drained once at the top of each
//! frame); the simulation only reads. Keys are stamped with the frame they
//! were last pressed or repeated on, so terminals that never report key
//! releases can still expire them (see `expire`).
//!
//! Such terminals deliver OS auto-repeat as plain presses, and the first
//! repeat only arrives after the OS repeat delay. An expired key therefore
//! lapses first: it no longer counts as held, but a press arriving before
//! the release window ends continues the same press instead of starting a
//! new one.

use std::collections::HashMap;

/// Keys the game reacts to. Host-specific key codes are mapped onto these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Fire,
    Pause,
}

#[derive(Clone, Debug, Default)]
pub struct InputState {
    /// Held key → frame of its last press/repeat.
    held: HashMap<Key, u64>,
    /// Expired key → frame of its last press/repeat, awaiting release.
    lapsed: HashMap<Key, u64>,
    paused: bool,
    /// Number of fire-key releases seen so far.
    fire_releases: u64,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A key went down on `frame`. Pressing Pause toggles the pause flag.
    /// A press of a key that is still held or lapsed counts as a repeat.
    pub fn key_down(&mut self, key: Key, frame: u64) {
        if self.is_held(key) || self.lapsed.contains_key(&key) {
            self.key_repeat(key, frame);
            return;
        }
        self.held.insert(key, frame);
        if key == Key::Pause {
            self.paused = !self.paused;
            log::info!("{}", if self.paused { "Paused" } else { "Resumed" });
        }
    }

    /// Auto-repeat of a held key: keeps it alive without re-toggling pause.
    pub fn key_repeat(&mut self, key: Key, frame: u64) {
        self.lapsed.remove(&key);
        self.held.insert(key, frame);
    }

    pub fn key_up(&mut self, key: Key) {
        let was_down = self.held.remove(&key).is_some() | self.lapsed.remove(&key).is_some();
        if was_down && key == Key::Fire {
            self.fire_releases += 1;
        }
    }

    /// Keys not pressed or repeated within `hold_window` frames stop being
    /// held; after `release_window` frames they count as released.
    pub fn expire(&mut self, frame: u64, hold_window: u64, release_window: u64) {
        let stale: Vec<(Key, u64)> = self
            .held
            .iter()
            .filter(|(_, &last)| frame.saturating_sub(last) > hold_window)
            .map(|(&key, &last)| (key, last))
            .collect();
        for (key, last) in stale {
            self.held.remove(&key);
            self.lapsed.insert(key, last);
        }

        let released: Vec<Key> = self
            .lapsed
            .iter()
            .filter(|(_, &last)| frame.saturating_sub(last) > release_window)
            .map(|(&key, _)| key)
            .collect();
        for key in released {
            self.key_up(key);
        }
    }

    /// Losing focus always pauses.
    pub fn focus_lost(&mut self) {
        if !self.paused {
            log::info!("Focus lost; paused");
        }
        self.paused = true;
    }

    /// Regaining focus never unpauses; the player resumes explicitly.
    pub fn focus_gained(&mut self) {
        log::debug!("Focus gained; pause stays {}", self.paused);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains_key(&key)
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn fire_releases(&self) -> u64 {
        self.fire_releases
    }
}
