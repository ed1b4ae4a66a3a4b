//! Input events as the core sees them, and the pure mapping from an event
//! to the intent it expresses.  Phase-dependent filtering happens in
//! [`crate::game::Game`], not here.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Logical keys.  Front ends map their physical keys onto these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Fire,
    Quit,
    /// Keyboard alternative to clicking the start button.
    Play,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Window / process close request.
    Quit,
    KeyDown(Key),
    KeyUp(Key),
    /// Primary pointer press, in playfield units.
    PointerDown { x: f32, y: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Intent {
    MoveLeft(bool),
    MoveRight(bool),
    Fire,
    Start,
    Click { x: f32, y: f32 },
    Quit,
}

/// `None` for events that carry no meaning (releases of non-movement keys,
/// pointer presses at non-finite coordinates).
pub fn interpret(event: InputEvent) -> Option<Intent> {
    match event {
        InputEvent::Quit => Some(Intent::Quit),
        InputEvent::KeyDown(key) => Some(match key {
            Key::Left => Intent::MoveLeft(true),
            Key::Right => Intent::MoveRight(true),
            Key::Fire => Intent::Fire,
            Key::Quit => Intent::Quit,
            Key::Play => Intent::Start,
        }),
        InputEvent::KeyUp(Key::Left) => Some(Intent::MoveLeft(false)),
        InputEvent::KeyUp(Key::Right) => Some(Intent::MoveRight(false)),
        InputEvent::KeyUp(_) => None,
        InputEvent::PointerDown { x, y } if x.is_finite() && y.is_finite() => {
            Some(Intent::Click { x, y })
        }
        InputEvent::PointerDown { .. } => None,
    }
}

// ── Key-hold emulation ────────────────────────────────────────────────────────

/// How long a freshly pressed movement key counts as held without another
/// event.  Covers the keyboard's delay before auto-repeat kicks in.
pub const FIRST_HOLD_WINDOW: Duration = Duration::from_millis(400);

/// How long a key counts as held between auto-repeats.
pub const HOLD_WINDOW: Duration = Duration::from_millis(150);

#[derive(Clone, Copy, Debug)]
struct Held {
    last_seen: Instant,
    repeating: bool,
}

/// Movement keys currently held.
///
/// Terminals with keyboard enhancement report real releases.  Classic
/// terminals only repeat presses, so a key that goes quiet for longer than
/// its window gets a synthesized `KeyUp`.  The window is `FIRST_HOLD_WINDOW`
/// until the first repeat arrives and `HOLD_WINDOW` after that.
#[derive(Debug)]
pub struct HeldKeys {
    held: HashMap<Key, Held>,
    releases_reported: bool,
}

impl HeldKeys {
    pub fn new(releases_reported: bool) -> Self {
        HeldKeys {
            held: HashMap::new(),
            releases_reported,
        }
    }

    /// Record a press or repeat.  Returns true when the key was not already
    /// held, i.e. when a `KeyDown` should be emitted.
    pub fn press(&mut self, key: Key, now: Instant) -> bool {
        match self.held.get_mut(&key) {
            Some(held) => {
                held.last_seen = now;
                held.repeating = true;
                false
            }
            None => {
                self.held.insert(
                    key,
                    Held {
                        last_seen: now,
                        repeating: false,
                    },
                );
                true
            }
        }
    }

    /// Returns true when the key was held.
    pub fn release(&mut self, key: Key) -> bool {
        self.held.remove(&key).is_some()
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains_key(&key)
    }

    /// Queue a `KeyUp` for every key whose window ran out by `now`.
    pub fn expire(&mut self, now: Instant, queue: &mut Vec<InputEvent>) {
        if self.releases_reported {
            return;
        }
        let stale: Vec<Key> = self
            .held
            .iter()
            .filter(|(_, held)| {
                let window = if held.repeating {
                    HOLD_WINDOW
                } else {
                    FIRST_HOLD_WINDOW
                };
                now.saturating_duration_since(held.last_seen) > window
            })
            .map(|(key, _)| *key)
            .collect();
        for key in stale {
            self.held.remove(&key);
            queue.push(InputEvent::KeyUp(key));
        }
    }
}
