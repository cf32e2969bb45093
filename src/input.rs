//! Held-key tracking on top of terminal key events.
//!
//! Terminals that support the keyboard enhancement protocol report key
//! releases, which end a hold directly. Elsewhere only press and auto-repeat
//! events arrive, so a key stays held while they keep coming within
//! [`HOLD_WINDOW`].

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// How long a key counts as held after its last press or repeat event,
/// when release events are unavailable. Covers the usual auto-repeat delay.
pub const HOLD_WINDOW: Duration = Duration::from_millis(550);

/// Which keys are currently held.
#[derive(Debug, Default)]
pub struct KeyboardState {
    last_seen: HashMap<KeyCode, Instant>,
    reports_release: bool,
}

impl KeyboardState {
    /// Create a keyboard state. `reports_release` tells whether the
    /// terminal delivers key release events.
    pub fn new(reports_release: bool) -> Self {
        Self {
            last_seen: HashMap::new(),
            reports_release,
        }
    }

    /// Record a key event received at `now`.
    pub fn record(&mut self, key: &KeyEvent, now: Instant) {
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.last_seen.insert(key.code, now);
            }
            KeyEventKind::Release => {
                self.last_seen.remove(&key.code);
            }
        }
    }

    /// Whether `code` is held at `now`.
    pub fn is_key_held(&self, code: KeyCode, now: Instant) -> bool {
        match self.last_seen.get(&code) {
            Some(_) if self.reports_release => true,
            Some(&seen) => now.saturating_duration_since(seen) <= HOLD_WINDOW,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn event(kind: KeyEventKind) -> KeyEvent {
        KeyEvent::new_with_kind(KeyCode::Char(' '), KeyModifiers::NONE, kind)
    }

    #[test]
    fn release_ends_hold() {
        let mut keys = KeyboardState::new(true);
        let start = Instant::now();
        keys.record(&event(KeyEventKind::Press), start);

        let later = start + Duration::from_secs(5);
        assert!(keys.is_key_held(KeyCode::Char(' '), later));

        keys.record(&event(KeyEventKind::Release), later);
        assert!(!keys.is_key_held(KeyCode::Char(' '), later));
    }

    #[test]
    fn hold_expires_without_repeats() {
        let mut keys = KeyboardState::new(false);
        let start = Instant::now();
        keys.record(&event(KeyEventKind::Press), start);

        assert!(keys.is_key_held(KeyCode::Char(' '), start + Duration::from_millis(100)));
        assert!(!keys.is_key_held(KeyCode::Char(' '), start + Duration::from_secs(1)));
    }

    #[test]
    fn repeats_extend_hold() {
        let mut keys = KeyboardState::new(false);
        let start = Instant::now();
        keys.record(&event(KeyEventKind::Press), start);
        keys.record(&event(KeyEventKind::Repeat), start + Duration::from_millis(500));

        assert!(keys.is_key_held(KeyCode::Char(' '), start + Duration::from_millis(900)));
        assert!(!keys.is_key_held(KeyCode::Char('x'), start));
    }
}
