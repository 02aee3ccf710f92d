//! Keyboard input mapping
//!
//! Turns raw key press/release events into paddle intents. Auto-repeat
//! presses from a held key produce nothing; every other press or release
//! does.

use serde::{Deserialize, Serialize};

/// The two logical control keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
}

impl Key {
    /// Map a `KeyboardEvent.code` to a control key
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowUp" => Some(Key::Up),
            "ArrowDown" => Some(Key::Down),
            _ => None,
        }
    }

    /// `KeyboardEvent.code` for this key (also the id of its highlight element)
    pub fn code(&self) -> &'static str {
        match self {
            Key::Up => "ArrowUp",
            Key::Down => "ArrowDown",
        }
    }

    fn index(&self) -> usize {
        match self {
            Key::Up => 0,
            Key::Down => 1,
        }
    }
}

/// A raw key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub pressed: bool,
    /// Browser auto-repeat flag
    pub repeat: bool,
}

impl KeyEvent {
    pub fn press(key: Key) -> Self {
        Self {
            key,
            pressed: true,
            repeat: false,
        }
    }

    pub fn release(key: Key) -> Self {
        Self {
            key,
            pressed: false,
            repeat: false,
        }
    }

    pub fn repeat(key: Key) -> Self {
        Self {
            key,
            pressed: true,
            repeat: true,
        }
    }
}

/// Player paddle intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    Up,
    Down,
    Stop,
}

impl Move {
    /// Vertical direction: -1 up, +1 down, 0 stopped
    #[inline]
    pub fn direction(&self) -> f32 {
        match self {
            Move::Up => -1.0,
            Move::Down => 1.0,
            Move::Stop => 0.0,
        }
    }
}

/// Tracks which keys are down
#[derive(Debug, Clone, Default)]
pub struct InputMapper {
    held: [bool; 2],
}

impl InputMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intent for an event, or `None` when the event changes nothing
    pub fn map(&mut self, event: KeyEvent) -> Option<Move> {
        if event.repeat {
            return None;
        }

        self.held[event.key.index()] = event.pressed;
        Some(if event.pressed {
            match event.key {
                Key::Up => Move::Up,
                Key::Down => Move::Down,
            }
        } else {
            Move::Stop
        })
    }

    /// Focus left the page: keyups may never arrive, so drop every held key.
    /// Returns `Stop` if anything was held.
    pub fn release_all(&mut self) -> Option<Move> {
        let any = self.held.iter().any(|&h| h);
        self.held = [false; 2];
        any.then_some(Move::Stop)
    }

    /// Whether a key is currently held
    pub fn is_held(&self, key: Key) -> bool {
        self.held[key.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(Key::from_code("ArrowUp"), Some(Key::Up));
        assert_eq!(Key::from_code("ArrowDown"), Some(Key::Down));
        assert_eq!(Key::from_code("KeyW"), None);
        assert_eq!(Key::Up.code(), "ArrowUp");
    }

    #[test]
    fn test_press_and_release() {
        let mut mapper = InputMapper::new();
        assert_eq!(mapper.map(KeyEvent::press(Key::Up)), Some(Move::Up));
        assert!(mapper.is_held(Key::Up));
        assert_eq!(mapper.map(KeyEvent::release(Key::Up)), Some(Move::Stop));
        assert!(!mapper.is_held(Key::Up));
    }

    #[test]
    fn test_repeats_ignored() {
        let mut mapper = InputMapper::new();
        assert_eq!(mapper.map(KeyEvent::press(Key::Down)), Some(Move::Down));
        assert_eq!(mapper.map(KeyEvent::repeat(Key::Down)), None);
        assert_eq!(mapper.map(KeyEvent::release(Key::Down)), Some(Move::Stop));
        // A fresh press after release counts again
        assert_eq!(mapper.map(KeyEvent::press(Key::Down)), Some(Move::Down));
    }

    #[test]
    fn test_press_after_lost_keyup_counts() {
        let mut mapper = InputMapper::new();
        assert_eq!(mapper.map(KeyEvent::press(Key::Up)), Some(Move::Up));
        // Keyup went to another window; the next real press still moves
        assert_eq!(mapper.map(KeyEvent::press(Key::Up)), Some(Move::Up));
        assert!(mapper.is_held(Key::Up));
    }

    #[test]
    fn test_release_all() {
        let mut mapper = InputMapper::new();
        assert_eq!(mapper.release_all(), None);

        mapper.map(KeyEvent::press(Key::Up));
        mapper.map(KeyEvent::press(Key::Down));
        assert_eq!(mapper.release_all(), Some(Move::Stop));
        assert!(!mapper.is_held(Key::Up));
        assert!(!mapper.is_held(Key::Down));
        assert_eq!(mapper.release_all(), None);
    }

    #[test]
    fn test_any_release_stops() {
        let mut mapper = InputMapper::new();
        mapper.map(KeyEvent::press(Key::Up));
        assert_eq!(mapper.map(KeyEvent::press(Key::Down)), Some(Move::Down));
        assert_eq!(mapper.map(KeyEvent::release(Key::Up)), Some(Move::Stop));
    }

    #[test]
    fn test_direction() {
        assert_eq!(Move::Up.direction(), -1.0);
        assert_eq!(Move::Down.direction(), 1.0);
        assert_eq!(Move::Stop.direction(), 0.0);
    }
}
