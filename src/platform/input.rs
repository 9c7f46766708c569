//! Keyboard state
//!
//! One atomic flag per bound key. Event handlers write flags as keys go down
//! and up; the frame driver samples all of them once at the start of a tick.
//! There is no queue, so a tap shorter than a frame can be missed.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::sim::TickInput;

/// Keys the game listens to, by DOM `KeyboardEvent.key` name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundKey {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    A,
    D,
    W,
    S,
}

impl BoundKey {
    pub const ALL: [BoundKey; 8] = [
        BoundKey::ArrowLeft,
        BoundKey::ArrowRight,
        BoundKey::ArrowUp,
        BoundKey::ArrowDown,
        BoundKey::A,
        BoundKey::D,
        BoundKey::W,
        BoundKey::S,
    ];

    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" => Some(BoundKey::ArrowLeft),
            "ArrowRight" => Some(BoundKey::ArrowRight),
            "ArrowUp" => Some(BoundKey::ArrowUp),
            "ArrowDown" => Some(BoundKey::ArrowDown),
            "a" | "A" => Some(BoundKey::A),
            "d" | "D" => Some(BoundKey::D),
            "w" | "W" => Some(BoundKey::W),
            "s" | "S" => Some(BoundKey::S),
            _ => None,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Shared key table
#[derive(Debug, Default)]
pub struct InputState {
    keys: [AtomicBool; 8],
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, key: BoundKey, pressed: bool) {
        self.keys[key.index()].store(pressed, Ordering::Relaxed);
    }

    pub fn is_pressed(&self, key: BoundKey) -> bool {
        self.keys[key.index()].load(Ordering::Relaxed)
    }

    /// Record a key-down by DOM key name; returns false for unbound keys
    pub fn press(&self, name: &str) -> bool {
        self.set_named(name, true)
    }

    /// Record a key-up by DOM key name; returns false for unbound keys
    pub fn release(&self, name: &str) -> bool {
        self.set_named(name, false)
    }

    fn set_named(&self, name: &str, pressed: bool) -> bool {
        match BoundKey::from_key_name(name) {
            Some(key) => {
                self.set(key, pressed);
                true
            }
            None => false,
        }
    }

    /// Release everything (window lost focus)
    pub fn clear(&self) {
        for key in BoundKey::ALL {
            self.set(key, false);
        }
    }

    /// Fold arrows and WASD into this tick's directional flags
    pub fn sample(&self) -> TickInput {
        TickInput {
            left: self.is_pressed(BoundKey::ArrowLeft) || self.is_pressed(BoundKey::A),
            right: self.is_pressed(BoundKey::ArrowRight) || self.is_pressed(BoundKey::D),
            up: self.is_pressed(BoundKey::ArrowUp) || self.is_pressed(BoundKey::W),
            down: self.is_pressed(BoundKey::ArrowDown) || self.is_pressed(BoundKey::S),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_and_letters_are_equivalent() {
        let input = InputState::new();
        assert!(input.press("ArrowLeft"));
        assert!(input.press("w"));
        assert_eq!(
            input.sample(),
            TickInput {
                left: true,
                up: true,
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_keys_tracked_independently() {
        let input = InputState::new();
        input.press("ArrowRight");
        input.press("d");
        input.release("d");
        // Arrow still held
        assert!(input.sample().right);
        input.release("ArrowRight");
        assert!(!input.sample().right);
    }

    #[test]
    fn test_unbound_keys_ignored() {
        let input = InputState::new();
        assert!(!input.press("Enter"));
        assert!(!input.release("q"));
        assert!(!input.sample().any());
    }

    #[test]
    fn test_clear_releases_all() {
        let input = InputState::new();
        for name in ["ArrowUp", "a", "S", "ArrowRight"] {
            input.press(name);
        }
        input.clear();
        assert_eq!(input.sample(), TickInput::default());
    }

    #[test]
    fn test_shared_across_threads() {
        use std::sync::Arc;

        let input = Arc::new(InputState::new());
        let writer = Arc::clone(&input);
        std::thread::spawn(move || {
            writer.press("ArrowDown");
        })
        .join()
        .unwrap();
        assert!(input.sample().down);
    }
}
