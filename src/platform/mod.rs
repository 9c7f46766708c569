//! Platform abstraction layer
//!
//! Handles the boundary between the host and the simulation:
//! - Keyboard state, sampled once per tick
//! - The "plants collected" display side-channel
//! - Browser bindings (wasm32 only)

pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use input::{BoundKey, InputState};

use crate::sim::GameEvent;

/// External surface showing the collected-plant count
pub trait CounterDisplay {
    fn show_collected(&mut self, total: u64);
}

/// Push collection events to a display
pub fn forward_events(events: &[GameEvent], display: &mut dyn CounterDisplay) {
    for event in events {
        if let GameEvent::ItemCollected { total, .. } = *event {
            display.show_collected(total);
        }
    }
}

/// Display that writes the count to the log (native builds)
#[derive(Debug, Default)]
pub struct LogDisplay {
    pub last_shown: Option<u64>,
}

impl CounterDisplay for LogDisplay {
    fn show_collected(&mut self, total: u64) {
        log::info!("Plants collected: {}", total);
        self.last_shown = Some(total);
    }
}
