//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed logical tick per call, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (by entity order in each field)
//! - No rendering or platform dependencies

pub mod bubble;
pub mod collision;
pub mod current;
pub mod item;
pub mod reef;
pub mod state;
pub mod tick;

pub use bubble::Bubble;
pub use collision::{Rect, aabb_overlap, clamp_into};
pub use current::{Current, CurrentKind, Direction, Spin};
pub use item::{Item, ItemKind, generate_batch};
pub use reef::Reef;
pub use state::{GameEvent, GameState, Player, Snapshot};
pub use tick::{TickInput, regenerate_items, tick};
