//! Reef Drift - an underwater collect-and-grow arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, currents, collection, reef growth)
//! - `renderer`: Snapshot tessellation into colored triangles
//! - `platform`: Input state and display side-channel
//! - `settings`: Data-driven arena and entity configuration
//! - `error`: Configuration errors

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::ReefError;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Nominal frame rate the browser driver runs at (one tick per frame)
    pub const FRAME_RATE: u32 = 60;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Player (turtle) defaults
    pub const PLAYER_WIDTH: f32 = 100.0;
    pub const PLAYER_HEIGHT: f32 = 100.0;
    /// Units moved per tick along each pressed axis
    pub const PLAYER_SPEED: f32 = 5.0;

    /// Item (plant) batch defaults
    pub const ITEM_SIZE: f32 = 30.0;
    pub const ITEM_BATCH_SIZE: u32 = 5;
    pub const ITEM_MIN_DISTANCE: f32 = 100.0;
    pub const ITEM_MAX_ATTEMPTS: u32 = 50;
    /// Keep plants away from the side walls
    pub const ITEM_EDGE_MARGIN: f32 = 20.0;
    /// Keep plants away from the surface
    pub const ITEM_TOP_MARGIN: f32 = 50.0;
    /// Keep plants out of the reef bed
    pub const ITEM_BOTTOM_RESERVE: f32 = 100.0;

    /// Bubble field
    pub const BUBBLE_COUNT: usize = 20;
    pub const BUBBLE_FADE_PER_TICK: f32 = 0.001;
    pub const BUBBLE_DRIFT: f32 = 0.5;
    pub const BUBBLE_DRIFT_PERIOD: f32 = 30.0;
    /// Bubbles respawn up to this far below the arena floor
    pub const BUBBLE_SPAWN_DEPTH: f32 = 100.0;

    /// Current phase steps (per tick) and sway amplitudes
    pub const WHIRLPOOL_SPIN_STEP: f32 = 0.02;
    pub const STREAM_WAVE_STEP: f32 = 0.05;
    pub const STREAM_SWAY: f32 = 2.0;
    pub const VORTEX_RADIUS_STEP: f32 = 0.1;
    pub const VORTEX_SWAY: f32 = 1.5;

    /// Reef bed placement (offset from the arena floor)
    pub const REEF_X: f32 = 50.0;
    pub const REEF_FLOOR_OFFSET: f32 = 100.0;
    pub const REEF_WIDTH: f32 = 100.0;
    pub const REEF_HEIGHT: f32 = 80.0;
}
