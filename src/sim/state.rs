//! Game state and core simulation types
//!
//! `GameState` is the single simulation context: the frame driver owns it,
//! passes it mutably to `tick`, and hands renderers a read-only `Snapshot`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bubble::{self, Bubble};
use super::collision::Rect;
use super::current::Current;
use super::item::{self, Item};
use super::reef::Reef;
use crate::settings::{ItemSettings, Settings};

/// The player's turtle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner of the bounding box
    pub pos: Vec2,
    pub size: Vec2,
    /// Units per tick per pressed axis
    pub speed: f32,
    /// Whether any direction was held this tick
    pub moving: bool,
}

impl Player {
    /// Place the player with its top-left corner at the arena center
    pub fn new(arena: Vec2, size: Vec2, speed: f32) -> Self {
        Self {
            pos: arena / 2.0,
            size,
            speed,
            moving: false,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }
}

/// Notifications for the platform layer, drained once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A plant was collected; `total` is the new collected count
    ItemCollected { item_id: u32, total: u64 },
    /// The exhausted batch was replaced by `count` new plants
    BatchRegenerated { count: usize },
}

/// Read-only view handed to renderers
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub arena: Vec2,
    pub time_ticks: u64,
    pub player: &'a Player,
    pub items: &'a [Item],
    pub currents: &'a [Current],
    pub bubbles: &'a [Bubble],
    pub reef: &'a Reef,
}

/// Complete game state
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub arena: Vec2,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Player,
    /// Current plant batch
    pub items: Vec<Item>,
    pub item_rules: ItemSettings,
    pub currents: Vec<Current>,
    /// Visual bubbles (not gameplay-affecting)
    pub bubbles: Vec<Bubble>,
    pub reef: Reef,
    /// Collected count last pushed to the display side-channel
    pub displayed_collected: u64,
    /// Events since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    #[serde(skip)]
    rng: Pcg32,
    /// Next plant ID
    next_id: u32,
}

impl GameState {
    /// Create a new game from settings, seeded with `seed`
    ///
    /// Settings are expected to have passed `Settings::validate`.
    pub fn new(settings: &Settings, seed: u64) -> Self {
        let arena = settings.arena();
        let mut rng = Pcg32::seed_from_u64(seed);
        let bubbles = bubble::spawn_field(&mut rng, arena, settings.bubble_count);

        let mut state = Self {
            seed,
            arena,
            time_ticks: 0,
            player: Player::new(
                arena,
                Vec2::new(settings.player.width, settings.player.height),
                settings.player.speed,
            ),
            items: Vec::new(),
            item_rules: settings.items.clone(),
            currents: settings.currents.clone(),
            bubbles,
            reef: Reef::new(arena, settings.items.batch_size),
            displayed_collected: 0,
            events: Vec::new(),
            rng,
            next_id: 1,
        };

        state.items = state.spawn_batch();
        log::debug!("Game created with seed {} ({} plants)", seed, state.items.len());
        state
    }

    /// Default settings with the given seed
    pub fn with_seed(seed: u64) -> Self {
        Self::new(&Settings::default(), seed)
    }

    /// Generate a plant batch from the state's RNG and rules
    pub fn spawn_batch(&mut self) -> Vec<Item> {
        item::generate_batch(&mut self.rng, self.arena, &self.item_rules, &mut self.next_id)
    }

    /// Borrow the state for rendering
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            arena: self.arena,
            time_ticks: self.time_ticks,
            player: &self.player,
            items: &self.items,
            currents: &self.currents,
            bubbles: &self.bubbles,
            reef: &self.reef,
        }
    }

    /// Take all queued events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// RNG and the bubble field, borrowed together for the bubble update
    pub(crate) fn bubbles_and_rng(&mut self) -> (&mut [Bubble], &mut Pcg32) {
        (self.bubbles.as_mut_slice(), &mut self.rng)
    }
}
