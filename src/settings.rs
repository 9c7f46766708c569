//! Game settings
//!
//! Every field defaults to the reference game's tuning, so a settings file
//! only needs the values it overrides. Loaded from a JSON file on native and
//! from LocalStorage in the browser.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ReefError;
use crate::sim::current::{self, Current};

/// Player box and speed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    pub width: f32,
    pub height: f32,
    /// Units per tick per pressed axis
    pub speed: f32,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            speed: PLAYER_SPEED,
        }
    }
}

/// Plant batch generation rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemSettings {
    /// Target plants per batch; also the reef's plants-per-stage
    pub batch_size: u32,
    /// Side length of a plant's square box
    pub size: f32,
    pub min_distance: f32,
    /// Candidate positions tried per slot before the slot is skipped
    pub max_attempts: u32,
    pub edge_margin: f32,
    pub top_margin: f32,
    pub bottom_reserve: f32,
}

impl Default for ItemSettings {
    fn default() -> Self {
        Self {
            batch_size: ITEM_BATCH_SIZE,
            size: ITEM_SIZE,
            min_distance: ITEM_MIN_DISTANCE,
            max_attempts: ITEM_MAX_ATTEMPTS,
            edge_margin: ITEM_EDGE_MARGIN,
            top_margin: ITEM_TOP_MARGIN,
            bottom_reserve: ITEM_BOTTOM_RESERVE,
        }
    }
}

/// Game settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed RNG seed; `None` lets the driver pick one
    pub seed: Option<u64>,
    pub arena_width: f32,
    pub arena_height: f32,
    pub player: PlayerSettings,
    pub items: ItemSettings,
    pub bubble_count: usize,
    pub currents: Vec<Current>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            player: PlayerSettings::default(),
            items: ItemSettings::default(),
            bubble_count: BUBBLE_COUNT,
            currents: current::default_layout(),
        }
    }
}

impl Settings {
    pub fn arena(&self) -> Vec2 {
        Vec2::new(self.arena_width, self.arena_height)
    }

    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, ReefError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, ReefError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject settings the simulation cannot run with
    pub fn validate(&self) -> Result<(), ReefError> {
        let arena = self.arena();
        if !(arena.is_finite() && arena.x > 0.0 && arena.y > 0.0) {
            return Err(invalid("arena", format!("must be positive, got {}x{}", arena.x, arena.y)));
        }
        if !(self.player.width > 0.0 && self.player.height > 0.0) {
            return Err(invalid("player", "size must be positive".to_string()));
        }
        if self.player.width > arena.x || self.player.height > arena.y {
            return Err(invalid(
                "player",
                format!(
                    "{}x{} does not fit in a {}x{} arena",
                    self.player.width, self.player.height, arena.x, arena.y
                ),
            ));
        }
        if !(self.player.speed.is_finite() && self.player.speed >= 0.0) {
            return Err(invalid("player.speed", format!("must be >= 0, got {}", self.player.speed)));
        }

        let items = &self.items;
        if items.batch_size == 0 {
            return Err(invalid("items.batch_size", "must be at least 1".to_string()));
        }
        if !(items.size.is_finite() && items.size > 0.0) {
            return Err(invalid("items.size", format!("must be positive, got {}", items.size)));
        }
        let spacing = [
            ("items.min_distance", items.min_distance),
            ("items.edge_margin", items.edge_margin),
            ("items.top_margin", items.top_margin),
            ("items.bottom_reserve", items.bottom_reserve),
        ];
        let bad = spacing.into_iter().find(|&(_, v)| !(v.is_finite() && v >= 0.0));
        if let Some((field, value)) = bad {
            return Err(invalid(field, format!("must be >= 0, got {}", value)));
        }
        if 2.0 * items.edge_margin >= arena.x {
            return Err(invalid("items.edge_margin", "leaves no horizontal room".to_string()));
        }
        if items.top_margin + items.bottom_reserve >= arena.y {
            return Err(invalid(
                "items.top_margin",
                "top margin and bottom reserve leave no vertical room".to_string(),
            ));
        }

        if let Some(i) = self.currents.iter().position(|c| !c.strength.is_finite()) {
            return Err(invalid("currents", format!("current {} has a non-finite strength", i)));
        }
        Ok(())
    }

    /// Read settings from a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_file(path: &std::path::Path) -> Result<Self, ReefError> {
        let json = std::fs::read_to_string(path).map_err(|source| ReefError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load from `path` if given, falling back to defaults on any error
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_or_default(path: Option<&std::path::Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::from_file(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{}; using default settings", e);
                Self::default()
            }
        }
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "reef_drift_settings";

    /// Load settings from LocalStorage
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }
}

fn invalid(field: &'static str, reason: String) -> ReefError {
    ReefError::InvalidSettings { field, reason }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::current::{CurrentKind, Direction};

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.arena(), Vec2::new(800.0, 600.0));
        assert_eq!(settings.currents.len(), 3);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{"seed": 42, "player": {"speed": 8.0}}"#).unwrap();
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.player.speed, 8.0);
        assert_eq!(settings.player.width, PLAYER_WIDTH);
        assert_eq!(settings.items, ItemSettings::default());
        assert_eq!(settings.currents.len(), 3);
    }

    #[test]
    fn test_json_round_trip() {
        let mut settings = Settings::default();
        settings.seed = Some(7);
        settings.currents.truncate(1);
        let json = settings.to_json().unwrap();
        let back = Settings::from_json(&json).unwrap();
        assert_eq!(back.seed, Some(7));
        assert_eq!(back.currents.len(), 1);
        assert_eq!(back.currents[0].kind, settings.currents[0].kind);
    }

    #[test]
    fn test_custom_current_layout() {
        let json = r#"{"currents": [
            {"rect": {"pos": [0.0, 0.0], "size": [50.0, 50.0]}, "strength": 3.0,
             "kind": {"type": "stream", "direction": "right"}}
        ]}"#;
        let settings = Settings::from_json(json).unwrap();
        assert_eq!(
            settings.currents[0].kind,
            CurrentKind::Stream {
                direction: Direction::Right,
                wave_offset: 0.0
            }
        );
    }

    #[test]
    fn test_rejects_player_larger_than_arena() {
        let err = Settings::from_json(r#"{"arena_width": 80.0}"#).unwrap_err();
        assert!(matches!(err, ReefError::InvalidSettings { field: "player", .. }));
    }

    #[test]
    fn test_rejects_empty_batches() {
        let err = Settings::from_json(r#"{"items": {"batch_size": 0}}"#).unwrap_err();
        assert!(matches!(err, ReefError::InvalidSettings { field: "items.batch_size", .. }));
    }

    #[test]
    fn test_rejects_nan_spacing() {
        let mut settings = Settings::default();
        settings.items.min_distance = f32::NAN;
        assert!(matches!(
            settings.validate(),
            Err(ReefError::InvalidSettings { field: "items.min_distance", .. })
        ));

        let mut settings = Settings::default();
        settings.items.size = f32::NAN;
        assert!(matches!(
            settings.validate(),
            Err(ReefError::InvalidSettings { field: "items.size", .. })
        ));
    }

    #[test]
    fn test_rejects_negative_margins() {
        let err = Settings::from_json(r#"{"items": {"top_margin": -10.0}}"#).unwrap_err();
        assert!(matches!(err, ReefError::InvalidSettings { field: "items.top_margin", .. }));
        let err = Settings::from_json(r#"{"items": {"edge_margin": -1.0}}"#).unwrap_err();
        assert!(matches!(err, ReefError::InvalidSettings { field: "items.edge_margin", .. }));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(Settings::from_json("{not json"), Err(ReefError::Parse(_))));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = std::path::Path::new("/nonexistent/reef_drift_settings.json");
        assert!(matches!(Settings::from_file(path), Err(ReefError::Io { .. })));
        let settings = Settings::load_or_default(Some(path));
        assert_eq!(settings.arena(), Vec2::new(ARENA_WIDTH, ARENA_HEIGHT));
    }
}
